//! Field extraction from accepted version strings.
//!
//! Extraction only ever runs on input the scanner accepted, and works from
//! the section offsets the scanner reported rather than searching the text
//! for separators.

use std::str::FromStr;

use crate::error::SemverError;
use crate::limits::ParseOptions;
use crate::model::Version;
use crate::scanner::{self, Reader};

/// Parses a version string with default [`ParseOptions`].
pub fn parse(text: &str) -> Result<Version, SemverError> {
    parse_with_options(text, ParseOptions::default())
}

/// Parses a version from raw bytes with default [`ParseOptions`].
///
/// Only the bytes of `input` are examined; it need not be NUL-terminated or
/// valid UTF-8 (invalid UTF-8 is simply rejected by the grammar).
pub fn parse_bytes(input: &[u8]) -> Result<Version, SemverError> {
    parse_bytes_with_options(input, ParseOptions::default())
}

/// Parses a version string with the given options.
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Version, SemverError> {
    parse_bytes_with_options(text.as_bytes(), options)
}

fn parse_bytes_with_options(input: &[u8], options: ParseOptions) -> Result<Version, SemverError> {
    if input.len() > options.max_len {
        return Err(SemverError::InputTooLong {
            len: input.len(),
            max: options.max_len,
        });
    }

    let sections = scanner::scan(input)?;

    let mut reader = Reader::new(&input[sections.primary.clone()]);
    let major = read_number(&mut reader, "major")?;
    reader.advance();
    let minor = read_number(&mut reader, "minor")?;
    reader.advance();
    let patch = read_number(&mut reader, "patch")?;

    let pre_release = match &sections.pre_release {
        Some(range) => input[range.clone()]
            .split(|&b| b == b'.')
            .map(ascii_string)
            .collect(),
        None => Vec::new(),
    };
    let build = sections.build.map(|range| ascii_string(&input[range]));

    tracing::debug!(
        major,
        minor,
        patch,
        pre_release = pre_release.len(),
        has_build = build.is_some(),
        "parsed version"
    );

    Ok(Version {
        major,
        minor,
        patch,
        pre_release,
        build,
    })
}

/// Reads one run of decimal digits.
fn read_number(reader: &mut Reader<'_>, field: &'static str) -> Result<u64, SemverError> {
    reader
        .read_while(|b| b.is_ascii_digit())
        .iter()
        .try_fold(0u64, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        })
        .ok_or(SemverError::NumberOverflow { field })
}

/// The scanner only accepts ASCII, so each byte is one char.
fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = SemverError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}
