//! Serialization of versions back to text.
//!
//! For every string `s` the scanner accepts, `format_version(&parse(s)?)`
//! equals `s` byte-for-byte: identifiers are written exactly as stored, in
//! order, and build metadata is written raw.

use std::fmt::{self, Write};

use crate::model::Version;

/// Number of decimal digits in `n`.
fn decimal_width(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Exact length in bytes of the serialized version.
pub fn encoded_len(version: &Version) -> usize {
    // MAJOR.MINOR.PATCH
    let mut len = decimal_width(version.major)
        + decimal_width(version.minor)
        + decimal_width(version.patch)
        + 2;

    if !version.pre_release.is_empty() {
        // '-' plus one '.' between each pair of identifiers
        len += 1 + (version.pre_release.len() - 1);
        len += version.pre_release.iter().map(String::len).sum::<usize>();
    }

    if let Some(build) = &version.build {
        len += 1 + build.len();
    }

    len
}

/// Writes the version to any formatter sink.
pub fn write_version<W: Write>(out: &mut W, version: &Version) -> fmt::Result {
    write!(out, "{}.{}.{}", version.major, version.minor, version.patch)?;

    for (i, identifier) in version.pre_release.iter().enumerate() {
        out.write_char(if i == 0 { '-' } else { '.' })?;
        out.write_str(identifier)?;
    }

    if let Some(build) = &version.build {
        out.write_char('+')?;
        out.write_str(build)?;
    }

    Ok(())
}

/// Serializes a version into a string sized up front with [`encoded_len`].
pub fn format_version(version: &Version) -> String {
    let mut out = String::with_capacity(encoded_len(version));
    // Writing into a String cannot fail
    let _ = write_version(&mut out, version);
    debug_assert_eq!(out.len(), encoded_len(version));
    out
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_some() || f.precision().is_some() {
            f.pad(&format_version(self))
        } else {
            write_version(f, self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse;
    use crate::model::VersionBuilder;
    use proptest::prelude::*;

    #[test]
    fn test_decimal_width() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(4_294_967_295), 10);
        assert_eq!(decimal_width(u64::MAX), 20);
    }

    #[test]
    fn test_format_from_fields() {
        let v = VersionBuilder::new()
            .primary(5, 4, 3)
            .pre_release("rc.3.2.1")
            .build("sha.5114f85")
            .build_version()
            .unwrap();
        assert_eq!(format_version(&v), "5.4.3-rc.3.2.1+sha.5114f85");
        assert_eq!(v.to_string(), "5.4.3-rc.3.2.1+sha.5114f85");
        assert_eq!(encoded_len(&v), 26);
    }

    #[test]
    fn test_format_sections() {
        assert_eq!(format_version(&Version::new()), "0.0.0");

        let mut v = Version::from_parts(1, 0, 0);
        v.set_pre_release("alpha").unwrap();
        assert_eq!(format_version(&v), "1.0.0-alpha");

        v.clear_pre_release();
        v.set_build("build.1").unwrap();
        assert_eq!(format_version(&v), "1.0.0+build.1");

        let v = Version::from_parts(u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(encoded_len(&v), 62);
        assert_eq!(format_version(&v).len(), 62);
    }

    #[test]
    fn test_display_padding() {
        let v = parse("1.0.0-rc.1").unwrap();
        assert_eq!(format!("{:<12}|", v), "1.0.0-rc.1  |");
        assert_eq!(format!("{:>12}", v), "  1.0.0-rc.1");
        assert_eq!(format!("{}", v), "1.0.0-rc.1");
    }

    #[test]
    fn test_roundtrip_literals() {
        let strings = [
            "1.0.0",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0+build.1",
            "1.0.0-rc.1+build.1-b",
            "2.0.0-alpha.123.abc+build.42",
            "1.0.0+0.3.7",
            "1.0.0+001",
            "1.3.7+build.11.e0f9-85a",
            "2.0.0+build.acebfde1284-alpha.123.abc",
            "5.4.3-6.77.8+meow",
        ];

        for s in strings {
            let v = parse(s).unwrap();
            assert_eq!(format_version(&v), s, "Roundtrip failed for {}", s);
            assert_eq!(encoded_len(&v), s.len());
        }
    }

    fn numeric() -> impl Strategy<Value = String> {
        prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,8}"]
    }

    fn pre_release_identifier() -> impl Strategy<Value = String> {
        prop_oneof![numeric(), "[0-9A-Za-z-]{0,6}[A-Za-z-][0-9A-Za-z-]{0,6}"]
    }

    fn version_string() -> impl Strategy<Value = String> {
        (
            numeric(),
            numeric(),
            numeric(),
            prop::collection::vec(pre_release_identifier(), 0..4),
            prop::option::of(prop::collection::vec("[0-9A-Za-z-]{1,8}", 1..4)),
        )
            .prop_map(|(major, minor, patch, pre, build)| {
                let mut s = format!("{}.{}.{}", major, minor, patch);
                if !pre.is_empty() {
                    s.push('-');
                    s.push_str(&pre.join("."));
                }
                if let Some(build) = build {
                    s.push('+');
                    s.push_str(&build.join("."));
                }
                s
            })
    }

    proptest! {
        #[test]
        fn prop_roundtrip(s in version_string()) {
            let v = parse(&s).unwrap();
            prop_assert_eq!(format_version(&v), s.clone());
            prop_assert_eq!(encoded_len(&v), s.len());
        }

        #[test]
        fn prop_accepted_strings_roundtrip(s in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}([-+][0-9A-Za-z.+-]{0,12})?") {
            // Arbitrary near-miss inputs: whatever is accepted must round-trip
            if let Ok(v) = parse(&s) {
                prop_assert_eq!(format_version(&v), s);
            }
        }
    }
}
