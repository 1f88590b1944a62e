//! Grammar validator for SemVer 2.0.0 strings.
//!
//! A deterministic single-pass scanner over the grammar:
//!
//! ```text
//! primary     = digits "." digits "." digits
//! digits      = "0" | [1-9][0-9]*
//! identifier  = [0-9A-Za-z-]+
//! dotted-list = identifier ("." identifier)*
//! version     = primary ["-" dotted-list] ["+" dotted-list]
//! ```
//!
//! Pre-release identifiers that are purely numeric follow the `digits` rule
//! (no leading zero); build identifiers do not.
//!
//! The scanner looks at one byte at a time, never backtracks and never
//! reads past the end of the slice. It does not allocate.

pub mod reader;

use std::ops::Range;

use crate::error::{RejectReason, SemverError};

pub use reader::Reader;

/// Primary component being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Major,
    Minor,
    Patch,
}

impl Field {
    fn next(self) -> Option<Field> {
        match self {
            Field::Major => Some(Field::Minor),
            Field::Minor => Some(Field::Patch),
            Field::Patch => None,
        }
    }
}

/// Optional dotted-list section being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    PreRelease,
    Build,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting the first digit of a primary component.
    NumberStart(Field),
    /// Primary component is exactly `0` so far.
    NumberZero(Field),
    /// Primary component starts with a non-zero digit.
    Number(Field),
    /// Expecting the first byte of an identifier.
    IdentStart(Section),
    /// Pre-release identifier is exactly `0` so far.
    PreZero,
    /// Pre-release identifier is `0` followed by digits. Only legal if a
    /// letter or hyphen follows before the identifier ends.
    PreLeadingZero,
    /// Pre-release identifier is all digits, no leading zero.
    PreNumeric,
    /// Identifier with at least one non-digit (pre-release) or any
    /// identifier bytes (build).
    Ident(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    Zero,
    NonZero,
    Letter,
    Hyphen,
    Dot,
    Plus,
    Other(u8),
    End,
}

impl ByteClass {
    #[inline]
    fn of(byte: Option<u8>) -> ByteClass {
        match byte {
            None => ByteClass::End,
            Some(b'0') => ByteClass::Zero,
            Some(b'1'..=b'9') => ByteClass::NonZero,
            Some(b) if b.is_ascii_alphabetic() => ByteClass::Letter,
            Some(b'-') => ByteClass::Hyphen,
            Some(b'.') => ByteClass::Dot,
            Some(b'+') => ByteClass::Plus,
            Some(b) => ByteClass::Other(b),
        }
    }
}

enum Transition {
    Go(State),
    Accept,
    Reject(RejectReason),
    /// No edge for this byte class; reported with the actual byte.
    Unexpected,
}

/// The whole transition table.
fn transition(state: State, class: ByteClass) -> Transition {
    use ByteClass::*;
    use Transition::*;

    match (state, class) {
        // Primary components
        (State::NumberStart(f), Zero) => Go(State::NumberZero(f)),
        (State::NumberStart(f), NonZero) => Go(State::Number(f)),
        (State::NumberZero(_), Zero | NonZero) => Reject(RejectReason::LeadingZero),
        (State::Number(f), Zero | NonZero) => Go(State::Number(f)),
        (State::NumberZero(f) | State::Number(f), Dot) => match f.next() {
            Some(next) => Go(State::NumberStart(next)),
            None => Unexpected,
        },
        (State::NumberZero(Field::Patch) | State::Number(Field::Patch), Hyphen) => {
            Go(State::IdentStart(Section::PreRelease))
        }
        (State::NumberZero(Field::Patch) | State::Number(Field::Patch), Plus) => {
            Go(State::IdentStart(Section::Build))
        }
        (State::NumberZero(Field::Patch) | State::Number(Field::Patch), End) => Accept,

        // First byte of an identifier
        (State::IdentStart(_), Dot | Plus | End) => Reject(RejectReason::EmptyIdentifier),
        (State::IdentStart(Section::PreRelease), Zero) => Go(State::PreZero),
        (State::IdentStart(Section::PreRelease), NonZero) => Go(State::PreNumeric),
        (State::IdentStart(s), Zero | NonZero | Letter | Hyphen) => Go(State::Ident(s)),

        // Numeric pre-release identifiers
        (State::PreZero, Zero | NonZero) => Go(State::PreLeadingZero),
        (State::PreLeadingZero, Zero | NonZero) => Go(State::PreLeadingZero),
        (State::PreNumeric, Zero | NonZero) => Go(State::PreNumeric),
        (State::PreZero | State::PreLeadingZero | State::PreNumeric, Letter | Hyphen) => {
            Go(State::Ident(Section::PreRelease))
        }
        (State::PreLeadingZero, Dot | Plus | End) => Reject(RejectReason::LeadingZero),

        // Identifier bodies and separators
        (State::Ident(s), Zero | NonZero | Letter | Hyphen) => Go(State::Ident(s)),
        (State::PreZero | State::PreNumeric | State::Ident(Section::PreRelease), Dot) => {
            Go(State::IdentStart(Section::PreRelease))
        }
        (State::PreZero | State::PreNumeric | State::Ident(Section::PreRelease), Plus) => {
            Go(State::IdentStart(Section::Build))
        }
        (State::Ident(Section::Build), Dot) => Go(State::IdentStart(Section::Build)),
        (State::PreZero | State::PreNumeric | State::Ident(_), End) => Accept,

        _ => Unexpected,
    }
}

/// Sections of an accepted version string.
///
/// Ranges are byte offsets into the scanned input and exclude the `-` and
/// `+` introducers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    /// The `MAJOR.MINOR.PATCH` prefix.
    pub primary: Range<usize>,
    pub pre_release: Option<Range<usize>>,
    pub build: Option<Range<usize>>,
}

impl Sections {
    pub fn has_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }
}

/// Outcome of [`validate`]: acceptance plus which sections are present.
///
/// All flags are false when the input is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validation {
    pub accepted: bool,
    pub has_primary: bool,
    pub has_pre_release: bool,
    pub has_build: bool,
}

impl From<&Sections> for Validation {
    fn from(sections: &Sections) -> Self {
        Self {
            accepted: true,
            has_primary: true,
            has_pre_release: sections.has_pre_release(),
            has_build: sections.has_build(),
        }
    }
}

/// Scans `input` and returns its sections, or the offset and reason of the
/// first byte with no transition.
pub fn scan(input: &[u8]) -> Result<Sections, SemverError> {
    let mut reader = Reader::new(input);
    let mut state = State::NumberStart(Field::Major);
    let mut pre_release_at = None;
    let mut build_at = None;

    loop {
        let pos = reader.position();
        let byte = reader.peek();
        let class = ByteClass::of(byte);

        match transition(state, class) {
            Transition::Go(next) => {
                match (class, next) {
                    (ByteClass::Hyphen, State::IdentStart(Section::PreRelease)) => {
                        pre_release_at = Some(pos)
                    }
                    (ByteClass::Plus, State::IdentStart(Section::Build)) => build_at = Some(pos),
                    _ => {}
                }
                state = next;
                reader.advance();
            }
            Transition::Accept => {
                let end = input.len();
                let primary_end = pre_release_at.or(build_at).unwrap_or(end);
                return Ok(Sections {
                    primary: 0..primary_end,
                    pre_release: pre_release_at.map(|at| at + 1..build_at.unwrap_or(end)),
                    build: build_at.map(|at| at + 1..end),
                });
            }
            Transition::Reject(reason) => return Err(reject(pos, reason)),
            Transition::Unexpected => {
                let reason = byte.map_or(RejectReason::UnexpectedEnd, RejectReason::UnexpectedByte);
                return Err(reject(pos, reason));
            }
        }
    }
}

fn reject(offset: usize, reason: RejectReason) -> SemverError {
    tracing::trace!(offset, %reason, "rejected version string");
    SemverError::rejected(offset, reason)
}

/// Checks whether `input` is exactly one SemVer 2.0.0 version string.
///
/// Rejection is uniform: every flag of the result is false.
pub fn validate(input: &[u8]) -> Validation {
    match scan(input) {
        Ok(sections) => Validation::from(&sections),
        Err(_) => Validation::default(),
    }
}

/// Returns true if `text` is a valid SemVer 2.0.0 version string.
pub fn is_valid(text: &str) -> bool {
    validate(text.as_bytes()).accepted
}
