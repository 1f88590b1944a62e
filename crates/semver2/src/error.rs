//! Error types for scanning, parsing and field-level writes.

use thiserror::Error;

/// Error kinds surfaced to callers.
///
/// Every [`SemverError`] maps onto exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Input does not match the SemVer 2.0.0 grammar
    InvalidInput,
    /// E002: A required value was not supplied
    MissingArgument,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "E001",
            ErrorCode::MissingArgument => "E002",
        }
    }
}

/// Why the scanner stopped.
///
/// This is diagnostic detail only: any reason means the whole input is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// A byte with no transition from the current state.
    UnexpectedByte(u8),
    /// Input ended in a non-accepting state.
    UnexpectedEnd,
    /// A numeric run of more than one digit starts with `0`.
    LeadingZero,
    /// A dot, hyphen-introducer or plus with nothing after it.
    EmptyIdentifier,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::UnexpectedByte(b) if b.is_ascii_graphic() || *b == b' ' => {
                write!(f, "unexpected character {:?}", *b as char)
            }
            RejectReason::UnexpectedByte(b) => write!(f, "unexpected byte 0x{:02x}", b),
            RejectReason::UnexpectedEnd => f.write_str("unexpected end of input"),
            RejectReason::LeadingZero => f.write_str("numeric identifier has a leading zero"),
            RejectReason::EmptyIdentifier => f.write_str("empty identifier"),
        }
    }
}

/// Error returned by every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemverError {
    // === E001: Invalid input ===
    #[error("[E001] invalid version at byte {offset}: {reason}")]
    Rejected { offset: usize, reason: RejectReason },

    #[error("[E001] input length {len} exceeds maximum {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("[E001] {field} version does not fit in 64 bits")]
    NumberOverflow { field: &'static str },

    #[error("[E001] invalid {field} identifier {identifier:?}")]
    InvalidIdentifier {
        field: &'static str,
        identifier: String,
    },

    // === E002: Missing argument ===
    #[error("[E002] missing required {field}")]
    MissingArgument { field: &'static str },
}

impl SemverError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SemverError::MissingArgument { .. } => ErrorCode::MissingArgument,
            _ => ErrorCode::InvalidInput,
        }
    }

    pub(crate) fn rejected(offset: usize, reason: RejectReason) -> Self {
        SemverError::Rejected { offset, reason }
    }

    pub(crate) fn invalid_identifier(field: &'static str, identifier: &str) -> Self {
        SemverError::InvalidIdentifier {
            field,
            identifier: identifier.to_string(),
        }
    }
}
