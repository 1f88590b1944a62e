//! Value-level validation.
//!
//! The scanner checks whole strings. This module checks individual
//! identifiers and directly-constructed [`Version`] values against the same
//! grammar:
//!
//! ```text
//! identifier = [0-9A-Za-z-]+
//! numeric    = "0" | [1-9][0-9]*     (pre-release only)
//! ```

use crate::error::SemverError;
use crate::model::Version;

/// Returns true for bytes allowed inside an identifier.
#[inline]
pub fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Returns true if the identifier consists only of ASCII digits.
///
/// The empty string is not numeric.
#[inline]
pub fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Validates one identifier: non-empty, `[0-9A-Za-z-]` only.
pub fn validate_identifier(field: &'static str, identifier: &str) -> Result<(), SemverError> {
    if identifier.is_empty() || !identifier.bytes().all(is_identifier_byte) {
        return Err(SemverError::invalid_identifier(field, identifier));
    }
    Ok(())
}

/// Validates one pre-release identifier.
///
/// On top of [`validate_identifier`], a purely numeric identifier must not
/// have a leading zero unless it is exactly `0`.
pub fn validate_pre_release_identifier(identifier: &str) -> Result<(), SemverError> {
    validate_identifier("pre-release", identifier)?;
    if is_numeric(identifier) && identifier.len() > 1 && identifier.starts_with('0') {
        return Err(SemverError::invalid_identifier("pre-release", identifier));
    }
    Ok(())
}

/// Validates a sequence of pre-release identifiers. An empty sequence is
/// valid (no pre-release section).
pub fn validate_pre_release(identifiers: &[String]) -> Result<(), SemverError> {
    identifiers
        .iter()
        .try_for_each(|id| validate_pre_release_identifier(id))
}

/// Validates raw build metadata (without the leading `+`): non-empty,
/// dot-separated, every segment a non-empty identifier.
///
/// Leading zeros are allowed in build identifiers.
pub fn validate_build(build: &str) -> Result<(), SemverError> {
    if build.is_empty() {
        return Err(SemverError::invalid_identifier("build", build));
    }
    build
        .split('.')
        .try_for_each(|id| validate_identifier("build", id))
}

/// Validates a whole version value.
///
/// Useful for values assembled through the public fields rather than the
/// validating setters.
pub fn validate_version(version: &Version) -> Result<(), SemverError> {
    validate_pre_release(&version.pre_release)?;
    if let Some(build) = &version.build {
        validate_build(build)?;
    }
    Ok(())
}
