//! Version precedence (SemVer 2.0.0 §11).
//!
//! Versions are ordered by, in turn:
//! 1. major, minor and patch, numerically;
//! 2. presence of a pre-release section: a release outranks any of its
//!    pre-releases;
//! 3. pre-release identifiers, pairwise from the left. Numeric identifiers
//!    compare numerically and rank below alphanumeric ones; alphanumeric
//!    identifiers compare byte-wise in ASCII order;
//! 4. number of pre-release identifiers, when one list is a prefix of the
//!    other.
//!
//! Build metadata never takes part. Two versions differing only in build
//! metadata have equal precedence but are not `==`, which is why
//! [`Version`] does not implement `Ord`.

use std::cmp::Ordering;

use crate::codec::parse;
use crate::error::SemverError;
use crate::model::Version;
use crate::validate::is_numeric;

/// Compares two versions by precedence.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| compare_pre_release(&a.pre_release, &b.pre_release))
}

/// Compares two versions by precedence and returns -1, 0 or 1.
pub fn compare_sign(a: &Version, b: &Version) -> i32 {
    compare(a, b) as i32
}

/// Parses two version strings and compares them by precedence.
pub fn compare_str(a: &str, b: &str) -> Result<Ordering, SemverError> {
    Ok(compare(&parse(a)?, &parse(b)?))
}

/// Compares two pre-release identifier lists.
///
/// An empty list means "no pre-release" and ranks above any non-empty one.
pub fn compare_pre_release(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            for (x, y) in a.iter().zip(b) {
                let ord = compare_identifiers(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            a.len().cmp(&b.len())
        }
    }
}

/// Compares two pre-release identifiers.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Compares two digit strings by value, at any magnitude.
///
/// With leading zeros removed, a shorter digit string is a smaller number
/// and equal-length strings order like their bytes.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len()
        .cmp(&b.len())
        .then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

/// Stable sort in ascending precedence.
pub fn sort_by_precedence(versions: &mut [Version]) {
    versions.sort_by(compare);
}

/// Returns the version with the highest precedence. Among equals, the last
/// one wins.
pub fn max_by_precedence<'a, I>(versions: I) -> Option<&'a Version>
where
    I: IntoIterator<Item = &'a Version>,
{
    versions.into_iter().max_by(|a, b| compare(a, b))
}

impl Version {
    /// Compares by precedence; see [`compare`].
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        compare(self, other)
    }

    /// Returns true if both versions have equal precedence, i.e. they are
    /// equal ignoring build metadata.
    pub fn precedence_eq(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Equal
    }
}
