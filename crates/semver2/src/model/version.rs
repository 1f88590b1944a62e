//! The in-memory version value.

use crate::error::SemverError;
use crate::validate::{validate_build, validate_pre_release_identifier};

/// A SemVer 2.0.0 version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Fields are public so values can be built directly; such values can be
/// re-checked with [`crate::validate::validate_version`]. The setters below
/// validate on write.
///
/// Equality is structural and includes build metadata. Precedence, which
/// ignores build metadata, lives in [`crate::precedence`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Dot-separated pre-release identifiers, in written order. Empty when
    /// the version has no pre-release section.
    pub pre_release: Vec<String>,
    /// Raw build metadata (without the leading `+`).
    pub build: Option<String>,
}

impl Version {
    /// Creates `0.0.0` with no pre-release or build metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a release version from its primary components.
    pub fn from_parts(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: None,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    pub fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    pub fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    /// Returns the pre-release identifiers.
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Returns true if the version has a pre-release section.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Returns the pre-release section joined with dots, or `None` if there
    /// is none.
    pub fn pre_release_str(&self) -> Option<String> {
        if self.pre_release.is_empty() {
            None
        } else {
            Some(self.pre_release.join("."))
        }
    }

    /// Replaces the pre-release section with the dot-separated identifiers
    /// in `pre_release` (without the leading `-`).
    ///
    /// On error the existing identifiers are left untouched.
    pub fn set_pre_release(&mut self, pre_release: &str) -> Result<(), SemverError> {
        self.set_pre_release_identifiers(pre_release.split('.'))
    }

    /// Replaces the pre-release section with the given identifiers.
    pub fn set_pre_release_identifiers<I, S>(&mut self, identifiers: I) -> Result<(), SemverError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Vec::new();
        for identifier in identifiers {
            let identifier = identifier.into();
            validate_pre_release_identifier(&identifier)?;
            parsed.push(identifier);
        }
        if parsed.is_empty() {
            return Err(SemverError::invalid_identifier("pre-release", ""));
        }
        self.pre_release = parsed;
        Ok(())
    }

    /// Removes the pre-release section.
    pub fn clear_pre_release(&mut self) {
        self.pre_release.clear();
    }

    /// Returns the build metadata, if any.
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Sets the build metadata (without the leading `+`).
    pub fn set_build(&mut self, build: &str) -> Result<(), SemverError> {
        validate_build(build)?;
        self.build = Some(build.to_string());
        Ok(())
    }

    /// Removes the build metadata.
    pub fn clear_build(&mut self) {
        self.build = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let v = Version::new();
        assert_eq!((v.major(), v.minor(), v.patch()), (0, 0, 0));
        assert!(v.pre_release().is_empty());
        assert_eq!(v.build(), None);
        assert!(!v.is_pre_release());
    }

    #[test]
    fn test_set_get_primary() {
        let mut v = Version::new();
        v.set_major(5);
        v.set_minor(4);
        v.set_patch(3);
        assert_eq!((v.major(), v.minor(), v.patch()), (5, 4, 3));
    }

    #[test]
    fn test_set_get_pre_release() {
        let mut v = Version::new();
        v.set_pre_release("rc.3.2.1").unwrap();
        assert_eq!(v.pre_release(), ["rc", "3", "2", "1"]);
        assert_eq!(v.pre_release_str().as_deref(), Some("rc.3.2.1"));

        // Replaces rather than appends
        v.set_pre_release("beta").unwrap();
        assert_eq!(v.pre_release(), ["beta"]);

        v.clear_pre_release();
        assert_eq!(v.pre_release_str(), None);
    }

    #[test]
    fn test_set_pre_release_rejects_invalid() {
        let mut v = Version::new();
        v.set_pre_release("alpha").unwrap();

        for bad in ["", "alpha..beta", "alpha.", "01", "al pha", "a+b"] {
            assert!(v.set_pre_release(bad).is_err(), "accepted {:?}", bad);
        }
        // Failed writes leave the old value in place
        assert_eq!(v.pre_release(), ["alpha"]);

        let empty: [&str; 0] = [];
        assert!(v.set_pre_release_identifiers(empty).is_err());
    }

    #[test]
    fn test_set_get_build() {
        let mut v = Version::new();
        v.set_build("sha.5114f85").unwrap();
        assert_eq!(v.build(), Some("sha.5114f85"));

        // Leading zeros are fine in build metadata
        v.set_build("001.0-x").unwrap();
        assert_eq!(v.build(), Some("001.0-x"));

        assert!(v.set_build("").is_err());
        assert!(v.set_build("build.").is_err());
        assert!(v.set_build("b[uild").is_err());
        assert_eq!(v.build(), Some("001.0-x"));

        v.clear_build();
        assert_eq!(v.build(), None);
    }
}
