//! Builder API for ergonomic Version construction.
//!
//! ```rust
//! use semver2::VersionBuilder;
//!
//! let version = VersionBuilder::new()
//!     .primary(1, 2, 3)
//!     .pre_release("rc.1")
//!     .build("sha.5114f85")
//!     .build_version()
//!     .unwrap();
//!
//! assert_eq!(version.to_string(), "1.2.3-rc.1+sha.5114f85");
//! ```

use crate::error::SemverError;
use crate::model::Version;

/// Builder for constructing a validated [`Version`].
///
/// Sections are validated when [`build_version`](Self::build_version) runs,
/// so the fluent chain itself never fails.
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder<'a> {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre_release: Option<&'a str>,
    build: Option<&'a str>,
}

impl<'a> VersionBuilder<'a> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all three primary components.
    pub fn primary(self, major: u64, minor: u64, patch: u64) -> Self {
        self.major(major).minor(minor).patch(patch)
    }

    pub fn major(mut self, major: u64) -> Self {
        self.major = Some(major);
        self
    }

    pub fn minor(mut self, minor: u64) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn patch(mut self, patch: u64) -> Self {
        self.patch = Some(patch);
        self
    }

    /// Sets the dot-separated pre-release section (without `-`).
    pub fn pre_release(mut self, pre_release: &'a str) -> Self {
        self.pre_release = Some(pre_release);
        self
    }

    /// Sets the build metadata (without `+`).
    pub fn build(mut self, build: &'a str) -> Self {
        self.build = Some(build);
        self
    }

    /// Validates the collected sections and produces the version.
    ///
    /// Returns [`SemverError::MissingArgument`] if none of major, minor or
    /// patch was given; unset components among them default to 0.
    pub fn build_version(self) -> Result<Version, SemverError> {
        if self.major.is_none() && self.minor.is_none() && self.patch.is_none() {
            return Err(SemverError::MissingArgument { field: "primary" });
        }

        let mut version = Version::from_parts(
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        );
        if let Some(pre_release) = self.pre_release {
            version.set_pre_release(pre_release)?;
        }
        if let Some(build) = self.build {
            version.set_build(build)?;
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_builder_full() {
        let v = VersionBuilder::new()
            .primary(5, 4, 3)
            .pre_release("rc.3.2.1")
            .build("sha.5114f85")
            .build_version()
            .unwrap();

        assert_eq!((v.major, v.minor, v.patch), (5, 4, 3));
        assert_eq!(v.pre_release, ["rc", "3", "2", "1"]);
        assert_eq!(v.build.as_deref(), Some("sha.5114f85"));
    }

    #[test]
    fn test_builder_partial_primary() {
        let v = VersionBuilder::new().major(2).build_version().unwrap();
        assert_eq!(v, Version::from_parts(2, 0, 0));
    }

    #[test]
    fn test_builder_missing_primary() {
        let err = VersionBuilder::new().pre_release("alpha").build_version().unwrap_err();
        assert_eq!(err, SemverError::MissingArgument { field: "primary" });
        assert_eq!(err.code(), ErrorCode::MissingArgument);
    }

    #[test]
    fn test_builder_invalid_section() {
        let err = VersionBuilder::new()
            .primary(1, 0, 0)
            .build("bui ld")
            .build_version()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }
}
