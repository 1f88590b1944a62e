//! Data model types.
//!
//! This module contains the version value shared by the scanner, codec and
//! comparator:
//! - Versions (primary triple, pre-release identifiers, build metadata)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod version;

pub use builder::VersionBuilder;
pub use version::Version;
