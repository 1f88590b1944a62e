//! SemVer 2.0.0: validation, parsing, serialization and precedence.
//!
//! This crate recognizes exactly the language of
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version strings as specified by
//! SemVer 2.0.0, and orders versions by the precedence rules of that
//! specification.
//!
//! # Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//! use semver2::{compare, parse, validate};
//!
//! // Grammar check only: acceptance plus section flags
//! let flags = validate(b"1.0.0-rc.1+build.1");
//! assert!(flags.accepted && flags.has_pre_release && flags.has_build);
//! assert!(!validate(b"1.0.0-alpha..beta").accepted);
//!
//! // Parse into fields
//! let rc = parse("2.0.0-alpha.123.abc+build.42").unwrap();
//! assert_eq!(rc.pre_release, ["alpha", "123", "abc"]);
//! assert_eq!(rc.build.as_deref(), Some("build.42"));
//!
//! // Serialize back, byte-for-byte
//! assert_eq!(rc.to_string(), "2.0.0-alpha.123.abc+build.42");
//!
//! // Order by precedence
//! let release = parse("2.0.0").unwrap();
//! assert_eq!(compare(&rc, &release), Ordering::Less);
//! ```
//!
//! # Modules
//!
//! - [`scanner`]: Grammar validator (single pass, no backtracking)
//! - [`codec`]: Field extraction and serialization
//! - [`precedence`]: Precedence comparator
//! - [`model`]: The [`Version`] value and its builder
//! - [`validate`](mod@validate): Identifier and value-level validation
//! - [`error`]: Error types
//! - [`limits`]: Input limits for parsing
//!
//! # Untrusted input
//!
//! The scanner never reads past the slice it is given and does not
//! allocate. Parsing bounds input length (see [`ParseOptions`]) and rejects
//! primary components that do not fit in `u64`.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod precedence;
pub mod scanner;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{encoded_len, format_version, parse, parse_bytes, parse_with_options};
pub use error::{ErrorCode, RejectReason, SemverError};
pub use limits::{ParseOptions, MAX_VERSION_LEN};
pub use model::{Version, VersionBuilder};
pub use precedence::{compare, compare_identifiers, compare_sign, compare_str, max_by_precedence, sort_by_precedence};
pub use scanner::{is_valid, scan, validate, Sections, Validation};
pub use validate::validate_version;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SemVer version this crate implements.
pub const SPEC_VERSION: &str = "2.0.0";
