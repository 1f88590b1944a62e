//! Input limits for parsing untrusted version strings.
//!
//! The grammar check itself ([`crate::scanner::validate`]) is unbounded;
//! these limits only apply to the parse entry points, which allocate.

/// Default maximum accepted input length in bytes.
pub const MAX_VERSION_LEN: usize = u16::MAX as usize;

/// Options controlling [`crate::codec::parse_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Inputs longer than this are rejected before scanning.
    pub max_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_len: MAX_VERSION_LEN,
        }
    }
}

impl ParseOptions {
    /// Creates default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with no length limit.
    pub fn unbounded() -> Self {
        Self { max_len: usize::MAX }
    }

    /// Sets the maximum input length.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}
