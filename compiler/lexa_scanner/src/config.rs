//! Scanner configuration.

/// What the scanner does when the cursor hits bytes that are not UTF-8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Treat the undecodable bytes as end of input and return `Eof`.
    #[default]
    TreatAsEof,
    /// Return [`ScanError::MalformedInput`](crate::ScanError::MalformedInput).
    Reject,
}

/// Options for building a [`Scanner`](crate::Scanner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    pub malformed: MalformedPolicy,
    /// Inputs longer than this are refused at construction. Byte offsets are
    /// `u32`, so this can never usefully exceed `u32::MAX`.
    pub max_source_len: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            malformed: MalformedPolicy::default(),
            max_source_len: u32::MAX,
        }
    }
}

impl ScannerConfig {
    #[must_use]
    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    #[must_use]
    pub fn with_max_source_len(mut self, limit: u32) -> Self {
        self.max_source_len = limit;
        self
    }
}
