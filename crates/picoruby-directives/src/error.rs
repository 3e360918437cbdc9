//! Errors raised while fingerprinting a directive set.

/// Directive fingerprint errors
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    #[error("JCS canonicalization failed: {0}")]
    Canonical(String),
}
