//! # Error Types
//!
//! Errors only arise when parsing registry codes. Rule evaluation is total
//! and never returns one of these; a violated rule is an
//! [`AmlStatus`](crate::AmlStatus), not an error. Filing I/O errors live in
//! the CLI, which reports them through `anyhow`.

use thiserror::Error;

/// Top-level error type for the amalgamation stack.
#[derive(Error, Debug)]
pub enum AmalgError {
    /// A corp type code the registry does not define.
    #[error("unknown corp type code: {0:?}")]
    UnknownCorpType(String),

    /// An amalgamation status string that is not one of the nine statuses.
    #[error("unknown amalgamation status: {0:?}")]
    UnknownStatus(String),

    /// A business type other than `LEAR` or `FOREIGN`.
    #[error("unknown amalgamating business type: {0:?}")]
    UnknownBusinessType(String),
}
