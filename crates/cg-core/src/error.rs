//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where geometry or configuration checks surface.

use thiserror::Error;

/// Errors produced by `cg-core` validation helpers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
