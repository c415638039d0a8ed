//! Spatial-index error type.

use thiserror::Error;

use cg_core::{CoreError, EntityId};

/// Errors produced by `cg-spatial`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpatialError {
    #[error("invalid treap configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("entity {0} is not indexed")]
    EntityNotFound(EntityId),

    /// Raised only by [`SpatialTreap::verify`](crate::SpatialTreap::verify).
    #[error("treap invariant broken: {0}")]
    Invariant(String),
}

impl From<CoreError> for SpatialError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidGeometry(msg) => SpatialError::InvalidGeometry(msg),
            CoreError::Config(msg) => SpatialError::InvalidConfig(msg),
        }
    }
}

pub type SpatialResult<T> = Result<T, SpatialError>;
