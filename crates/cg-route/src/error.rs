//! Routing error type.

use thiserror::Error;

use cg_core::VertexId;

/// Errors produced by `cg-route`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("no path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    #[error("vertex {0} is not in the graph")]
    UnknownVertex(VertexId),

    /// The predecessor chain stopped at `at` before reaching the start.
    #[error("predecessor chain broken at {at}")]
    MalformedPath { at: VertexId },
}

pub type RouteResult<T> = Result<T, RouteError>;
