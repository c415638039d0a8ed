//! Graph error type.

use thiserror::Error;

use cg_core::{EdgeId, VertexId};

/// Errors produced by `cg-graph`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("graph is full ({capacity} vertices)")]
    CapacityExceeded { capacity: usize },

    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    #[error("no vertex named {0:?}")]
    UnknownVertexName(String),

    #[error("edge {0} not found in graph")]
    EdgeNotFound(EdgeId),

    #[error("sub-graph {0:?} not found")]
    SubgraphNotFound(String),

    #[error("sub-graph {0:?} already exists")]
    DuplicateSubgraph(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
