//! Query-layer error type.

use thiserror::Error;

use cg_core::{CoreError, Point};
use cg_graph::GraphError;
use cg_route::RouteError;
use cg_spatial::SpatialError;

/// Errors produced by `cg-query`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    #[error("unknown block {0:?}")]
    UnknownBlock(String),

    #[error("unknown register {0:?}")]
    UnknownRegister(String),

    #[error("unknown path {0:?}")]
    UnknownPath(String),

    #[error("no closed region with id {0}")]
    UnknownRegion(i64),

    #[error("invalid block face {0:?}")]
    InvalidFace(char),

    #[error("no graph vertex within {radius} of {at}")]
    NoVertexNear { at: Point, radius: f64 },

    #[error("path {0:?} has no points")]
    EmptyPath(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type QueryResult<T> = Result<T, QueryError>;
