use std::io;
use thiserror::Error;

/// Errors raised by the grammar engine
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed production line (expected `LHS->alt1|alt2|...`): {0}")]
    MalformedProduction(String),

    #[error("empty alternative list for non-terminal: {0}")]
    EmptyProduction(String),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("expansion limit of {limit} exceeded while expanding `{symbol}`")]
    ExpansionLimitExceeded { symbol: String, limit: usize },
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Errors raised while loading a graph description
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
