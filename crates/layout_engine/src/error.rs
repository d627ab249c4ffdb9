//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation requires at least one element")]
    EmptyCollection,

    #[error("Grid capacity exceeded: {count} elements for {capacity} cells")]
    CapacityExceeded { count: usize, capacity: usize },

    #[error("Element error: {0}")]
    Element(#[from] slide_model::SlideModelError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
