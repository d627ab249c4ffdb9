//! Error types for slide model operations

use crate::ElementId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlideModelError {
    #[error("Element {element} has no offset/extents")]
    MissingTransform { element: ElementId },

    #[error("Invalid accent index: {0} (expected 1-4)")]
    InvalidAccent(u8),

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),
}

pub type Result<T> = std::result::Result<T, SlideModelError>;
