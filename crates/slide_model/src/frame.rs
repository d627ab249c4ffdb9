//! Graphic frame proxies (`p:graphicFrame`) holding tables or charts

use crate::element::impl_positioned_element;
use crate::{Bounds, ElementId, PositionedElement, Transform};
use serde::{Deserialize, Serialize};

/// Content hosted by a graphic frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameContent {
    Table { rows: usize, columns: usize },
    Chart,
}

/// A table or chart container; typically used as an anchor region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicFrame {
    id: ElementId,
    pub name: String,
    pub content: FrameContent,
    transform: Option<Transform>,
}

impl_positioned_element!(GraphicFrame);

impl GraphicFrame {
    pub fn table(name: impl Into<String>, rows: usize, columns: usize) -> Self {
        Self {
            id: ElementId::new(),
            name: name.into(),
            content: FrameContent::Table { rows, columns },
            transform: None,
        }
    }

    pub fn chart(name: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            name: name.into(),
            content: FrameContent::Chart,
            transform: None,
        }
    }

    /// Place the frame at `bounds`
    pub fn at(mut self, bounds: Bounds) -> Self {
        self.set_bounds(bounds);
        self
    }
}
