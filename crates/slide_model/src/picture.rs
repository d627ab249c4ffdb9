//! Picture proxies (`p:pic`)

use crate::element::impl_positioned_element;
use crate::{Bounds, Croppable, ElementId, PositionedElement, SourceRect, Transform};
use serde::{Deserialize, Serialize};

/// Preset geometry used to clip a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PresetGeometry {
    #[default]
    Rectangle,
    Ellipse,
}

/// An embedded image on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    id: ElementId,
    /// Display name (`p:cNvPr/@name`)
    pub name: String,
    /// Relationship id of the image part (`a:blip/@r:embed`)
    pub embed: Option<String>,
    transform: Option<Transform>,
    source_rect: SourceRect,
    /// `a:picLocks/@noChangeAspect`
    pub aspect_ratio_locked: bool,
    pub grayscale: bool,
    pub geometry: PresetGeometry,
}

impl_positioned_element!(Picture);

impl Croppable for Picture {
    fn source_rect(&self) -> SourceRect {
        self.source_rect
    }

    fn set_source_rect(&mut self, rect: SourceRect) {
        self.source_rect = rect;
    }
}

impl Picture {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            name: name.into(),
            embed: None,
            transform: None,
            source_rect: SourceRect::none(),
            aspect_ratio_locked: true,
            grayscale: false,
            geometry: PresetGeometry::Rectangle,
        }
    }

    pub fn with_bounds(name: impl Into<String>, bounds: Bounds) -> Self {
        let mut picture = Self::new(name);
        picture.set_bounds(bounds);
        picture
    }

    /// Point the picture at a different image part
    pub fn replace_image(&mut self, rel_id: impl Into<String>) {
        self.embed = Some(rel_id.into());
    }

    pub fn set_aspect_ratio_lock(&mut self, locked: bool) {
        self.aspect_ratio_locked = locked;
    }

    pub fn set_grayscale(&mut self) {
        self.grayscale = true;
    }

    /// Clip the picture to an ellipse inscribed in its bounds
    pub fn crop_to_circle(&mut self) {
        self.geometry = PresetGeometry::Ellipse;
    }
}
