//! Shape proxies (`p:sp`)
//!
//! A shape carries its transform plus body fill and outline. Style properties
//! are optional fields that are created with defaults on first write.

use crate::element::impl_positioned_element;
use crate::{AccentColor, Bounds, ElementId, Fill, PositionedElement, Result, Transform};
use serde::{Deserialize, Serialize};

/// Outline dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineDash {
    #[default]
    Solid,
    Dash,
    Dot,
}

/// Shape outline (`a:ln`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outline {
    /// Line fill; `None` inherits from the theme
    pub fill: Option<Fill>,
    /// Line width in EMU; `None` inherits from the theme
    pub width: Option<i64>,
    pub dash: LineDash,
}

/// A geometric shape or text box on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ElementId,
    /// Display name (`p:cNvPr/@name`)
    pub name: String,
    transform: Option<Transform>,
    /// Body fill; `None` inherits from the theme
    pub fill: Option<Fill>,
    outline: Option<Outline>,
    /// Fill transparency in percent (0 = opaque)
    pub transparency: Option<u8>,
}

impl_positioned_element!(Shape);

impl Shape {
    /// Create a shape without a transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            name: name.into(),
            transform: None,
            fill: None,
            outline: None,
            transparency: None,
        }
    }

    /// Create a shape placed at `bounds`
    pub fn with_bounds(name: impl Into<String>, bounds: Bounds) -> Self {
        let mut shape = Self::new(name);
        shape.set_bounds(bounds);
        shape
    }

    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// Outline, created with defaults if absent
    pub fn outline_mut(&mut self) -> &mut Outline {
        self.outline.get_or_insert_with(Outline::default)
    }

    pub fn set_scheme_fill(&mut self, accent: AccentColor) {
        self.fill = Some(Fill::Scheme(accent));
    }

    /// Set the body fill from a numeric accent index (1-4)
    pub fn set_accent_fill(&mut self, index: u8) -> Result<()> {
        self.set_scheme_fill(AccentColor::try_from(index)?);
        Ok(())
    }

    pub fn set_outline_scheme_fill(&mut self, accent: AccentColor) {
        self.outline_mut().fill = Some(Fill::Scheme(accent));
    }

    pub fn set_outline_fill(&mut self, fill: Fill) {
        self.outline_mut().fill = Some(fill);
    }

    pub fn set_outline_width(&mut self, width: i64) {
        self.outline_mut().width = Some(width);
    }

    pub fn set_outline_dash(&mut self, dash: LineDash) {
        self.outline_mut().dash = dash;
    }

    /// Set fill transparency, clamped to 0..=100 percent
    pub fn set_transparency(&mut self, percent: u8) {
        self.transparency = Some(percent.min(100));
    }

    pub fn copy_fill_from(&mut self, other: &Shape) {
        self.fill = other.fill.clone();
    }

    pub fn copy_outline_from(&mut self, other: &Shape) {
        self.outline = other.outline.clone();
    }

    pub fn copy_outline_fill_from(&mut self, other: &Shape) {
        let fill = other.outline.as_ref().and_then(|o| o.fill.clone());
        self.outline_mut().fill = fill;
    }
}

/// Copy the first shape's body fill onto every other shape
pub fn copy_first_fill(shapes: &mut [Shape]) {
    if let Some((first, rest)) = shapes.split_first_mut() {
        for shape in rest {
            shape.copy_fill_from(first);
        }
    }
}

/// Copy the first shape's whole outline onto every other shape
pub fn copy_first_outline(shapes: &mut [Shape]) {
    if let Some((first, rest)) = shapes.split_first_mut() {
        for shape in rest {
            shape.copy_outline_from(first);
        }
    }
}

/// Copy only the first shape's outline fill onto every other shape
pub fn copy_first_outline_fill(shapes: &mut [Shape]) {
    if let Some((first, rest)) = shapes.split_first_mut() {
        for shape in rest {
            shape.copy_outline_fill_from(first);
        }
    }
}
