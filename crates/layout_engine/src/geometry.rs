//! Layout geometry shared by the distributor, grid and alignment passes

use crate::Result;
use serde::{Deserialize, Serialize};
use slide_model::{inches, Axis, Bounds, PositionedElement};

/// Inner padding of an anchor region, in EMU
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl Padding {
    pub fn new(top: i64, bottom: i64, left: i64, right: i64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Same padding on every side
    pub fn uniform(value: i64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn is_non_negative(&self) -> bool {
        self.top >= 0 && self.bottom >= 0 && self.left >= 0 && self.right >= 0
    }

    /// Area left inside `outer` after removing the padding
    pub fn inset(&self, outer: Bounds) -> Bounds {
        Bounds::new(
            outer.left + self.left,
            outer.top + self.top,
            outer.width - self.left - self.right,
            outer.height - self.top - self.bottom,
        )
    }
}

/// Spacing between adjacent grid cells, in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gutter {
    pub horizontal: i64,
    pub vertical: i64,
}

impl Default for Gutter {
    fn default() -> Self {
        Self::uniform(inches(0.1))
    }
}

impl Gutter {
    pub fn new(horizontal: i64, vertical: i64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn uniform(value: i64) -> Self {
        Self::new(value, value)
    }
}

/// Read the bounds of every element before any write happens, so that a
/// missing transform aborts the operation with nothing mutated.
pub(crate) fn read_all<E: PositionedElement>(elements: &[E]) -> Result<Vec<Bounds>> {
    elements
        .iter()
        .map(|e| e.bounds().map_err(Into::into))
        .collect()
}

/// Write back a plan produced from [`read_all`]
pub(crate) fn apply_all<E: PositionedElement>(elements: &mut [E], plan: &[Bounds]) {
    for (element, bounds) in elements.iter_mut().zip(plan) {
        element.set_bounds(*bounds);
    }
}

/// Overwrite the offset of `bounds` along `axis`
pub(crate) fn set_axis_position(bounds: &mut Bounds, axis: Axis, value: i64) {
    match axis {
        Axis::Horizontal => bounds.left = value,
        Axis::Vertical => bounds.top = value,
    }
}
