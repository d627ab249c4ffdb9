//! Alignment and relative placement

use crate::geometry::{apply_all, read_all, set_axis_position};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use slide_model::{Axis, Bounds, PositionedElement};
use tracing::debug;

/// Edge or centre line to align on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    /// Horizontal centres
    Center,
    /// Vertical centres
    Middle,
}

impl Alignment {
    /// Axis whose position the alignment changes
    pub fn axis(self) -> Axis {
        match self {
            Alignment::Left | Alignment::Right | Alignment::Center => Axis::Horizontal,
            Alignment::Top | Alignment::Bottom | Alignment::Middle => Axis::Vertical,
        }
    }

    /// New position along [`Self::axis`] for `target` aligned against `reference`
    fn position(self, target: &Bounds, reference: &Bounds) -> i64 {
        match self {
            Alignment::Left => reference.left,
            Alignment::Top => reference.top,
            Alignment::Right => reference.right() - target.width,
            Alignment::Bottom => reference.bottom() - target.height,
            Alignment::Center => reference.left + reference.width / 2 - target.width / 2,
            Alignment::Middle => reference.top + reference.height / 2 - target.height / 2,
        }
    }
}

/// Align a single element against an anchor
pub fn align_to<E, A>(element: &mut E, anchor: &A, alignment: Alignment) -> Result<()>
where
    E: PositionedElement + ?Sized,
    A: PositionedElement + ?Sized,
{
    let reference = anchor.bounds()?;
    let target = element.bounds()?;
    element.set_position(alignment.axis(), alignment.position(&target, &reference));
    Ok(())
}

/// Align every element after the first against the first element
pub fn align_to_first<E: PositionedElement>(elements: &mut [E], alignment: Alignment) -> Result<()> {
    if elements.is_empty() {
        return Err(LayoutError::EmptyCollection);
    }
    let mut plan = read_all(elements)?;
    let reference = plan[0];
    let axis = alignment.axis();
    debug!(count = elements.len(), ?alignment, "aligning to first element");

    for bounds in plan.iter_mut().skip(1) {
        let position = alignment.position(bounds, &reference);
        set_axis_position(bounds, axis, position);
    }
    apply_all(elements, &plan);
    Ok(())
}

/// Centre every element on the first element's centre line along `axis`
pub fn align_centers<E: PositionedElement>(elements: &mut [E], axis: Axis) -> Result<()> {
    let alignment = match axis {
        Axis::Horizontal => Alignment::Center,
        Axis::Vertical => Alignment::Middle,
    };
    align_to_first(elements, alignment)
}

/// Place `element` after `anchor` along `axis`, separated by `gap`
pub fn place_after<E, A>(element: &mut E, anchor: &A, axis: Axis, gap: i64) -> Result<()>
where
    E: PositionedElement + ?Sized,
    A: PositionedElement + ?Sized,
{
    let far_edge = anchor.position(axis)? + anchor.extent(axis)?;
    element.set_position(axis, far_edge + gap);
    Ok(())
}

/// Move `element` by `delta` along `axis`
pub fn move_by<E: PositionedElement + ?Sized>(element: &mut E, axis: Axis, delta: i64) -> Result<()> {
    let position = element.position(axis)?;
    element.set_position(axis, position + delta);
    Ok(())
}

/// Exchange the top-left corners of two elements
pub fn swap_positions<A, B>(a: &mut A, b: &mut B) -> Result<()>
where
    A: PositionedElement + ?Sized,
    B: PositionedElement + ?Sized,
{
    let first = a.bounds()?;
    let second = b.bounds()?;
    a.set_left(second.left);
    a.set_top(second.top);
    b.set_left(first.left);
    b.set_top(first.top);
    Ok(())
}

/// Exchange the centre points of two elements; sizes are kept
pub fn swap_centers<A, B>(a: &mut A, b: &mut B) -> Result<()>
where
    A: PositionedElement + ?Sized,
    B: PositionedElement + ?Sized,
{
    let first = a.bounds()?;
    let second = b.bounds()?;
    a.set_left(second.left + second.width / 2 - first.width / 2);
    a.set_top(second.top + second.height / 2 - first.height / 2);
    b.set_left(first.left + first.width / 2 - second.width / 2);
    b.set_top(first.top + first.height / 2 - second.height / 2);
    Ok(())
}

/// Give every element the first element's width and height
pub fn match_size_to_first<E: PositionedElement>(elements: &mut [E]) -> Result<()> {
    if elements.is_empty() {
        return Err(LayoutError::EmptyCollection);
    }
    let mut plan = read_all(elements)?;
    let (width, height) = (plan[0].width, plan[0].height);
    for bounds in plan.iter_mut() {
        bounds.width = width;
        bounds.height = height;
    }
    apply_all(elements, &plan);
    Ok(())
}
