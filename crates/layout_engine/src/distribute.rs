//! Positional distribution
//!
//! Spreads an ordered list of elements along one axis, starting at the first
//! element's position and stepping toward the last element's position:
//! - The step is the span between first and last divided by the element count
//! - An optional minimum gap widens the step when the span has room for it
//! - A zero span leaves every element where it is
//!
//! Every element's bounds are read before the first write, so a failing
//! element leaves the whole collection untouched.

use crate::geometry::{apply_all, read_all, set_axis_position};
use crate::{LayoutError, Result};
use slide_model::{Axis, PositionedElement};
use tracing::{debug, trace};

/// Compute distributed positions in place.
///
/// `positions[0]` and the last entry define the span; every entry, including
/// both ends, is rewritten. Returns `false` when the span is empty and nothing
/// was changed.
pub fn distribute_positions(positions: &mut [i64], min_gap: Option<i64>) -> bool {
    let count = positions.len();
    if count < 2 {
        return false;
    }

    let start = positions[0];
    let end = positions[count - 1];
    let span = (end - start).abs();
    if span == 0 {
        return false;
    }

    let count = count as i64;
    let mut step = span / count;
    if let Some(gap) = min_gap {
        if gap.saturating_mul(count) < span {
            step += gap;
        }
    }
    let step = if end > start { step } else { -step };

    let mut cursor = start;
    for position in positions.iter_mut() {
        *position = cursor;
        cursor += step;
    }
    true
}

fn check_min_gap(min_gap: Option<i64>) -> Result<()> {
    match min_gap {
        Some(gap) if gap <= 0 => Err(LayoutError::InvalidArgument(format!(
            "minimum gap must be positive, got {}",
            gap
        ))),
        _ => Ok(()),
    }
}

/// Distribute `elements` along `axis` between the first and last element.
///
/// With a single element, or when first and last share a position, nothing moves.
pub fn distribute_along_axis<E: PositionedElement>(
    elements: &mut [E],
    axis: Axis,
    min_gap: Option<i64>,
) -> Result<()> {
    if elements.is_empty() {
        return Err(LayoutError::EmptyCollection);
    }
    check_min_gap(min_gap)?;

    let mut plan = read_all(elements)?;
    let mut positions: Vec<i64> = plan.iter().map(|b| b.position(axis)).collect();
    debug!(
        count = elements.len(),
        %axis,
        start = positions[0],
        end = positions[positions.len() - 1],
        "distributing elements"
    );

    if !distribute_positions(&mut positions, min_gap) {
        trace!("zero span, nothing to distribute");
        return Ok(());
    }

    for (bounds, position) in plan.iter_mut().zip(&positions) {
        set_axis_position(bounds, axis, *position);
    }
    apply_all(elements, &plan);
    Ok(())
}

/// Distribute `elements` inside `anchor`, keeping `padding` from both ends.
///
/// The first element is moved to the anchor's leading edge plus padding and the
/// last element's far edge to the anchor's far edge minus padding. The rest are
/// distributed between them, then every element is aligned on the cross axis
/// with the first element.
pub fn distribute_in_anchor<E, A>(
    elements: &mut [E],
    anchor: &A,
    axis: Axis,
    padding: i64,
    min_gap: Option<i64>,
) -> Result<()>
where
    E: PositionedElement,
    A: PositionedElement + ?Sized,
{
    if elements.is_empty() {
        return Err(LayoutError::EmptyCollection);
    }
    if padding < 0 {
        return Err(LayoutError::InvalidArgument(format!(
            "padding must not be negative, got {}",
            padding
        )));
    }
    check_min_gap(min_gap)?;

    let area = anchor.bounds()?;
    let mut plan = read_all(elements)?;
    let last = plan.len() - 1;

    let leading = area.position(axis) + padding;
    let trailing = area.position(axis) + area.extent(axis) - padding - plan[last].extent(axis);
    debug!(
        count = elements.len(),
        %axis,
        leading,
        trailing,
        "distributing elements in anchor"
    );

    let mut positions: Vec<i64> = plan.iter().map(|b| b.position(axis)).collect();
    positions[last] = trailing;
    positions[0] = leading;
    distribute_positions(&mut positions, min_gap);

    let cross = axis.cross();
    let cross_position = plan[0].position(cross);
    for (bounds, position) in plan.iter_mut().zip(&positions) {
        set_axis_position(bounds, axis, *position);
        set_axis_position(bounds, cross, cross_position);
    }
    apply_all(elements, &plan);
    Ok(())
}
