//! Aspect-ratio preserving scaling and cropping
//!
//! Scale factors are computed in `f64` from the untruncated operands, so chained
//! scale calls do not accumulate integer-division error. Derived dimensions are
//! rounded to the nearest EMU and never drop below one.

use crate::{LayoutError, Result};
use slide_model::{Croppable, PositionedElement, SourceRect, CROP_FULL};
use tracing::trace;

fn require_positive(what: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(LayoutError::InvalidArgument(format!(
            "{} must be positive, got {}",
            what, value
        )));
    }
    Ok(())
}

fn scale_dimension(value: i64, factor: f64) -> i64 {
    ((value as f64 * factor).round() as i64).max(1)
}

/// Size `(width, height)` after scaling the height to `target`
pub fn fit_height(width: i64, height: i64, target: i64) -> (i64, i64) {
    let factor = target as f64 / height as f64;
    (scale_dimension(width, factor), target)
}

/// Size `(width, height)` after scaling the width to `target`
pub fn fit_width(width: i64, height: i64, target: i64) -> (i64, i64) {
    let factor = target as f64 / width as f64;
    (target, scale_dimension(height, factor))
}

/// Scale an element to `target` height, deriving the width from its aspect ratio
pub fn scale_to_height<E: PositionedElement + ?Sized>(element: &mut E, target: i64) -> Result<()> {
    require_positive("target height", target)?;
    let width = element.width()?;
    let height = element.height()?;
    require_positive("element height", height)?;

    let (width, height) = fit_height(width, height, target);
    trace!(element = %element.id(), width, height, "scaled to height");
    element.set_height(height);
    element.set_width(width);
    Ok(())
}

/// Scale an element to `target` width, deriving the height from its aspect ratio
pub fn scale_to_width<E: PositionedElement + ?Sized>(element: &mut E, target: i64) -> Result<()> {
    require_positive("target width", target)?;
    let width = element.width()?;
    let height = element.height()?;
    require_positive("element width", width)?;

    let (width, height) = fit_width(width, height, target);
    trace!(element = %element.id(), width, height, "scaled to width");
    element.set_width(width);
    element.set_height(height);
    Ok(())
}

/// Multiply both extents by `factor`
pub fn scale_by<E: PositionedElement + ?Sized>(element: &mut E, factor: f64) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(LayoutError::InvalidArgument(format!(
            "scale factor must be a positive finite number, got {}",
            factor
        )));
    }
    let width = element.width()?;
    let height = element.height()?;
    element.set_width(scale_dimension(width, factor));
    element.set_height(scale_dimension(height, factor));
    Ok(())
}

/// Offset for one edge when `kept` of the source stays visible, split evenly
/// between two opposite edges
fn symmetric_offset(kept: f64) -> i32 {
    (((1.0 - kept) / 2.0) * CROP_FULL as f64).round() as i32
}

/// Compute the crop that turns a `width` x `height` region into the ratio
/// `target_w:target_h`, cropping only inward.
///
/// Returns `None` when the region already has the requested ratio, otherwise
/// the source rectangle and the visible `(width, height)` after cropping.
pub fn aspect_crop(
    width: i64,
    height: i64,
    target_w: u32,
    target_h: u32,
) -> Option<(SourceRect, i64, i64)> {
    if (width as i128) * (target_h as i128) == (height as i128) * (target_w as i128) {
        return None;
    }

    let required_ratio = target_w as f64 / target_h as f64;
    let width_factor = required_ratio * height as f64 / width as f64;
    if width_factor < 1.0 {
        let offset = symmetric_offset(width_factor);
        let rect = SourceRect {
            left: offset,
            right: offset,
            ..SourceRect::none()
        };
        let visible = (width as f64 * width_factor).round() as i64;
        Some((rect, visible.max(1), height))
    } else {
        let height_factor = width as f64 / required_ratio / height as f64;
        let offset = symmetric_offset(height_factor);
        let rect = SourceRect {
            top: offset,
            bottom: offset,
            ..SourceRect::none()
        };
        let visible = (height as f64 * height_factor).round() as i64;
        Some((rect, width, visible.max(1)))
    }
}

/// Crop an element symmetrically so its visible region has the ratio
/// `target_w:target_h`.
///
/// Crops left/right when the element is too wide and top/bottom when it is too
/// tall. The frame shrinks around the visible region and stays centred where
/// it was. Returns the source rectangle that was applied, or `None` when the
/// element already had the requested ratio.
pub fn crop_to_aspect_ratio<E: Croppable + ?Sized>(
    element: &mut E,
    target_w: u32,
    target_h: u32,
) -> Result<Option<SourceRect>> {
    if target_w == 0 || target_h == 0 {
        return Err(LayoutError::InvalidArgument(format!(
            "aspect ratio terms must be positive, got {}:{}",
            target_w, target_h
        )));
    }
    let bounds = element.bounds()?;
    require_positive("element width", bounds.width)?;
    require_positive("element height", bounds.height)?;

    let Some((rect, width, height)) = aspect_crop(bounds.width, bounds.height, target_w, target_h)
    else {
        return Ok(None);
    };
    rect.validate()?;

    trace!(element = %element.id(), ?rect, width, height, "cropped to aspect ratio");
    element.set_source_rect(rect);
    element.set_left(bounds.left + (bounds.width - width) / 2);
    element.set_top(bounds.top + (bounds.height - height) / 2);
    element.set_width(width);
    element.set_height(height);
    Ok(Some(rect))
}

/// Crop to a 1:1 visible region
pub fn crop_to_square<E: Croppable + ?Sized>(element: &mut E) -> Result<Option<SourceRect>> {
    crop_to_aspect_ratio(element, 1, 1)
}

/// Set explicit left/right crop offsets (thousandths of a percent)
pub fn crop_horizontally<E: Croppable + ?Sized>(element: &mut E, left: i32, right: i32) -> Result<()> {
    let rect = SourceRect::horizontal(left, right)?;
    element.set_source_rect(rect);
    Ok(())
}

/// Set explicit top/bottom crop offsets (thousandths of a percent)
pub fn crop_vertically<E: Croppable + ?Sized>(element: &mut E, top: i32, bottom: i32) -> Result<()> {
    let rect = SourceRect::vertical(top, bottom)?;
    element.set_source_rect(rect);
    Ok(())
}
