//! Layout engine facade
//!
//! Applies the configured default distances to the free-standing layout
//! operations so that slide-building code only supplies what varies per call.

use crate::align::{align_to_first, Alignment};
use crate::distribute::{distribute_along_axis, distribute_in_anchor};
use crate::grid::{layout_grid, GridLayout, GridSpec};
use crate::scale::{crop_to_aspect_ratio, scale_to_height, scale_to_width};
use crate::{LayoutConfig, Result};
use slide_model::{Axis, Croppable, PositionedElement, SourceRect};
use tracing::debug_span;

/// Layout engine with configured defaults
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the given configuration
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Grid spec for `cols` x `rows` using the configured padding and gutters
    pub fn grid_spec(&self, cols: usize, rows: usize) -> GridSpec {
        GridSpec::new(cols, rows)
            .with_padding(self.config.grid_padding)
            .with_gutter(self.config.grid_gutter)
            .with_min_gutter(self.config.min_gutter)
    }

    /// Distribute along `axis` with the configured minimum gap
    pub fn distribute<E: PositionedElement>(&self, elements: &mut [E], axis: Axis) -> Result<()> {
        let _span = debug_span!("distribute", %axis).entered();
        distribute_along_axis(elements, axis, Some(self.config.min_gap))
    }

    /// Distribute along `axis` by plain equal division, without a minimum gap
    pub fn distribute_evenly<E: PositionedElement>(&self, elements: &mut [E], axis: Axis) -> Result<()> {
        let _span = debug_span!("distribute_evenly", %axis).entered();
        distribute_along_axis(elements, axis, None)
    }

    /// Distribute inside `anchor` with the configured padding and minimum gap
    pub fn distribute_in_anchor<E, A>(&self, elements: &mut [E], anchor: &A, axis: Axis) -> Result<()>
    where
        E: PositionedElement,
        A: PositionedElement + ?Sized,
    {
        let _span = debug_span!("distribute_in_anchor", %axis, anchor = %anchor.id()).entered();
        distribute_in_anchor(
            elements,
            anchor,
            axis,
            self.config.anchor_padding,
            Some(self.config.min_gap),
        )
    }

    /// Lay out a `cols` x `rows` grid inside `anchor` with configured spacing
    pub fn layout_grid<E, A>(
        &self,
        elements: &mut [E],
        anchor: &A,
        cols: usize,
        rows: usize,
    ) -> Result<GridLayout>
    where
        E: PositionedElement,
        A: PositionedElement + ?Sized,
    {
        let _span = debug_span!("layout_grid", cols, rows, anchor = %anchor.id()).entered();
        layout_grid(elements, anchor, &self.grid_spec(cols, rows))
    }

    pub fn align<E: PositionedElement>(&self, elements: &mut [E], alignment: Alignment) -> Result<()> {
        let _span = debug_span!("align", ?alignment).entered();
        align_to_first(elements, alignment)
    }

    pub fn scale_to_height<E: PositionedElement + ?Sized>(&self, element: &mut E, height: i64) -> Result<()> {
        scale_to_height(element, height)
    }

    pub fn scale_to_width<E: PositionedElement + ?Sized>(&self, element: &mut E, width: i64) -> Result<()> {
        scale_to_width(element, width)
    }

    pub fn crop_to_aspect_ratio<E: Croppable + ?Sized>(
        &self,
        element: &mut E,
        width: u32,
        height: u32,
    ) -> Result<Option<SourceRect>> {
        let _span = debug_span!("crop_to_aspect_ratio", width, height).entered();
        crop_to_aspect_ratio(element, width, height)
    }
}
