//! Grid Partitioning and Scaling
//!
//! This module lays out a collection of elements as a row-major grid inside an
//! anchor region:
//! - Partitioning the collection into rows of up to `cols` elements
//! - Computing a uniform cell size from the anchor bounds, padding and gutters
//! - Shrinking oversized elements to the cell size, preserving aspect ratio
//! - Shrinking a gutter to its minimum when the elements stacked end to end,
//!   with gutters and padding, would overflow the anchor
//! - Placing each element at the top-left corner of its cell
//!
//! The full plan is computed before any element is written.

use crate::geometry::{apply_all, read_all, Gutter, Padding};
use crate::scale::{fit_height, fit_width};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use slide_model::{inches, Bounds, PositionedElement};
use tracing::{debug, trace, warn};

/// Grid dimensions and spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
    /// Padding between the anchor edges and the grid
    pub padding: Padding,
    /// Spacing between adjacent cells
    pub gutter: Gutter,
    /// Gutter used when the nominal layout would overflow the anchor
    pub min_gutter: i64,
}

impl GridSpec {
    /// A grid with 0.1in padding, gutters and minimum gutter
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            padding: Padding::uniform(inches(0.1)),
            gutter: Gutter::default(),
            min_gutter: inches(0.1),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gutter(mut self, gutter: Gutter) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn with_min_gutter(mut self, min_gutter: i64) -> Self {
        self.min_gutter = min_gutter;
        self
    }

    /// Number of cells
    pub fn capacity(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    fn validate(&self, count: usize) -> Result<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "grid dimensions must be positive, got {}x{}",
                self.cols, self.rows
            )));
        }
        if count > self.capacity() {
            return Err(LayoutError::CapacityExceeded {
                count,
                capacity: self.capacity(),
            });
        }
        if !self.padding.is_non_negative() {
            return Err(LayoutError::InvalidArgument(
                "grid padding must not be negative".to_string(),
            ));
        }
        if self.gutter.horizontal < 0 || self.gutter.vertical < 0 || self.min_gutter < 0 {
            return Err(LayoutError::InvalidArgument(
                "grid gutters must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Placement of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Index into the input collection
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Final element bounds
    pub bounds: Bounds,
}

/// Result of a grid layout pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Anchor bounds minus padding
    pub area: Bounds,
    /// Maximum element width per cell
    pub cell_width: i64,
    /// Maximum element height per cell
    pub cell_height: i64,
    /// Gutters actually used for placement
    pub gutter: Gutter,
    pub cells: Vec<GridCell>,
}

/// Split `items` into `rows` row-major rows of up to `cols` items each.
///
/// Rows past the end of `items` are empty; the last non-empty row may be short.
pub fn partition<T>(items: &[T], cols: usize, rows: usize) -> Result<Vec<&[T]>> {
    if cols == 0 || rows == 0 {
        return Err(LayoutError::InvalidArgument(format!(
            "grid dimensions must be positive, got {}x{}",
            cols, rows
        )));
    }
    let capacity = cols.saturating_mul(rows);
    if items.len() > capacity {
        return Err(LayoutError::CapacityExceeded {
            count: items.len(),
            capacity,
        });
    }
    let mut grid: Vec<&[T]> = items.chunks(cols).collect();
    grid.resize(rows, &[]);
    Ok(grid)
}

/// Largest element extent per cell when `count` cells and `count - 1` gutters
/// share `available`
fn cell_extent(available: i64, gutter: i64, count: usize) -> i64 {
    let count = count as i64;
    available.saturating_sub(gutter.saturating_mul(count - 1)) / count
}

/// Stacked extent of every element laid end to end along one axis, with a
/// gutter between neighbours and the padding of both ends
fn nominal_span(extents: impl Iterator<Item = i64>, gutter: i64, gaps: i64, padding: i64) -> i64 {
    extents
        .fold(0i64, i64::saturating_add)
        .saturating_add(gutter.saturating_mul(gaps))
        .saturating_add(padding)
}

/// `gutter`, shrunk to `min_gutter` when `span` exceeds `limit`
fn corrected_gutter(span: i64, limit: i64, gutter: i64, min_gutter: i64) -> i64 {
    if span > limit {
        gutter.min(min_gutter)
    } else {
        gutter
    }
}

/// Lay out `elements` as a grid inside `anchor`.
///
/// Elements taller or wider than a cell are scaled down with their aspect ratio
/// preserved; smaller elements keep their size. Fails with
/// [`LayoutError::CapacityExceeded`] when there are more elements than cells.
pub fn layout_grid<E, A>(elements: &mut [E], anchor: &A, spec: &GridSpec) -> Result<GridLayout>
where
    E: PositionedElement,
    A: PositionedElement + ?Sized,
{
    spec.validate(elements.len())?;

    let anchor_bounds = anchor.bounds()?;
    let area = spec.padding.inset(anchor_bounds);
    let cell_width = cell_extent(area.width, spec.gutter.horizontal, spec.cols);
    let cell_height = cell_extent(area.height, spec.gutter.vertical, spec.rows);
    if cell_width <= 0 || cell_height <= 0 {
        return Err(LayoutError::InvalidArgument(format!(
            "padding and gutters leave no room for {}x{} cells in {}x{}",
            spec.cols, spec.rows, anchor_bounds.width, anchor_bounds.height
        )));
    }
    debug!(
        count = elements.len(),
        cols = spec.cols,
        rows = spec.rows,
        cell_width,
        cell_height,
        "grid layout"
    );

    let mut plan = read_all(elements)?;
    for bounds in plan.iter_mut() {
        if bounds.width <= 0 || bounds.height <= 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "cannot scale a zero-size element ({}x{})",
                bounds.width, bounds.height
            )));
        }
        if bounds.height > cell_height {
            (bounds.width, bounds.height) = fit_height(bounds.width, bounds.height, cell_height);
        }
        if bounds.width > cell_width {
            (bounds.width, bounds.height) = fit_width(bounds.width, bounds.height, cell_width);
        }
    }

    let count = plan.len() as i64;
    let gaps = (count - 1).max(0);
    let vertical_span = nominal_span(
        plan.iter().map(|b| b.height),
        spec.gutter.vertical,
        gaps,
        spec.padding.top + spec.padding.bottom,
    );
    let horizontal_span = nominal_span(
        plan.iter().map(|b| b.width),
        spec.gutter.horizontal,
        gaps,
        spec.padding.left + spec.padding.right,
    );

    let gutter = Gutter::new(
        corrected_gutter(
            horizontal_span,
            anchor_bounds.width,
            spec.gutter.horizontal,
            spec.min_gutter,
        ),
        corrected_gutter(
            vertical_span,
            anchor_bounds.height,
            spec.gutter.vertical,
            spec.min_gutter,
        ),
    );
    if gutter != spec.gutter {
        warn!(
            horizontal_span,
            vertical_span,
            horizontal = gutter.horizontal,
            vertical = gutter.vertical,
            "grid overflows anchor, gutter reduced"
        );
    }

    let indices: Vec<usize> = (0..plan.len()).collect();
    let mut cells = Vec::with_capacity(plan.len());
    for (row, members) in partition(&indices, spec.cols, spec.rows)?.into_iter().enumerate() {
        let top = area.top + row as i64 * (gutter.vertical + cell_height);
        for (col, &index) in members.iter().enumerate() {
            let bounds = &mut plan[index];
            bounds.left = area.left + col as i64 * (gutter.horizontal + cell_width);
            bounds.top = top;
            trace!(index, row, col, ?bounds, "grid cell");
            cells.push(GridCell {
                index,
                row,
                col,
                bounds: *bounds,
            });
        }
    }

    apply_all(elements, &plan);
    Ok(GridLayout {
        area,
        cell_width,
        cell_height,
        gutter,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_model::{Picture, Shape};

    fn squares(count: usize, size: i64) -> Vec<Picture> {
        (0..count)
            .map(|i| Picture::with_bounds(format!("P{}", i), Bounds::new(0, 0, size, size)))
            .collect()
    }

    #[test]
    fn test_partition_row_major() {
        let items = [1, 2, 3, 4, 5];
        let grid = partition(&items, 2, 3).unwrap();
        assert_eq!(grid, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    fn test_partition_pads_empty_rows() {
        let items = [1, 2];
        let grid = partition(&items, 3, 3).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], &[1, 2][..]);
        assert!(grid[1].is_empty() && grid[2].is_empty());
    }

    #[test]
    fn test_partition_rejects_bad_dimensions() {
        assert!(matches!(
            partition(&[1], 0, 1),
            Err(LayoutError::InvalidArgument(_))
        ));
        assert!(matches!(
            partition(&[1, 2, 3], 1, 2),
            Err(LayoutError::CapacityExceeded { count: 3, capacity: 2 })
        ));
    }

    #[test]
    fn test_single_row_scenario() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 400, 100));
        let mut pictures = squares(4, 100);
        let spec = GridSpec::new(4, 1)
            .with_padding(Padding::uniform(0))
            .with_gutter(Gutter::uniform(10));

        let layout = layout_grid(&mut pictures, &anchor, &spec).unwrap();
        assert_eq!(layout.cell_width, 92);
        assert_eq!(layout.cell_height, 100);
        assert_eq!(layout.gutter, Gutter::uniform(10));

        let lefts: Vec<i64> = pictures.iter().map(|p| p.left().unwrap()).collect();
        assert_eq!(lefts, vec![0, 102, 204, 306]);
        for picture in &pictures {
            assert_eq!(picture.top().unwrap(), 0);
            assert_eq!(picture.width().unwrap(), 92);
            assert_eq!(picture.height().unwrap(), 92);
        }
    }

    #[test]
    fn test_two_by_two_with_padding() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(1_000, 2_000, 1_000, 600));
        let mut pictures = squares(3, 1_000);
        let spec = GridSpec::new(2, 2)
            .with_padding(Padding::new(50, 50, 100, 100))
            .with_gutter(Gutter::new(20, 10));

        let layout = layout_grid(&mut pictures, &anchor, &spec).unwrap();
        // width (800 - 20) / 2 = 390, height (500 - 10) / 2 = 245
        assert_eq!(layout.area, Bounds::new(1_100, 2_050, 800, 500));
        assert_eq!(layout.cell_width, 390);
        assert_eq!(layout.cell_height, 245);

        let positions: Vec<(i64, i64)> = pictures
            .iter()
            .map(|p| (p.left().unwrap(), p.top().unwrap()))
            .collect();
        assert_eq!(positions, vec![(1_100, 2_050), (1_510, 2_050), (1_100, 2_305)]);
        for picture in &pictures {
            assert_eq!(picture.width().unwrap(), 245);
            assert_eq!(picture.height().unwrap(), 245);
        }
        assert_eq!(layout.cells[2].row, 1);
        assert_eq!(layout.cells[2].col, 0);
    }

    #[test]
    fn test_small_elements_are_not_grown() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 1_000, 1_000));
        let mut shapes = vec![Shape::with_bounds("S", Bounds::new(0, 0, 30, 20))];
        let spec = GridSpec::new(1, 1)
            .with_padding(Padding::uniform(0))
            .with_gutter(Gutter::uniform(0));
        layout_grid(&mut shapes, &anchor, &spec).unwrap();
        assert_eq!(shapes[0].bounds().unwrap(), Bounds::new(0, 0, 30, 20));
    }

    #[test]
    fn test_capacity_exceeded_mutates_nothing() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 400, 100));
        let mut pictures = squares(5, 100);
        let result = layout_grid(&mut pictures, &anchor, &GridSpec::new(2, 2));
        assert!(matches!(
            result,
            Err(LayoutError::CapacityExceeded { count: 5, capacity: 4 })
        ));
        assert_eq!(pictures[0].width().unwrap(), 100);
    }

    #[test]
    fn test_collapsed_area_is_rejected() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 100, 100));
        let mut pictures = squares(2, 10);
        let spec = GridSpec::new(2, 1).with_padding(Padding::uniform(60));
        assert!(matches!(
            layout_grid(&mut pictures, &anchor, &spec),
            Err(LayoutError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_size_element_is_rejected() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 100, 100));
        let mut shapes = vec![Shape::with_bounds("Flat", Bounds::new(0, 0, 10, 0))];
        let spec = GridSpec::new(1, 1).with_padding(Padding::uniform(0));
        assert!(layout_grid(&mut shapes, &anchor, &spec).is_err());
    }

    #[test]
    fn test_overflowing_grid_falls_back_to_min_gutter() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 2_000, 2_000));
        let mut pictures = squares(4, 900);
        let spec = GridSpec::new(2, 2)
            .with_padding(Padding::uniform(0))
            .with_gutter(Gutter::uniform(200))
            .with_min_gutter(50);

        // stacked: 4 * 900 + 3 * 200 = 4200 > 2000 on both axes
        let layout = layout_grid(&mut pictures, &anchor, &spec).unwrap();
        assert_eq!(layout.cell_width, 900);
        assert_eq!(layout.gutter, Gutter::uniform(50));

        let positions: Vec<(i64, i64)> = pictures
            .iter()
            .map(|p| (p.left().unwrap(), p.top().unwrap()))
            .collect();
        assert_eq!(positions, vec![(0, 0), (950, 0), (0, 950), (950, 950)]);
    }

    #[test]
    fn test_fitting_grid_keeps_gutter() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 2_000, 2_000));
        let mut pictures = squares(2, 300);
        let spec = GridSpec::new(2, 2)
            .with_padding(Padding::uniform(0))
            .with_gutter(Gutter::uniform(200))
            .with_min_gutter(50);

        let layout = layout_grid(&mut pictures, &anchor, &spec).unwrap();
        assert_eq!(layout.gutter, Gutter::uniform(200));
        assert_eq!(pictures[1].left().unwrap(), 1_100);
    }

    #[test]
    fn test_missing_transform_mutates_nothing() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 1_000, 1_000));
        let mut pictures = squares(2, 800);
        pictures.insert(1, Picture::new("Unplaced"));
        let spec = GridSpec::new(3, 1)
            .with_padding(Padding::uniform(0))
            .with_gutter(Gutter::uniform(0));

        assert!(matches!(
            layout_grid(&mut pictures, &anchor, &spec),
            Err(LayoutError::Element(_))
        ));
        assert_eq!(pictures[0].bounds().unwrap(), Bounds::new(0, 0, 800, 800));
        assert_eq!(pictures[2].bounds().unwrap(), Bounds::new(0, 0, 800, 800));
    }

    #[test]
    fn test_huge_gutter_is_rejected_without_overflow() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 1_000, 1_000));
        let mut pictures = squares(1, 10);
        let spec = GridSpec::new(4, 4).with_gutter(Gutter::uniform(i64::MAX / 2));
        assert!(matches!(
            layout_grid(&mut pictures, &anchor, &spec),
            Err(LayoutError::InvalidArgument(_))
        ));
        assert_eq!(cell_extent(1_000, i64::MAX, 4), (1_000 - i64::MAX) / 4);
    }

    #[test]
    fn test_gutter_correction() {
        assert_eq!(corrected_gutter(120, 100, 50, 10), 10);
        assert_eq!(corrected_gutter(120, 100, 5, 10), 5);
        assert_eq!(corrected_gutter(100, 100, 50, 10), 50);
    }

    #[test]
    fn test_empty_collection_is_allowed() {
        let anchor = Shape::with_bounds("Anchor", Bounds::new(0, 0, 100, 100));
        let mut pictures: Vec<Picture> = Vec::new();
        let spec = GridSpec::new(2, 2)
            .with_padding(Padding::uniform(0))
            .with_gutter(Gutter::uniform(0));
        let layout = layout_grid(&mut pictures, &anchor, &spec).unwrap();
        assert!(layout.cells.is_empty());
        assert_eq!(layout.cell_width, 50);
    }
}
