//! Positioned element contract
//!
//! Every slide element the layout engine can move or resize implements
//! [`PositionedElement`]. Reads are fallible because an element may not have
//! had its offset and extents populated yet; writes always succeed and create
//! the transform on first use.

use crate::{Axis, ElementId, Result, SlideModelError};
use serde::{Deserialize, Serialize};

/// Offset and extents of an element, in EMU
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    /// Left edge offset from the slide origin
    pub x: i64,
    /// Top edge offset from the slide origin
    pub y: i64,
    /// Width
    pub cx: i64,
    /// Height
    pub cy: i64,
}

impl Transform {
    pub fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }
}

/// A rectangle in slide coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// Offset along an axis
    pub fn position(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Extent along an axis
    pub fn extent(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Check whether `other` lies entirely inside this rectangle (edges inclusive)
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

impl From<Transform> for Bounds {
    fn from(t: Transform) -> Self {
        Self::new(t.x, t.y, t.cx, t.cy)
    }
}

impl From<Bounds> for Transform {
    fn from(b: Bounds) -> Self {
        Self::new(b.left, b.top, b.width, b.height)
    }
}

/// Shared storage for the lazily created transform of a proxy.
///
/// Reads fail with [`SlideModelError::MissingTransform`] until the first
/// write; each write default-initialises the transform when absent.
pub(crate) fn read_transform(id: ElementId, xfrm: &Option<Transform>) -> Result<Transform> {
    xfrm.ok_or(SlideModelError::MissingTransform { element: id })
}

pub(crate) fn write_transform(xfrm: &mut Option<Transform>) -> &mut Transform {
    xfrm.get_or_insert_with(Transform::default)
}

/// Positional accessor contract shared by shapes, pictures and frames
pub trait PositionedElement {
    /// Identity of the element
    fn id(&self) -> ElementId;

    /// Left edge offset
    fn left(&self) -> Result<i64>;

    /// Top edge offset
    fn top(&self) -> Result<i64>;

    fn width(&self) -> Result<i64>;

    fn height(&self) -> Result<i64>;

    fn set_left(&mut self, value: i64);

    fn set_top(&mut self, value: i64);

    fn set_width(&mut self, value: i64);

    fn set_height(&mut self, value: i64);

    /// Right edge (left + width)
    fn right(&self) -> Result<i64> {
        Ok(self.left()? + self.width()?)
    }

    /// Bottom edge (top + height)
    fn bottom(&self) -> Result<i64> {
        Ok(self.top()? + self.height()?)
    }

    /// Offset along an axis
    fn position(&self, axis: Axis) -> Result<i64> {
        match axis {
            Axis::Horizontal => self.left(),
            Axis::Vertical => self.top(),
        }
    }

    /// Extent along an axis
    fn extent(&self, axis: Axis) -> Result<i64> {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    fn set_position(&mut self, axis: Axis, value: i64) {
        match axis {
            Axis::Horizontal => self.set_left(value),
            Axis::Vertical => self.set_top(value),
        }
    }

    fn set_extent(&mut self, axis: Axis, value: i64) {
        match axis {
            Axis::Horizontal => self.set_width(value),
            Axis::Vertical => self.set_height(value),
        }
    }

    /// Center along an axis, truncated to whole EMU
    fn center(&self, axis: Axis) -> Result<i64> {
        Ok(self.position(axis)? + self.extent(axis)? / 2)
    }

    /// Move the element so that its center along `axis` lands on `center`
    fn set_center(&mut self, axis: Axis, center: i64) -> Result<()> {
        let half = self.extent(axis)? / 2;
        self.set_position(axis, center - half);
        Ok(())
    }

    /// All four fields at once
    fn bounds(&self) -> Result<Bounds> {
        Ok(Bounds::new(
            self.left()?,
            self.top()?,
            self.width()?,
            self.height()?,
        ))
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.set_left(bounds.left);
        self.set_top(bounds.top);
        self.set_width(bounds.width);
        self.set_height(bounds.height);
    }
}

/// Source-rectangle access for elements whose visible region can be cropped
pub trait Croppable: PositionedElement {
    fn source_rect(&self) -> crate::SourceRect;

    fn set_source_rect(&mut self, rect: crate::SourceRect);
}

macro_rules! forward_positioned {
    () => {
        fn id(&self) -> ElementId {
            (**self).id()
        }
        fn left(&self) -> Result<i64> {
            (**self).left()
        }
        fn top(&self) -> Result<i64> {
            (**self).top()
        }
        fn width(&self) -> Result<i64> {
            (**self).width()
        }
        fn height(&self) -> Result<i64> {
            (**self).height()
        }
        fn set_left(&mut self, value: i64) {
            (**self).set_left(value)
        }
        fn set_top(&mut self, value: i64) {
            (**self).set_top(value)
        }
        fn set_width(&mut self, value: i64) {
            (**self).set_width(value)
        }
        fn set_height(&mut self, value: i64) {
            (**self).set_height(value)
        }
    };
}

impl<T: PositionedElement + ?Sized> PositionedElement for &mut T {
    forward_positioned!();
}

impl<T: PositionedElement + ?Sized> PositionedElement for Box<T> {
    forward_positioned!();
}

impl<T: Croppable + ?Sized> Croppable for &mut T {
    fn source_rect(&self) -> crate::SourceRect {
        (**self).source_rect()
    }
    fn set_source_rect(&mut self, rect: crate::SourceRect) {
        (**self).set_source_rect(rect)
    }
}

/// Implements [`PositionedElement`] for a proxy with `id: ElementId` and
/// `transform: Option<Transform>` fields.
macro_rules! impl_positioned_element {
    ($ty:ty) => {
        impl $crate::PositionedElement for $ty {
            fn id(&self) -> $crate::ElementId {
                self.id
            }
            fn left(&self) -> $crate::Result<i64> {
                Ok($crate::element::read_transform(self.id, &self.transform)?.x)
            }
            fn top(&self) -> $crate::Result<i64> {
                Ok($crate::element::read_transform(self.id, &self.transform)?.y)
            }
            fn width(&self) -> $crate::Result<i64> {
                Ok($crate::element::read_transform(self.id, &self.transform)?.cx)
            }
            fn height(&self) -> $crate::Result<i64> {
                Ok($crate::element::read_transform(self.id, &self.transform)?.cy)
            }
            fn set_left(&mut self, value: i64) {
                $crate::element::write_transform(&mut self.transform).x = value;
            }
            fn set_top(&mut self, value: i64) {
                $crate::element::write_transform(&mut self.transform).y = value;
            }
            fn set_width(&mut self, value: i64) {
                $crate::element::write_transform(&mut self.transform).cx = value;
            }
            fn set_height(&mut self, value: i64) {
                $crate::element::write_transform(&mut self.transform).cy = value;
            }
        }
    };
}

pub(crate) use impl_positioned_element;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    #[test]
    fn test_missing_transform_is_reported() {
        let shape = Shape::new("Empty");
        match shape.left() {
            Err(SlideModelError::MissingTransform { element }) => assert_eq!(element, shape.id()),
            other => panic!("expected MissingTransform, got {:?}", other),
        }
        assert!(shape.bounds().is_err());
    }

    #[test]
    fn test_first_write_creates_transform() {
        let mut shape = Shape::new("Box");
        shape.set_width(500);
        assert_eq!(shape.width().unwrap(), 500);
        assert_eq!(shape.left().unwrap(), 0);
        assert_eq!(shape.height().unwrap(), 0);
    }

    #[test]
    fn test_derived_edges_and_centers() {
        let mut shape = Shape::with_bounds("Box", Bounds::new(100, 200, 50, 31));
        assert_eq!(shape.right().unwrap(), 150);
        assert_eq!(shape.bottom().unwrap(), 231);
        assert_eq!(shape.center(Axis::Horizontal).unwrap(), 125);
        assert_eq!(shape.center(Axis::Vertical).unwrap(), 215);

        shape.set_center(Axis::Horizontal, 1_000).unwrap();
        assert_eq!(shape.left().unwrap(), 975);
    }

    #[test]
    fn test_axis_accessors() {
        let mut shape = Shape::with_bounds("Box", Bounds::new(1, 2, 3, 4));
        assert_eq!(shape.position(Axis::Horizontal).unwrap(), 1);
        assert_eq!(shape.position(Axis::Vertical).unwrap(), 2);
        assert_eq!(shape.extent(Axis::Horizontal).unwrap(), 3);
        assert_eq!(shape.extent(Axis::Vertical).unwrap(), 4);

        shape.set_position(Axis::Vertical, 10);
        shape.set_extent(Axis::Horizontal, 30);
        assert_eq!(shape.bounds().unwrap(), Bounds::new(1, 10, 30, 4));
    }

    #[test]
    fn test_mixed_collection_through_trait_objects() {
        let mut a = Shape::with_bounds("A", Bounds::new(0, 0, 10, 10));
        let mut b = crate::Picture::with_bounds("B", Bounds::new(5, 5, 20, 20));
        let mut items: Vec<&mut dyn PositionedElement> = vec![&mut a, &mut b];
        for item in items.iter_mut() {
            item.set_top(42);
        }
        assert_eq!(a.top().unwrap(), 42);
        assert_eq!(b.top().unwrap(), 42);
    }

    #[test]
    fn test_bounds_contains() {
        let outer = Bounds::new(0, 0, 100, 100);
        assert!(outer.contains(&Bounds::new(0, 0, 100, 100)));
        assert!(outer.contains(&Bounds::new(10, 10, 20, 20)));
        assert!(!outer.contains(&Bounds::new(90, 10, 20, 20)));
    }
}
