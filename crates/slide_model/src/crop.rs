//! Picture source rectangle
//!
//! Crop offsets are stored the way DrawingML stores `a:srcRect`: each edge is
//! an inward offset in thousandths of a percent of the source image, so
//! 1,000 is 1% and 100,000 is the whole image.

use crate::{Result, SlideModelError};
use serde::{Deserialize, Serialize};

/// Offset units per percent
pub const CROP_UNITS_PER_PERCENT: i32 = 1_000;

/// Offset value covering the full image
pub const CROP_FULL: i32 = 100 * CROP_UNITS_PER_PERCENT;

/// Inward crop offsets per edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl SourceRect {
    /// No cropping
    pub const fn none() -> Self {
        Self {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        }
    }

    /// Left/right crop
    pub fn horizontal(left: i32, right: i32) -> Result<Self> {
        let rect = Self {
            left,
            right,
            ..Self::none()
        };
        rect.validate()?;
        Ok(rect)
    }

    /// Top/bottom crop
    pub fn vertical(top: i32, bottom: i32) -> Result<Self> {
        let rect = Self {
            top,
            bottom,
            ..Self::none()
        };
        rect.validate()?;
        Ok(rect)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }

    /// Check every offset is within 0..=100% and opposite edges leave something visible
    pub fn validate(&self) -> Result<()> {
        for (edge, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !(0..=CROP_FULL).contains(&value) {
                return Err(SlideModelError::InvalidCrop(format!(
                    "{} offset {} out of range 0..={}",
                    edge, value, CROP_FULL
                )));
            }
        }
        if self.left + self.right >= CROP_FULL {
            return Err(SlideModelError::InvalidCrop(
                "left and right offsets leave no visible width".to_string(),
            ));
        }
        if self.top + self.bottom >= CROP_FULL {
            return Err(SlideModelError::InvalidCrop(
                "top and bottom offsets leave no visible height".to_string(),
            ));
        }
        Ok(())
    }

    /// Fraction of the source width that stays visible
    pub fn visible_width_fraction(&self) -> f64 {
        1.0 - (self.left + self.right) as f64 / CROP_FULL as f64
    }

    /// Fraction of the source height that stays visible
    pub fn visible_height_fraction(&self) -> f64 {
        1.0 - (self.top + self.bottom) as f64 / CROP_FULL as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_crop() {
        let rect = SourceRect::horizontal(25_000, 25_000).unwrap();
        assert_eq!(rect.top, 0);
        assert!((rect.visible_width_fraction() - 0.5).abs() < 1e-9);
        assert!((rect.visible_height_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_crops() {
        assert!(SourceRect::horizontal(-1, 0).is_err());
        assert!(SourceRect::vertical(0, 100_001).is_err());
        assert!(SourceRect::horizontal(50_000, 50_000).is_err());
        assert!(SourceRect::none().validate().is_ok());
        assert!(SourceRect::none().is_empty());
    }
}
