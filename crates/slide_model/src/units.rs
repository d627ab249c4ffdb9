//! Linear units used by slide geometry
//!
//! All positions and extents are stored as English Metric Units (EMU), the
//! integral unit used by DrawingML: 914,400 per inch, 12,700 per point.

use serde::{Deserialize, Serialize};

/// EMUs in one inch
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs in one typographic point (1/72 inch)
pub const EMU_PER_POINT: i64 = 12_700;

/// EMUs in one centimetre
pub const EMU_PER_CM: i64 = 360_000;

/// Convert inches to EMU, truncating toward zero
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64) as i64
}

/// Convert points to EMU, truncating toward zero
pub fn points(value: f64) -> i64 {
    (value * EMU_PER_POINT as f64) as i64
}

/// Convert centimetres to EMU, truncating toward zero
pub fn centimeters(value: f64) -> i64 {
    (value * EMU_PER_CM as f64) as i64
}

/// Convert EMU to inches
pub fn to_inches(emu: i64) -> f64 {
    emu as f64 / EMU_PER_INCH as f64
}

/// Convert EMU to points
pub fn to_points(emu: i64) -> f64 {
    emu as f64 / EMU_PER_POINT as f64
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left-to-right; positions are horizontal offsets, extents are widths
    Horizontal,
    /// Top-to-bottom; positions are vertical offsets, extents are heights
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversions() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(0.2), 182_880);
        assert_eq!(inches(0.1), 91_440);
        assert_eq!(points(72.0), EMU_PER_INCH);
        assert_eq!(centimeters(2.54), 914_400);
        assert!((to_inches(457_200) - 0.5).abs() < f64::EPSILON);
        assert!((to_points(12_700) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
