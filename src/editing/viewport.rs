// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Device-to-scene coordinate conversion.
//!
//! Device coordinates are pixels with the origin at the top-left corner and
//! y growing downward. Scene coordinates are normalized to [-1, 1] with the
//! origin at the center and y growing upward.

use crate::error::EditError;
use kurbo::{Point, Size};

/// Convert a device-pixel position to normalized scene coordinates
///
/// `x' = 2x / width - 1`, `y' = 2(height - y) / height - 1`
pub fn to_scene_coords(device_pos: Point, viewport: Size) -> Point {
    Point::new(
        2.0 * device_pos.x / viewport.width - 1.0,
        2.0 * (viewport.height - device_pos.y) / viewport.height - 1.0,
    )
}

/// The current viewport size, mutable on resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    size: Size,
}

impl ViewPort {
    /// Create a viewport; both dimensions must be positive and finite
    pub fn new(width: f64, height: f64) -> Result<Self, EditError> {
        Ok(Self {
            size: Self::checked_size(width, height)?,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Update the size after the window or framebuffer changes
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), EditError> {
        self.size = Self::checked_size(width, height)?;
        Ok(())
    }

    /// Convert a device-pixel position into this viewport's scene space
    pub fn to_scene(&self, device_pos: Point) -> Point {
        to_scene_coords(device_pos, self.size)
    }

    fn checked_size(width: f64, height: f64) -> Result<Size, EditError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Size::new(width, height))
        } else {
            Err(EditError::InvalidViewport { width, height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_is_minus_one_one() {
        let scene = to_scene_coords(Point::new(0.0, 0.0), Size::new(600.0, 600.0));
        assert_eq!(scene, Point::new(-1.0, 1.0));
    }

    #[test]
    fn corners_and_center() {
        let size = Size::new(800.0, 400.0);
        assert_eq!(to_scene_coords(Point::new(400.0, 200.0), size), Point::new(0.0, 0.0));
        assert_eq!(to_scene_coords(Point::new(800.0, 400.0), size), Point::new(1.0, -1.0));
        assert_eq!(to_scene_coords(Point::new(0.0, 400.0), size), Point::new(-1.0, -1.0));
    }

    #[test]
    fn resize_changes_conversion() {
        let mut viewport = ViewPort::new(600.0, 600.0).unwrap();
        assert_eq!(viewport.to_scene(Point::new(300.0, 300.0)), Point::ORIGIN);
        viewport.resize(1200.0, 600.0).unwrap();
        assert_eq!(viewport.to_scene(Point::new(300.0, 300.0)), Point::new(-0.5, 0.0));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(ViewPort::new(0.0, 600.0).is_err());
        assert!(ViewPort::new(600.0, -1.0).is_err());
        assert!(ViewPort::new(f64::NAN, 600.0).is_err());

        let mut viewport = ViewPort::new(600.0, 600.0).unwrap();
        assert_eq!(
            viewport.resize(0.0, 0.0),
            Err(EditError::InvalidViewport {
                width: 0.0,
                height: 0.0
            })
        );
        assert_eq!(viewport.size(), Size::new(600.0, 600.0));
    }
}
