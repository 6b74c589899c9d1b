// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Three-component positions in normalized scene coordinates.
//!
//! Scene space spans [-1, 1] on both axes with the origin at the center of
//! the viewport and y pointing up. The z component is carried through so the
//! renderer receives full vec3 vertices, but editing only ever touches x and
//! y, and conventionally z is 0.

use kurbo::Point;

/// A position in normalized scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePoint {
    pub const ZERO: ScenePoint = ScenePoint::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the z = 0 plane
    pub fn on_plane(pos: Point) -> Self {
        Self::new(pos.x, pos.y, 0.0)
    }

    /// Projection onto the xy plane, used for hit testing
    pub fn xy(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Replace x and y, keeping z
    pub fn with_xy(self, pos: Point) -> Self {
        Self::new(pos.x, pos.y, self.z)
    }

    /// Weighted copy, used when blending control points
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Single-precision vertex for the render buffer
    pub fn to_vertex(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl std::ops::Add for ScenePoint {
    type Output = ScenePoint;

    fn add(self, rhs: ScenePoint) -> ScenePoint {
        ScenePoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for ScenePoint {
    fn add_assign(&mut self, rhs: ScenePoint) {
        *self = *self + rhs;
    }
}

impl From<[f64; 3]> for ScenePoint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
