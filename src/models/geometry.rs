// src/models/geometry.rs
// Triangle geometry in sketch coordinates (origin top-left, y down)

use nannou::prelude::*;

/// Below this the two lines of an intersection are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Linear blend `a + (b - a) * t`. `t` is not clamped.
pub fn lerp(a: Point2, b: Point2, t: f32) -> Point2 {
    a + (b - a) * t
}

pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    (a + b) * 0.5
}

/// Intersection of the infinite lines through `p1`-`p2` and `p3`-`p4`.
/// Returns `None` when the lines are parallel (or a line has zero length).
pub fn line_intersection(p1: Point2, p2: Point2, p3: Point2, p4: Point2) -> Option<Point2> {
    let v1 = p2 - p1;
    let v2 = p4 - p3;

    // Solve p1 + t * v1 = p3 + s * v2 for t (Cramer's rule)
    let det = v2.x * v1.y - v1.x * v2.y;
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let d = p3 - p1;
    let t = (v2.x * d.y - d.x * v2.y) / det;
    Some(p1 + v1 * t)
}

/// Segment through the midpoint of `a`-`b`, perpendicular to it, reaching
/// `extent` side-lengths to either side of the midpoint.
pub fn perpendicular_bisector(a: Point2, b: Point2, extent: f32) -> (Point2, Point2) {
    let m = midpoint(a, b);
    let side = b - a;
    let perp = vec2(-side.y, side.x) * extent;
    (m - perp, m + perp)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2; 3],
}

impl Triangle {
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Top, bottom-left and bottom-right vertices for a `width` x `height` canvas.
    pub fn from_canvas(width: f32, height: f32) -> Self {
        Self::new(
            pt2(width / 2.0, height / 4.0),
            pt2(width / 4.0, height * 3.0 / 4.0),
            pt2(width * 3.0 / 4.0, height * 3.0 / 4.0),
        )
    }

    /// Sides in drawing order: v1-v2, v2-v3, v3-v1.
    pub fn sides(&self) -> [(Point2, Point2); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    pub fn side(&self, index: usize) -> (Point2, Point2) {
        self.sides()[index % 3]
    }

    pub fn midpoints(&self) -> [Point2; 3] {
        self.sides().map(|(start, end)| midpoint(start, end))
    }

    pub fn perpendicular_bisectors(&self, extent: f32) -> [(Point2, Point2); 3] {
        self.sides()
            .map(|(start, end)| perpendicular_bisector(start, end, extent))
    }

    /// Meeting point of the perpendicular bisectors. `None` for a degenerate triangle.
    pub fn circumcenter(&self) -> Option<Point2> {
        let [(a1, a2), (b1, b2), _] = self.perpendicular_bisectors(1.0);
        line_intersection(a1, a2, b1, b2)
    }

    pub fn circumradius(&self) -> Option<f32> {
        self.circumcenter()
            .map(|center| center.distance(self.vertices[0]))
    }
}
