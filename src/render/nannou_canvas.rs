// src/render/nannou_canvas.rs
// Canvas primitives on top of a nannou Draw

use nannou::prelude::*;

use super::Canvas;

/// Maps sketch coordinates (top-left origin, y down) onto nannou's
/// centred, y-up space for a canvas of the given size.
pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32) -> Self {
        Self {
            draw,
            width,
            height,
        }
    }

    pub fn to_nannou(&self, point: Point2) -> Point2 {
        transform_point(point, self.width, self.height)
    }
}

pub fn transform_point(point: Point2, width: f32, height: f32) -> Point2 {
    pt2(point.x - width / 2.0, height / 2.0 - point.y)
}

impl Canvas for NannouCanvas<'_> {
    fn clear(&mut self, color: Rgb<f32>) {
        self.draw.background().color(color);
    }

    fn point(&mut self, position: Point2, size: f32, color: Rgb<f32>) {
        self.draw
            .ellipse()
            .xy(self.to_nannou(position))
            .w_h(size, size)
            .color(color);
    }

    fn line(&mut self, start: Point2, end: Point2, color: Rgb<f32>, weight: f32) {
        self.draw
            .line()
            .start(self.to_nannou(start))
            .end(self.to_nannou(end))
            .stroke_weight(weight)
            .color(color)
            .caps_round();
    }

    fn closed_polyline(&mut self, points: &[Point2], color: Rgb<f32>, weight: f32) {
        let points: Vec<Point2> = points.iter().map(|p| self.to_nannou(*p)).collect();
        self.draw
            .polyline()
            .weight(weight)
            .join_round()
            .points_closed(points)
            .color(color);
    }

    fn circle(&mut self, center: Point2, radius: f32, color: Rgb<f32>, weight: f32) {
        self.draw
            .ellipse()
            .xy(self.to_nannou(center))
            .radius(radius)
            .no_fill()
            .stroke(color)
            .stroke_weight(weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_transform() {
        // Top-left corner of a 600x400 sketch
        let p = transform_point(pt2(0.0, 0.0), 600.0, 400.0);
        assert_eq!(p, pt2(-300.0, 200.0));

        // Centre stays at the origin
        let p = transform_point(pt2(300.0, 200.0), 600.0, 400.0);
        assert_eq!(p, pt2(0.0, 0.0));

        // Bottom-right corner
        let p = transform_point(pt2(600.0, 400.0), 600.0, 400.0);
        assert_eq!(p, pt2(300.0, -200.0));
    }

    #[test]
    fn test_top_vertex_is_above_centre() {
        let p = transform_point(pt2(300.0, 100.0), 600.0, 400.0);
        assert_eq!(p, pt2(0.0, 100.0));
    }
}
