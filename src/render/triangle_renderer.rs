// src/render/triangle_renderer.rs
// Per-frame drawing of the triangle for a given animation state

use nannou::prelude::*;

use super::{Canvas, ConstructionStyle, DrawStyle};
use crate::animation::AnimationState;
use crate::models::{lerp, Triangle};

pub struct TriangleRenderer {
    style: DrawStyle,
    construction: Option<ConstructionStyle>,
}

impl TriangleRenderer {
    pub fn new(style: DrawStyle) -> Self {
        Self {
            style,
            construction: None,
        }
    }

    pub fn with_construction(mut self, construction: ConstructionStyle) -> Self {
        self.construction = Some(construction);
        self
    }

    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C, triangle: &Triangle, state: &AnimationState) {
        let style = &self.style;
        canvas.clear(style.background);

        for vertex in triangle.vertices {
            canvas.point(vertex, style.vertex_size, style.vertex_color);
        }

        match state.phase.animating_side() {
            Some(active) => self.draw_sides_in_progress(canvas, triangle, active, state.progress),
            None => self.draw_finished(canvas, triangle),
        }
    }

    fn draw_sides_in_progress<C: Canvas>(
        &self,
        canvas: &mut C,
        triangle: &Triangle,
        active: usize,
        progress: f32,
    ) {
        let style = &self.style;
        let sides = triangle.sides();

        for &(start, end) in &sides[..active] {
            canvas.line(start, end, style.line_color, style.stroke_weight);
        }

        let (start, end) = sides[active];
        let tip = lerp(start, end, progress.min(1.0));
        canvas.line(start, tip, style.line_color, style.stroke_weight);
    }

    fn draw_finished<C: Canvas>(&self, canvas: &mut C, triangle: &Triangle) {
        let style = &self.style;
        canvas.closed_polyline(&triangle.vertices, style.line_color, style.stroke_weight);

        if let Some(construction) = &self.construction {
            self.draw_construction(canvas, triangle, construction);
        }

        for midpoint in triangle.midpoints() {
            canvas.point(midpoint, style.midpoint_size, style.midpoint_color);
        }
    }

    // Perpendicular bisectors meeting at the circumcenter, plus the circumcircle
    fn draw_construction<C: Canvas>(
        &self,
        canvas: &mut C,
        triangle: &Triangle,
        construction: &ConstructionStyle,
    ) {
        let weight = self.style.stroke_weight;
        for (start, end) in triangle.perpendicular_bisectors(construction.bisector_extent) {
            canvas.line(start, end, construction.bisector_color, weight);
        }

        let (Some(center), Some(radius)) = (triangle.circumcenter(), triangle.circumradius())
        else {
            return;
        };
        canvas.point(center, self.style.midpoint_size, construction.circumcircle_color);
        canvas.circle(center, radius, construction.circumcircle_color, weight);
    }
}
