// src/render/mod.rs
// The triangle rendering module
// Drawing goes through the `Canvas` primitives so the renderer can run
// against nannou or against a recording canvas in tests.

pub mod nannou_canvas;
pub mod triangle_renderer;

pub use nannou_canvas::NannouCanvas;
pub use triangle_renderer::TriangleRenderer;

use crate::config::{ConstructionConfig, StyleConfig};
use nannou::prelude::*;

/// The drawing primitives the renderer consumes. Positions are in sketch
/// coordinates: origin at the top-left corner, y pointing down.
pub trait Canvas {
    fn clear(&mut self, color: Rgb<f32>);
    fn point(&mut self, position: Point2, size: f32, color: Rgb<f32>);
    fn line(&mut self, start: Point2, end: Point2, color: Rgb<f32>, weight: f32);
    fn closed_polyline(&mut self, points: &[Point2], color: Rgb<f32>, weight: f32);
    fn circle(&mut self, center: Point2, radius: f32, color: Rgb<f32>, weight: f32);
}

pub fn color_from_rgb8(color: [u8; 3]) -> Rgb<f32> {
    let [r, g, b] = color;
    rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub background: Rgb<f32>,
    pub line_color: Rgb<f32>,
    pub vertex_color: Rgb<f32>,
    pub midpoint_color: Rgb<f32>,
    pub stroke_weight: f32,
    pub vertex_size: f32,
    pub midpoint_size: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}

impl From<&StyleConfig> for DrawStyle {
    fn from(config: &StyleConfig) -> Self {
        Self {
            background: color_from_rgb8(config.background),
            line_color: color_from_rgb8(config.line_color),
            vertex_color: color_from_rgb8(config.vertex_color),
            midpoint_color: color_from_rgb8(config.midpoint_color),
            stroke_weight: config.stroke_weight,
            vertex_size: config.vertex_size,
            midpoint_size: config.midpoint_size,
        }
    }
}

/// Styling for the circumcenter construction drawn over the finished triangle
#[derive(Debug, Clone)]
pub struct ConstructionStyle {
    pub bisector_color: Rgb<f32>,
    pub circumcircle_color: Rgb<f32>,
    pub bisector_extent: f32,
}

impl From<&ConstructionConfig> for ConstructionStyle {
    fn from(config: &ConstructionConfig) -> Self {
        Self {
            bisector_color: color_from_rgb8(config.bisector_color),
            circumcircle_color: color_from_rgb8(config.circumcircle_color),
            bisector_extent: config.bisector_extent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb8() {
        let color = color_from_rgb8([255, 0, 51]);
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert!((color.blue - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_default_style_matches_default_config() {
        let style = DrawStyle::default();
        assert_eq!(style.background, color_from_rgb8([40, 44, 52]));
        assert_eq!(style.line_color, color_from_rgb8([97, 218, 251]));
        assert_eq!(style.stroke_weight, 3.0);
    }
}
