pub mod geometry;

pub use geometry::{lerp, line_intersection, midpoint, perpendicular_bisector, Triangle};
