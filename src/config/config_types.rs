// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::animation::DEFAULT_STEP;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            title: String::from("trisketch"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Animated,
    Static,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub step: f32, // Fraction of a side drawn per frame
    pub mode: AnimationMode,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            mode: AnimationMode::Animated,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub background: [u8; 3],
    pub line_color: [u8; 3],
    pub vertex_color: [u8; 3],
    pub midpoint_color: [u8; 3],
    pub stroke_weight: f32,
    pub vertex_size: f32,
    pub midpoint_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [40, 44, 52],
            line_color: [97, 218, 251],
            vertex_color: [255, 255, 255],
            midpoint_color: [247, 217, 111],
            stroke_weight: 3.0,
            vertex_size: 10.0,
            midpoint_size: 10.0,
        }
    }
}

/************************* Construction overlay ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ConstructionConfig {
    pub enabled: bool,
    pub bisector_color: [u8; 3],
    pub circumcircle_color: [u8; 3],
    pub bisector_extent: f32, // in side-lengths, each way from the midpoint
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bisector_color: [252, 98, 85],
            circumcircle_color: [255, 134, 47],
            bisector_extent: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FrameRecorderConfig {
    pub enabled: bool,
    pub output_directory: String,
    pub frame_limit: u32, // 0 = no limit
    pub hold_frames: u32, // frames kept recording once the triangle is done
}

impl Default for FrameRecorderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output_directory: String::from("frames"),
            frame_limit: 0,
            hold_frames: 60,
        }
    }
}
