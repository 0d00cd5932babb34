// src/services/frame_recorder.rs
// FrameRecorder decides which frames get captured and where they are written.
// The capture itself is handed to nannou's window, which encodes PNGs off
// the main thread.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::animation::Phase;

pub struct FrameRecorder {
    output_dir: PathBuf,
    frame_limit: u32, // 0 = no limit
    hold_frames: u32, // frames captured once the animation is done
    frame_number: u32,
    frames_since_done: u32,
    is_recording: bool,
}

impl FrameRecorder {
    pub fn new(output_dir: &Path, frame_limit: u32, hold_frames: u32) -> std::io::Result<Self> {
        // Ensure output directory exists
        std::fs::create_dir_all(output_dir)?;
        info!("Recording frames to {}", output_dir.display());

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            frame_limit,
            hold_frames,
            frame_number: 0,
            frames_since_done: 0,
            is_recording: true,
        })
    }

    /// Path for the frame about to be drawn, or `None` once recording has
    /// stopped. Call once per frame.
    pub fn next_frame(&mut self, phase: Phase) -> Option<PathBuf> {
        if !self.is_recording {
            return None;
        }

        if self.frame_limit != 0 && self.frame_number >= self.frame_limit {
            self.stop("frame limit reached");
            return None;
        }

        if phase.is_done() {
            if self.frames_since_done >= self.hold_frames {
                self.stop("animation finished");
                return None;
            }
            self.frames_since_done += 1;
        }

        let path = self.frame_path(self.frame_number);
        debug!("Capturing frame {}", path.display());
        self.frame_number += 1;
        Some(path)
    }

    pub fn frame_path(&self, frame_number: u32) -> PathBuf {
        self.output_dir.join(format!("frame_{:05}.png", frame_number))
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn frames_captured(&self) -> u32 {
        self.frame_number
    }

    fn stop(&mut self, reason: &str) {
        self.is_recording = false;
        info!(
            "Recording stopped ({}), {} frames captured",
            reason, self.frame_number
        );
    }
}
