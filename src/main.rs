// src/main.rs
use log::{error, info};
use nannou::prelude::*;

use trisketch::{
    animation::PhaseController,
    config::{AnimationMode, Config},
    models::Triangle,
    render::{ConstructionStyle, DrawStyle, NannouCanvas, TriangleRenderer},
    services::FrameRecorder,
};

struct Model {
    window_id: WindowId,

    // Core components:
    triangle: Triangle,
    controller: PhaseController,

    // Rendering components:
    renderer: TriangleRenderer,
    canvas_width: f32,
    canvas_height: f32,

    // Frame recording:
    frame_recorder: Option<FrameRecorder>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    let (width, height) = (config.window.width, config.window.height);
    let window_id = app
        .new_window()
        .title(config.window.title.clone())
        .size(width, height)
        .resizable(false)
        .view(view)
        .build()
        .expect("Failed to create window");

    let canvas_width = width as f32;
    let canvas_height = height as f32;
    let triangle = Triangle::from_canvas(canvas_width, canvas_height);

    let controller = match config.animation.mode {
        AnimationMode::Animated => PhaseController::new(config.animation.step),
        AnimationMode::Static => PhaseController::finished(config.animation.step),
    };
    info!(
        "Canvas {}x{}, {:?} mode, step {}",
        width, height, config.animation.mode, config.animation.step
    );

    let mut renderer = TriangleRenderer::new(DrawStyle::from(&config.style));
    if config.construction.enabled {
        renderer = renderer.with_construction(ConstructionStyle::from(&config.construction));
    }

    let frame_recorder = if config.frame_recorder.enabled {
        FrameRecorder::new(
            &config.resolve_output_dir(),
            config.frame_recorder.frame_limit,
            config.frame_recorder.hold_frames,
        )
        .map_err(|e| error!("Frame recording disabled: {}", e))
        .ok()
    } else {
        None
    };

    Model {
        window_id,
        triangle,
        controller,
        renderer,
        canvas_width,
        canvas_height,
        frame_recorder,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.controller.advance();

    if let Some(recorder) = model.frame_recorder.as_mut() {
        if let (Some(path), Some(window)) = (
            recorder.next_frame(model.controller.phase()),
            app.window(model.window_id),
        ) {
            window.capture_frame(path);
        }
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut canvas = NannouCanvas::new(&draw, model.canvas_width, model.canvas_height);

    model
        .renderer
        .render(&mut canvas, &model.triangle, &model.controller.state());

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to render frame: {:?}", e);
    }
}

// Wait for any pending PNG writes before quitting
fn exit(app: &App, model: Model) {
    let Some(recorder) = model.frame_recorder.as_ref() else {
        return;
    };
    info!(
        "Waiting for {} captured frames to be written",
        recorder.frames_captured()
    );
    if let Some(window) = app.window(model.window_id) {
        if let Err(e) = window.await_capture_frame_jobs() {
            error!("Failed to finish writing frames: {:?}", e);
        }
    }
}
