pub mod frame_recorder;

pub use frame_recorder::FrameRecorder;
