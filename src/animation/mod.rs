pub mod phase;

pub use phase::{AnimationState, Phase, PhaseController, DEFAULT_STEP};
