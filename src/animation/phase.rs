// src/animation/phase.rs
//
// The side-drawing sequencer
//
// Walks through the three sides of the triangle, one `step` of progress
// per frame. Once the third side is complete it parks in `Done` and every
// further advance is a no-op.

use log::info;

pub const DEFAULT_STEP: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Phase {
    #[default]
    Side1,
    Side2,
    Side3,
    Done,
}

impl Phase {
    pub fn index(self) -> usize {
        match self {
            Phase::Side1 => 0,
            Phase::Side2 => 1,
            Phase::Side3 => 2,
            Phase::Done => 3,
        }
    }

    pub fn next(self) -> Phase {
        match self {
            Phase::Side1 => Phase::Side2,
            Phase::Side2 => Phase::Side3,
            Phase::Side3 | Phase::Done => Phase::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == Phase::Done
    }

    /// Index of the side currently being animated, if any.
    pub fn animating_side(self) -> Option<usize> {
        if self.is_done() {
            None
        } else {
            Some(self.index())
        }
    }
}

/// Snapshot handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub phase: Phase,
    pub progress: f32,
}

#[derive(Debug, Clone)]
pub struct PhaseController {
    phase: Phase,
    // frames spent on the current side; progress is derived from it
    ticks: u32,
    step: f32,
}

impl PhaseController {
    /// A controller at the start of the first side. A non-positive or
    /// non-finite `step` falls back to `DEFAULT_STEP`.
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            log::warn!("Invalid animation step {}, using {}", step, DEFAULT_STEP);
            DEFAULT_STEP
        };
        Self {
            phase: Phase::Side1,
            ticks: 0,
            step,
        }
    }

    /// A controller that is already done, for the static picture.
    pub fn finished(step: f32) -> Self {
        let mut controller = Self::new(step);
        controller.phase = Phase::Done;
        controller
    }

    /// Advance by one frame. Returns the phase just entered, if the current
    /// side was completed on this frame.
    pub fn advance(&mut self) -> Option<Phase> {
        if self.phase.is_done() {
            return None;
        }

        self.ticks += 1;
        if self.progress() >= 1.0 {
            self.ticks = 0;
            self.phase = self.phase.next();
            info!("Entering phase {:?}", self.phase);
            Some(self.phase)
        } else {
            None
        }
    }

    pub fn state(&self) -> AnimationState {
        AnimationState {
            phase: self.phase,
            progress: self.progress(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.ticks as f32 * self.step
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.phase.is_done()
    }
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Frames needed to move from one phase to the next
    fn frames_until_phase_change(controller: &mut PhaseController) -> usize {
        let start = controller.phase();
        let mut frames = 0;
        while controller.phase() == start {
            controller.advance();
            frames += 1;
            assert!(frames < 10_000, "phase never advanced");
        }
        frames
    }

    mod phase_tests {
        use super::*;

        #[test]
        fn test_phase_order() {
            assert!(Phase::Side1 < Phase::Side2);
            assert!(Phase::Side2 < Phase::Side3);
            assert!(Phase::Side3 < Phase::Done);
            assert_eq!(Phase::Side3.next(), Phase::Done);
            assert_eq!(Phase::Done.next(), Phase::Done);
        }

        #[test]
        fn test_animating_side() {
            assert_eq!(Phase::Side1.animating_side(), Some(0));
            assert_eq!(Phase::Side3.animating_side(), Some(2));
            assert_eq!(Phase::Done.animating_side(), None);
        }
    }

    mod controller_tests {
        use super::*;

        #[test]
        fn test_initial_state() {
            let controller = PhaseController::default();
            assert_eq!(
                controller.state(),
                AnimationState {
                    phase: Phase::Side1,
                    progress: 0.0
                }
            );
            assert_eq!(controller.step(), DEFAULT_STEP);
        }

        #[test]
        fn test_half_step_completes_side_in_two_frames() {
            let mut controller = PhaseController::new(0.5);

            assert_eq!(controller.advance(), None);
            assert_eq!(controller.phase(), Phase::Side1);
            assert_eq!(controller.progress(), 0.5);

            assert_eq!(controller.advance(), Some(Phase::Side2));
            assert_eq!(controller.progress(), 0.0);
        }

        #[test]
        fn test_default_step_takes_fifty_frames_per_side() {
            let mut controller = PhaseController::new(0.02);
            for _ in 0..3 {
                assert_eq!(frames_until_phase_change(&mut controller), 50);
                assert_eq!(controller.progress(), 0.0);
            }
            assert!(controller.is_complete());
        }

        #[test]
        fn test_uneven_step_rounds_frames_up() {
            // 0.3 -> 0.6 -> 0.9 -> 1.2
            let mut controller = PhaseController::new(0.3);
            assert_eq!(frames_until_phase_change(&mut controller), 4);
        }

        #[test]
        fn test_step_just_under_a_fraction_needs_an_extra_frame() {
            // 3 * 0.499999 is the first multiple to reach 1.0
            let mut controller = PhaseController::new(0.499999);
            assert_eq!(frames_until_phase_change(&mut controller), 3);

            let mut controller = PhaseController::new(0.249999);
            assert_eq!(frames_until_phase_change(&mut controller), 5);
        }

        #[test]
        fn test_hundredth_step_takes_hundred_frames() {
            let mut controller = PhaseController::new(0.01);
            assert_eq!(frames_until_phase_change(&mut controller), 100);
        }

        #[test]
        fn test_step_above_one_completes_side_each_frame() {
            let mut controller = PhaseController::new(2.0);
            assert_eq!(controller.advance(), Some(Phase::Side2));
            assert_eq!(controller.advance(), Some(Phase::Side3));
            assert_eq!(controller.advance(), Some(Phase::Done));
            assert_eq!(controller.advance(), None);
        }

        #[test]
        fn test_phase_is_monotonic_and_progress_bounded() {
            let mut controller = PhaseController::new(0.07);
            let mut previous = controller.phase();
            for _ in 0..200 {
                controller.advance();
                let state = controller.state();
                assert!(state.phase >= previous);
                assert!(state.phase.index() - previous.index() <= 1);
                assert!((0.0..1.0).contains(&state.progress));
                previous = state.phase;
            }
            assert_eq!(previous, Phase::Done);
        }

        #[test]
        fn test_done_is_idempotent() {
            let mut controller = PhaseController::new(0.5);
            while !controller.is_complete() {
                controller.advance();
            }
            let done = controller.state();
            for _ in 0..100 {
                assert_eq!(controller.advance(), None);
                assert_eq!(controller.state(), done);
            }
        }

        #[test]
        fn test_finished_controller_is_done() {
            let mut controller = PhaseController::finished(0.02);
            assert_eq!(controller.phase(), Phase::Done);
            assert_eq!(controller.advance(), None);
            assert_eq!(controller.progress(), 0.0);
        }

        #[test]
        fn test_invalid_step_falls_back_to_default() {
            assert_eq!(PhaseController::new(0.0).step(), DEFAULT_STEP);
            assert_eq!(PhaseController::new(-1.0).step(), DEFAULT_STEP);
            assert_eq!(PhaseController::new(f32::NAN).step(), DEFAULT_STEP);
        }
    }
}
