//! Auto-read: periodically sample the pixel under the pointer.
//!
//! The host event loop owns the actual timer and calls [`AutoReadController::tick`]
//! once per period while polling. Everything runs on the one logical thread,
//! so a tick never overlaps another tick or a user-input callback.

use std::time::Duration;

use crate::capture::{CaptureBackend, PixelSampler};
use crate::geometry::ScreenPoint;
use crate::state::{ColorState, ReadEvent, ReadState, StateMachine, StateResult};

/// Cadence the host timer should fire ticks at while polling.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Default)]
pub struct AutoReadController {
    machine: StateMachine,
}

impl AutoReadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReadState {
        self.machine.state()
    }

    pub fn is_polling(&self) -> bool {
        self.machine.state() == ReadState::Polling
    }

    /// Flips between `Idle` and `Polling`. The same toggle drives both
    /// directions; stopping is synchronous, so no tick fires after it.
    pub fn toggle(&mut self) -> StateResult<ReadState> {
        self.machine.transition(ReadEvent::Toggle)
    }

    /// One polling tick: sample at the pointer and push the result through
    /// the canonical color. A capture failure is swallowed for this tick
    /// only; polling continues on the next one. Returns whether a sample
    /// landed.
    pub fn tick<B: CaptureBackend>(
        &mut self,
        sampler: &PixelSampler<B>,
        pointer: ScreenPoint,
        colors: &mut ColorState,
    ) -> bool {
        if !self.is_polling() {
            // A stale timer callback after stop; stopping already guaranteed
            // no further ticks, so just ignore it.
            return false;
        }
        match sampler.sample(pointer) {
            Ok(color) => {
                colors.set_current(color);
                true
            }
            Err(err) => {
                tracing::debug!(?err, ?pointer, "auto-read tick failed; continuing");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{CaptureError, CaptureRegion, CaptureResult, RegionPixels};
    use crate::geometry::Color;
    use std::cell::Cell;

    struct FlakyBackend {
        fill: Color,
        fail_next: Cell<bool>,
    }

    impl FlakyBackend {
        fn new(fill: Color) -> Self {
            Self {
                fill,
                fail_next: Cell::new(false),
            }
        }
    }

    impl CaptureBackend for FlakyBackend {
        fn capture_region(&self, region: CaptureRegion) -> CaptureResult<RegionPixels> {
            if self.fail_next.replace(false) {
                return Err(CaptureError::Unavailable {
                    command: "grim".to_string(),
                    message: "simulated transient failure".to_string(),
                });
            }
            let count = (region.width * region.height) as usize;
            Ok(RegionPixels::new(
                region.width,
                region.height,
                vec![self.fill; count],
            ))
        }
    }

    #[test]
    fn toggling_twice_returns_to_idle() {
        let mut controller = AutoReadController::new();
        assert_eq!(controller.state(), ReadState::Idle);

        let state = controller.toggle().expect("first toggle should work");
        assert_eq!(state, ReadState::Polling);
        assert!(controller.is_polling());

        let state = controller.toggle().expect("second toggle should work");
        assert_eq!(state, ReadState::Idle);
        assert!(!controller.is_polling());
    }

    #[test]
    fn tick_is_a_no_op_while_idle() {
        let sampler = PixelSampler::with_backend(FlakyBackend::new(Color::WHITE));
        let mut controller = AutoReadController::new();
        let mut colors = ColorState::new();

        assert!(!controller.tick(&sampler, ScreenPoint::new(0, 0), &mut colors));
        assert_eq!(colors.current(), None);
    }

    #[test]
    fn tick_pushes_the_sampled_color_through_color_state() {
        let sampler = PixelSampler::with_backend(FlakyBackend::new(Color::new(255, 0, 0)));
        let mut controller = AutoReadController::new();
        let mut colors = ColorState::new();

        let _ = controller.toggle().expect("toggle should work");
        assert!(controller.tick(&sampler, ScreenPoint::new(10, 10), &mut colors));
        assert_eq!(colors.current(), Some(Color::new(255, 0, 0)));
    }

    #[test]
    fn capture_failure_mid_poll_does_not_stop_subsequent_ticks() {
        let sampler = PixelSampler::with_backend(FlakyBackend::new(Color::new(0, 128, 64)));
        let mut controller = AutoReadController::new();
        let mut colors = ColorState::new();
        let _ = controller.toggle().expect("toggle should work");

        sampler.backend().fail_next.set(true);
        assert!(!controller.tick(&sampler, ScreenPoint::new(1, 1), &mut colors));
        assert_eq!(colors.current(), None);
        assert!(controller.is_polling());

        assert!(controller.tick(&sampler, ScreenPoint::new(1, 1), &mut colors));
        assert_eq!(colors.current(), Some(Color::new(0, 128, 64)));
    }
}
