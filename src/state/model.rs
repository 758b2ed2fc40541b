use crate::geometry::Color;

/// Auto-read mode. `Polling` means a host timer is firing sampling ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadState {
    #[default]
    Idle,
    Polling,
}

/// Canonical color holder. The single source of truth every representation
/// derives from.
///
/// Mutation is an atomic triplet replacement through [`ColorState::set_current`];
/// there is no channel-level setter. The `generation` counter is the change
/// notification: it only moves forward, and callers compare it against the last
/// generation they rendered. Pushing the new value into text fields or the UI
/// is a separate step owned by the caller, so the data mutation stays
/// independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    current: Color,
    has_sample: bool,
    generation: u64,
}

impl ColorState {
    pub const fn new() -> Self {
        Self {
            current: Color::BLACK,
            has_sample: false,
            generation: 0,
        }
    }

    /// Replaces the canonical color and marks that a real sample exists.
    pub fn set_current(&mut self, color: Color) {
        self.current = color;
        self.has_sample = true;
        self.generation += 1;
    }

    /// `None` until the first sample, dialog pick, or successful field parse;
    /// distinguishes "never sampled" from "sampled black".
    pub fn current(&self) -> Option<Color> {
        self.has_sample.then_some(self.current)
    }

    pub fn has_sample(&self) -> bool {
        self.has_sample
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_none_until_first_sample() {
        let state = ColorState::new();
        assert_eq!(state.current(), None);
        assert!(!state.has_sample());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn sampled_black_is_distinct_from_never_sampled() {
        let mut state = ColorState::new();
        state.set_current(Color::BLACK);
        assert_eq!(state.current(), Some(Color::BLACK));
        assert!(state.has_sample());
    }

    #[test]
    fn set_current_bumps_generation_each_time() {
        let mut state = ColorState::new();
        state.set_current(Color::new(1, 2, 3));
        state.set_current(Color::new(1, 2, 3));
        assert_eq!(state.generation(), 2);
        assert_eq!(state.current(), Some(Color::new(1, 2, 3)));
    }
}
