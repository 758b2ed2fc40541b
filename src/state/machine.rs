use super::error::{StateError, StateResult};
use super::event::StateTransition;
use super::{ReadEvent, ReadState};

/// Two-state cycle driving auto-read: `Idle <-> Polling`, flipped by the same
/// user toggle in both directions. There is no terminal state.
#[derive(Debug)]
pub struct StateMachine {
    state: ReadState,
    transition_history: Vec<StateTransition>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            state: ReadState::default(),
            transition_history: Vec::new(),
        }
    }

    pub fn state(&self) -> ReadState {
        self.state
    }

    pub fn can_transition(&self, event: ReadEvent) -> bool {
        self.next_state(event).is_some()
    }

    pub fn next_state(&self, event: ReadEvent) -> Option<ReadState> {
        match (self.state, event) {
            (ReadState::Idle, ReadEvent::Toggle) => Some(ReadState::Polling),
            (ReadState::Polling, ReadEvent::Toggle) => Some(ReadState::Idle),
        }
    }

    pub fn transition(&mut self, event: ReadEvent) -> StateResult<ReadState> {
        tracing::debug!(from = ?self.state, event = ?event, "request state transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::warn!(from = ?from, event = ?event, "invalid state transition requested");
            StateError::InvalidStateTransition { from, event }
        })?;

        let record = StateTransition::new(Some(self.state), event, next);
        self.state = next;
        self.transition_history.push(record);

        Ok(self.state)
    }
}

#[cfg(test)]
impl StateMachine {
    fn history(&self) -> &[StateTransition] {
        &self.transition_history
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReadState::{:?}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_between_idle_and_polling() {
        let mut machine = StateMachine::new();
        assert_eq!(machine.state(), ReadState::Idle);

        let state = machine
            .transition(ReadEvent::Toggle)
            .expect("idle -> polling should transition");
        assert_eq!(state, ReadState::Polling);

        let state = machine
            .transition(ReadEvent::Toggle)
            .expect("polling -> idle should transition");
        assert_eq!(state, ReadState::Idle);
    }

    #[test]
    fn toggle_is_always_a_valid_event() {
        let mut machine = StateMachine::new();
        assert!(machine.can_transition(ReadEvent::Toggle));
        let _ = machine
            .transition(ReadEvent::Toggle)
            .expect("toggle should work");
        assert!(machine.can_transition(ReadEvent::Toggle));
    }

    #[test]
    fn transition_records_history_with_ordered_entries() {
        let mut machine = StateMachine::new();
        let _ = machine
            .transition(ReadEvent::Toggle)
            .expect("start polling should work");
        let _ = machine
            .transition(ReadEvent::Toggle)
            .expect("stop polling should work");

        assert_eq!(machine.state(), ReadState::Idle);
        assert_eq!(machine.history().len(), 2);
        assert_eq!(
            machine.history()[0],
            StateTransition::new(Some(ReadState::Idle), ReadEvent::Toggle, ReadState::Polling)
        );
        assert_eq!(
            machine.history()[1],
            StateTransition::new(Some(ReadState::Polling), ReadEvent::Toggle, ReadState::Idle)
        );
    }
}
