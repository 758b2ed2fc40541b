use super::model::ReadState;

/// Events accepted by the auto-read state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadEvent {
    /// User toggle (button or keyboard shortcut).
    Toggle,
}

/// A recorded transition, kept for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: Option<ReadState>,
    pub event: ReadEvent,
    pub to: ReadState,
}

impl StateTransition {
    pub const fn new(from: Option<ReadState>, event: ReadEvent, to: ReadState) -> Self {
        Self { from, event, to }
    }
}
