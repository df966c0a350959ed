use crossterm::event::Event;

use crate::command::{ActionId, Command, CommandOutcome};

/// Describes *why* a card navigation occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavReason {
    /// Incremental movement (next-card, prev-card).
    Step,
    /// Direct jump (first-card, last-card, goto-card).
    Jump,
    /// Container-originated movement (mouse gesture on the card area).
    Gesture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    CardChanged {
        from: usize,
        to: usize,
        reason: NavReason,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    TransitionTick,
}
