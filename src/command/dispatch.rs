use crate::app::AppState;
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};

use super::core::{
    first_card, goto_card, last_card, next_card, prev_card, toggle_animation,
    toggle_status_detail,
};
use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

pub fn dispatch(
    state: &mut AppState,
    cmd: Command,
    card_count: usize,
) -> AppResult<CommandDispatchResult> {
    let previous_card = state.current_card;
    let action_id = cmd.action_id();

    let outcome = match cmd {
        Command::NextCard => next_card(state, card_count),
        Command::PrevCard => prev_card(state, card_count),
        Command::FirstCard => first_card(state, card_count),
        Command::LastCard => last_card(state, card_count),
        Command::GotoCard { card } => goto_card(state, card_count, card),
        Command::ToggleAnimation => toggle_animation(state),
        Command::ToggleStatusDetail => toggle_status_detail(state),
        Command::Quit => {
            state.status.last_action_id = Some(ActionId::Quit);
            state.status.message = "quit requested".to_string();
            Ok(CommandOutcome::QuitRequested)
        }
    }?;

    let mut emitted_events = Vec::new();
    if state.current_card != previous_card {
        emitted_events.push(AppEvent::CardChanged {
            from: previous_card,
            to: state.current_card,
            reason: derive_nav_reason(&cmd),
        });
    }
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    Ok(CommandDispatchResult {
        outcome,
        emitted_events,
    })
}

fn derive_nav_reason(command: &Command) -> NavReason {
    match command {
        Command::NextCard | Command::PrevCard => NavReason::Step,
        _ => NavReason::Jump,
    }
}
