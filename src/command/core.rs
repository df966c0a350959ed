use crate::app::AppState;
use crate::error::{AppError, AppResult};

use super::types::{ActionId, CommandOutcome};

// The command layer guards the deck boundaries for user feedback; the
// paging coordinator clamps again independently and does not trust this.

pub(crate) fn next_card(state: &mut AppState, card_count: usize) -> AppResult<CommandOutcome> {
    state.status.last_action_id = Some(ActionId::NextCard);

    if state.current_card + 1 >= card_count {
        state.status.message = format!(
            "already at last card ({}/{})",
            state.current_card + 1,
            card_count
        );
        return Ok(CommandOutcome::Noop);
    }

    state.current_card += 1;
    state.status.message = format!("card {}/{}", state.current_card + 1, card_count);
    Ok(CommandOutcome::Applied)
}

pub(crate) fn prev_card(state: &mut AppState, card_count: usize) -> AppResult<CommandOutcome> {
    state.status.last_action_id = Some(ActionId::PrevCard);

    if state.current_card == 0 {
        state.status.message = "already at first card (1)".to_string();
        return Ok(CommandOutcome::Noop);
    }

    state.current_card -= 1;
    state.status.message = format!("card {}/{}", state.current_card + 1, card_count);
    Ok(CommandOutcome::Applied)
}

pub(crate) fn first_card(state: &mut AppState, card_count: usize) -> AppResult<CommandOutcome> {
    state.status.last_action_id = Some(ActionId::FirstCard);

    if state.current_card == 0 {
        state.status.message = "already at first card (1)".to_string();
        return Ok(CommandOutcome::Noop);
    }

    state.current_card = 0;
    state.status.message = format!("card 1/{card_count}");
    Ok(CommandOutcome::Applied)
}

pub(crate) fn last_card(state: &mut AppState, card_count: usize) -> AppResult<CommandOutcome> {
    state.status.last_action_id = Some(ActionId::LastCard);

    let target = card_count - 1;
    if state.current_card == target {
        state.status.message = format!("already at last card ({}/{card_count})", target + 1);
        return Ok(CommandOutcome::Noop);
    }

    state.current_card = target;
    state.status.message = format!("card {}/{}", state.current_card + 1, card_count);
    Ok(CommandOutcome::Applied)
}

pub(crate) fn goto_card(
    state: &mut AppState,
    card_count: usize,
    card: usize,
) -> AppResult<CommandOutcome> {
    state.status.last_action_id = Some(ActionId::GotoCard);

    if card < 1 {
        return Err(AppError::invalid_argument("card number must be >= 1"));
    }
    if card > card_count {
        return Err(AppError::invalid_argument("card number exceeds deck length"));
    }

    let target = card - 1;
    if state.current_card == target {
        state.status.message = format!("already at card {}/{}", target + 1, card_count);
        return Ok(CommandOutcome::Noop);
    }

    state.current_card = target;
    state.status.message = format!("card {}/{}", state.current_card + 1, card_count);
    Ok(CommandOutcome::Applied)
}

pub(crate) fn toggle_animation(state: &mut AppState) -> AppResult<CommandOutcome> {
    state.status.last_action_id = Some(ActionId::ToggleAnimation);
    state.animated = !state.animated;
    let label = if state.animated { "on" } else { "off" };
    state.status.message = format!("animation: {label}");
    Ok(CommandOutcome::Applied)
}

pub(crate) fn toggle_status_detail(state: &mut AppState) -> AppResult<CommandOutcome> {
    state.status.last_action_id = Some(ActionId::ToggleStatusDetail);
    state.status_detail_visible = !state.status_detail_visible;
    let label = if state.status_detail_visible { "on" } else { "off" };
    state.status.message = format!("status detail: {label}");
    Ok(CommandOutcome::Applied)
}
