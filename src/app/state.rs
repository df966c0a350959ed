use crate::command::ActionId;

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

/// Presentation-owned state. `current_card` is the externally observable
/// current-page cell: the command layer writes it, the paging coordinator
/// reads it to detect programmatic changes and writes it back after a
/// gesture-driven transition completes.
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_card: usize,
    pub animated: bool,
    pub status_detail_visible: bool,
    pub status: StatusState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_card: 0,
            animated: true,
            status_detail_visible: false,
            status: StatusState::default(),
        }
    }
}
