#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextCard,
    PrevCard,
    FirstCard,
    LastCard,
    GotoCard { card: usize },
    ToggleAnimation,
    ToggleStatusDetail,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    NextCard,
    PrevCard,
    FirstCard,
    LastCard,
    GotoCard,
    ToggleAnimation,
    ToggleStatusDetail,
    Quit,
    Input,
    Gesture,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NextCard => "next-card",
            Self::PrevCard => "prev-card",
            Self::FirstCard => "first-card",
            Self::LastCard => "last-card",
            Self::GotoCard => "goto-card",
            Self::ToggleAnimation => "toggle-animation",
            Self::ToggleStatusDetail => "toggle-status-detail",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::Gesture => "gesture",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::NextCard => ActionId::NextCard,
            Self::PrevCard => ActionId::PrevCard,
            Self::FirstCard => ActionId::FirstCard,
            Self::LastCard => ActionId::LastCard,
            Self::GotoCard { .. } => ActionId::GotoCard,
            Self::ToggleAnimation => ActionId::ToggleAnimation,
            Self::ToggleStatusDetail => ActionId::ToggleStatusDetail,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
