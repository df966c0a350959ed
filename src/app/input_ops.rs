use crossterm::event::KeyEvent;

use crate::command::Command;
use crate::input::keymap::{KeymapPreset, map_key_to_command_with_preset};

use super::core::App;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KeyEventOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) command: Option<Command>,
}

impl App {
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> KeyEventOutcome {
        let preset = KeymapPreset::parse(&self.config.keymap.preset);
        let Some(command) = map_key_to_command_with_preset(key, preset) else {
            return KeyEventOutcome::default();
        };

        if matches!(command, Command::Quit) {
            return KeyEventOutcome {
                quit_requested: true,
                command: None,
            };
        }

        KeyEventOutcome {
            quit_requested: false,
            command: Some(command),
        }
    }
}
