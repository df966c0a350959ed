use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent) -> Option<Command> {
    map_key_to_command_with_preset(key, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(key: KeyEvent, preset: KeymapPreset) -> Option<Command> {
    match preset {
        KeymapPreset::Default => map_key_default(key),
        KeymapPreset::Emacs => map_key_emacs(key),
    }
}

fn map_key_default(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Command::PrevCard),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::NextCard),
        KeyCode::Char('g') | KeyCode::Home => Some(Command::FirstCard),
        KeyCode::Char('G') | KeyCode::End => Some(Command::LastCard),
        KeyCode::Char(digit @ '1'..='9') => {
            let card = digit as usize - '0' as usize;
            Some(Command::GotoCard { card })
        }
        KeyCode::Char('a') => Some(Command::ToggleAnimation),
        KeyCode::Char('d') => Some(Command::ToggleStatusDetail),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn map_key_emacs(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('<') => Some(Command::FirstCard),
            KeyCode::Char('>') => Some(Command::LastCard),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('f') => Some(Command::NextCard),
            KeyCode::Char('b') => Some(Command::PrevCard),
            KeyCode::Char('g') => None,
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::PageDown => Some(Command::NextCard),
        KeyCode::PageUp => Some(Command::PrevCard),
        _ => map_key_default(key),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::command::Command;

    use super::{KeymapPreset, map_key_to_command, map_key_to_command_with_preset};

    #[test]
    fn keymap_preset_parse_defaults_on_unknown_values() {
        assert_eq!(KeymapPreset::parse("default"), KeymapPreset::Default);
        assert_eq!(KeymapPreset::parse("emacs"), KeymapPreset::Emacs);
        assert_eq!(KeymapPreset::parse("unknown"), KeymapPreset::Default);
    }

    #[test]
    fn arrows_and_vim_keys_step_cards() {
        let left = map_key_to_command(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(left, Some(Command::PrevCard));

        let ell = map_key_to_command(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
        assert_eq!(ell, Some(Command::NextCard));
    }

    #[test]
    fn digits_jump_one_based() {
        let jump = map_key_to_command(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));
        assert_eq!(jump, Some(Command::GotoCard { card: 4 }));
    }

    #[test]
    fn emacs_preset_maps_ctrl_f_and_falls_back_to_default() {
        let next = map_key_to_command_with_preset(
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL),
            KeymapPreset::Emacs,
        );
        assert_eq!(next, Some(Command::NextCard));

        let quit = map_key_to_command_with_preset(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeymapPreset::Emacs,
        );
        assert_eq!(quit, Some(Command::Quit));
    }
}
