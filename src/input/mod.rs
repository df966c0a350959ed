pub mod keymap;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Container-originated navigation intent. Gestures bypass the command
/// layer and go straight to the carousel surface, which resolves the
/// neighbor of the visible card itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Before,
    After,
}

/// Maps a mouse event on the card area to a gesture. Clicks on the left
/// half page backwards, on the right half forwards; scrolling follows the
/// same convention. Events outside the card area are ignored.
pub fn map_mouse_to_gesture(mouse: &MouseEvent, card_area: Rect) -> Option<Gesture> {
    let inside = mouse.column >= card_area.x
        && mouse.column < card_area.x + card_area.width
        && mouse.row >= card_area.y
        && mouse.row < card_area.y + card_area.height;
    if !inside {
        return None;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let midpoint = card_area.x + card_area.width / 2;
            if mouse.column < midpoint {
                Some(Gesture::Before)
            } else {
                Some(Gesture::After)
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Some(Gesture::Before),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Some(Gesture::After),
        _ => None,
    }
}
