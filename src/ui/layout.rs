use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub viewer: Rect,
    pub pager: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect, status_detail_visible: bool) -> UiLayout {
    let status_height = if status_detail_visible { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(status_height),
        ])
        .split(area);

    UiLayout {
        viewer: chunks[0],
        pager: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::split_layout;

    #[test]
    fn split_layout_reserves_pager_and_status_rows() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };

        let layout = split_layout(area, false);
        assert_eq!(layout.pager.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.viewer.height, 38);
    }

    #[test]
    fn split_layout_with_detail_reserves_two_status_rows() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };

        let layout = split_layout(area, true);
        assert_eq!(layout.status.height, 2);
        assert_eq!(layout.viewer.height, 37);
    }
}
