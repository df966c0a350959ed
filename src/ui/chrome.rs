use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::AppState;
use crate::deck::Card;
use crate::paging::Direction;

/// Fills the viewer with the card's color and paints the title in the
/// bottom-left corner.
pub fn draw_card(frame: &mut Frame<'_>, area: Rect, card: &Card) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let fill = Block::new().style(Style::new().bg(card.color));
    frame.render_widget(fill, area);

    let title_row = if area.height >= 2 {
        area.y + area.height - 2
    } else {
        area.y
    };
    let padding = if area.width > 2 { 2 } else { 0 };
    let title_x = area.x + padding;
    let max_width = area.width - padding;

    let mut title = card.title.clone();
    while title.width() as u16 > max_width {
        title.pop();
    }
    let label = Paragraph::new(title).style(
        Style::new()
            .fg(Color::White)
            .bg(card.color)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        label,
        Rect::new(title_x, title_row, max_width, 1),
    );
}

/// Centered page-dot strip; the visible card's dot is filled.
pub fn draw_pager(frame: &mut Frame<'_>, area: Rect, visible: usize, card_count: usize) {
    if area.width == 0 || area.height == 0 || card_count == 0 {
        return;
    }

    let dots = (0..card_count)
        .map(|position| if position == visible { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    let dots_width = dots.width() as u16;
    let x = area.x + area.width.saturating_sub(dots_width) / 2;
    let width = dots_width.min(area.width);
    frame.render_widget(
        Paragraph::new(dots).style(Style::new().fg(Color::Gray)),
        Rect::new(x, area.y, width.max(1), 1),
    );
}

#[derive(Debug, Clone, Copy)]
pub struct StatusView<'a> {
    pub state: &'a AppState,
    pub visible: usize,
    pub card_count: usize,
    pub direction: Direction,
    pub transitioning: bool,
    pub wrap: bool,
}

pub fn draw_status(frame: &mut Frame<'_>, area: Rect, view: &StatusView<'_>) {
    let card_total = view.card_count.max(1);
    let card_now = view.visible.saturating_add(1).min(card_total);
    let motion = if view.transitioning {
        match view.direction {
            Direction::Forward => " ▶",
            Direction::Reverse => " ◀",
        }
    } else {
        ""
    };

    let status_text = format!(
        "card {}/{} | {}{}",
        card_now,
        card_total,
        view.direction.as_str(),
        motion
    );
    let status = Paragraph::new(status_text)
        .style(Style::default())
        .wrap(Wrap { trim: true });

    if view.state.status_detail_visible && area.height >= 2 {
        let top = Rect::new(area.x, area.y, area.width, 1);
        frame.render_widget(status, top);

        let command_id = view
            .state
            .status
            .last_action_id
            .map(|id| id.as_str())
            .unwrap_or("-");
        let message = if view.state.status.message.is_empty() {
            "-"
        } else {
            view.state.status.message.as_str()
        };
        let anim = if view.state.animated { "on" } else { "off" };
        let wrap = if view.wrap { "on" } else { "off" };
        let detail_text =
            format!("cmd={command_id} | msg={message} | anim={anim} | wrap={wrap}");
        let bottom = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height.saturating_sub(1).max(1),
        );
        let detail = Paragraph::new(detail_text)
            .style(Style::default())
            .wrap(Wrap { trim: true });
        frame.render_widget(detail, bottom);
        return;
    }

    frame.render_widget(status, area);
}
