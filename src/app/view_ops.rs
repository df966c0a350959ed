use crate::error::AppResult;
use crate::ui::{self, StatusView};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let visible = self.carousel.surface.visible();
        let direction = self.carousel.surface.direction();
        let transitioning = self.carousel.surface.is_transitioning();

        session.draw(|frame| {
            let layout = ui::split_layout(frame.area(), self.state.status_detail_visible);

            if let Some(card) = self.deck.card(visible) {
                ui::draw_card(frame, layout.viewer, card);
            }
            ui::draw_pager(frame, layout.pager, visible, self.deck.len());
            ui::draw_status(
                frame,
                layout.status,
                &StatusView {
                    state: &self.state,
                    visible,
                    card_count: self.deck.len(),
                    direction,
                    transitioning,
                    wrap: self.config.carousel.wrap,
                },
            );
        })?;

        Ok(())
    }
}
