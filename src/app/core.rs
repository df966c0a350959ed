use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::command::ActionId;
use crate::config::Config;
use crate::deck::{Deck, NeighborResolver};
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};
use crate::input::Gesture;
use crate::paging::PagingCoordinator;

use super::carousel::CarouselSurface;
use super::state::AppState;

pub struct CarouselSubsystem {
    pub surface: CarouselSurface,
    pub coordinator: PagingCoordinator,
}

pub struct App {
    pub state: AppState,
    pub carousel: CarouselSubsystem,
    pub config: Config,
    pub(crate) deck: Arc<Deck>,
}

#[derive(Debug, Default)]
pub(crate) struct TransitionPoll {
    pub(crate) redraw: bool,
    pub(crate) events: Vec<AppEvent>,
}

impl App {
    pub fn new(deck: Deck) -> AppResult<Self> {
        let config = Config::load()?;
        Ok(Self::new_with_config(deck, config))
    }

    pub fn new_with_config(deck: Deck, config: Config) -> Self {
        let deck = Arc::new(deck);
        let state = AppState {
            animated: config.carousel.animated,
            status_detail_visible: config.ui.status_detail,
            ..AppState::default()
        };

        let surface = CarouselSurface::new(
            Arc::clone(&deck),
            NeighborResolver::new(config.carousel.wrap),
            state.current_card,
            Duration::from_millis(config.carousel.transition_ms),
        );
        let coordinator = PagingCoordinator::new(state.current_card, deck.len(), state.animated);

        Self {
            state,
            carousel: CarouselSubsystem {
                surface,
                coordinator,
            },
            config,
            deck,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Propagates the external cell into the carousel. Returns true when
    /// the cell itself was rewritten (an out-of-range value got clamped).
    pub(crate) fn sync_carousel(&mut self) -> bool {
        self.carousel.coordinator.set_animated(self.state.animated);
        let normalized = self
            .carousel
            .coordinator
            .sync_external(self.state.current_card, &mut self.carousel.surface);

        if let Some(clamped) = normalized {
            self.state.current_card = clamped;
            return true;
        }
        false
    }

    /// Drains due surface transitions into the coordinator; gesture-driven
    /// completions are written back into the external cell.
    pub(crate) fn poll_transitions(&mut self, now: Instant) -> TransitionPoll {
        let mut outcome = TransitionPoll::default();
        while let Some(finished) = self.carousel.surface.poll_finished(now) {
            outcome.redraw = true;
            if let Some(page) = self.carousel.coordinator.on_transition_finished(finished) {
                let from = self.carousel.coordinator.tracker().previous();
                self.state.current_card = page;
                self.state.status.last_action_id = Some(ActionId::Gesture);
                self.state.status.message = format!("card {}/{}", page + 1, self.deck.len());
                outcome.events.push(AppEvent::CardChanged {
                    from,
                    to: page,
                    reason: NavReason::Gesture,
                });
            }
        }
        outcome
    }

    pub(crate) fn begin_gesture(&mut self, gesture: Gesture) -> bool {
        self.carousel
            .surface
            .begin_gesture(gesture, self.state.animated)
    }
}
