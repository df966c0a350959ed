use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::deck::{Deck, NeighborResolver};
use crate::input::Gesture;
use crate::paging::{Direction, PagingSurface, TransitionFinished};

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    target: usize,
    due: Instant,
}

/// The terminal rendition of a native paging container.
///
/// Owns the visible card and pending transitions. Programmatic `display`
/// requests and mouse gestures both end in a [`TransitionFinished`]
/// notification, polled from the transition tick; animated transitions
/// become due after `transition_duration`, non-animated ones immediately.
/// A new `display` request supersedes a pending transition (replace
/// semantics). Gestures arriving while a transition is pending are
/// dropped, so one surface never produces overlapping notifications.
pub struct CarouselSurface {
    deck: Arc<Deck>,
    resolver: NeighborResolver,
    visible: usize,
    direction: Direction,
    pending: Option<PendingTransition>,
    transition_duration: Duration,
}

impl CarouselSurface {
    pub fn new(
        deck: Arc<Deck>,
        resolver: NeighborResolver,
        initial: usize,
        transition_duration: Duration,
    ) -> Self {
        let visible = initial.min(deck.last_index());
        Self {
            deck,
            resolver,
            visible,
            direction: Direction::Forward,
            pending: None,
            transition_duration,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a gesture-driven transition to the neighbor of the visible
    /// card. Returns false at a deck boundary (without wrap), for an
    /// unknown visible card, or while another transition is pending.
    pub fn begin_gesture(&mut self, gesture: Gesture, animated: bool) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let Some(current) = self.deck.card(self.visible) else {
            return false;
        };

        let neighbor = match gesture {
            Gesture::Before => self.resolver.before(&self.deck, &current.id),
            Gesture::After => self.resolver.after(&self.deck, &current.id),
        };
        let Some(neighbor) = neighbor else {
            trace!(visible = self.visible, ?gesture, "gesture at deck boundary");
            return false;
        };
        let Some(target) = self.deck.index_of(&neighbor.id) else {
            return false;
        };

        let direction = match gesture {
            Gesture::Before => Direction::Reverse,
            Gesture::After => Direction::Forward,
        };
        trace!(from = self.visible, to = target, "gesture transition");
        self.schedule(target, direction, animated);
        true
    }

    /// Reports a due transition, committing the visible card. Called from
    /// the transition tick.
    pub fn poll_finished(&mut self, now: Instant) -> Option<TransitionFinished> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }

        self.pending = None;
        self.visible = pending.target;
        Some(TransitionFinished {
            page: pending.target,
            completed: true,
        })
    }

    fn schedule(&mut self, target: usize, direction: Direction, animated: bool) {
        let due = if animated {
            Instant::now() + self.transition_duration
        } else {
            Instant::now()
        };
        self.direction = direction;
        self.pending = Some(PendingTransition { target, due });
    }
}

impl PagingSurface for CarouselSurface {
    fn display(&mut self, target: usize, direction: Direction, animated: bool) {
        trace!(target, direction = direction.as_str(), "display request");
        self.schedule(target, direction, animated);
    }
}
