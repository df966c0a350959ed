use tracing::{debug, trace};

use super::surface::{PagingSurface, TransitionFinished};
use super::tracker::PageTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    TransitioningExternal { target: usize },
    TransitioningInternal,
}

/// Synchronizes the externally owned current-page value with the paging
/// container, in both directions, without feedback loops.
///
/// External writes flow `cell -> coordinator -> surface`; the tracker is
/// committed only when the surface reports the transition finished.
/// Container gestures flow `surface -> coordinator -> cell`; the incoming
/// page is compared against the tracker first, so writing it back never
/// echoes into a second surface instruction.
#[derive(Debug)]
pub struct PagingCoordinator {
    tracker: PageTracker,
    phase: Phase,
    page_count: usize,
    animated: bool,
}

impl PagingCoordinator {
    /// `page_count` must be at least 1; the deck enforces non-emptiness.
    pub fn new(initial: usize, page_count: usize, animated: bool) -> Self {
        let page_count = page_count.max(1);
        Self {
            tracker: PageTracker::new(initial.min(page_count - 1)),
            phase: Phase::Idle,
            page_count,
            animated,
        }
    }

    pub fn tracker(&self) -> &PageTracker {
        &self.tracker
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Reacts to the external cell. Out-of-range requests are clamped to
    /// the nearest boundary; the clamped value is returned so the caller
    /// can normalize the cell. A request equal to the tracked page is an
    /// idempotent no-op and issues zero surface instructions.
    pub fn sync_external(
        &mut self,
        requested: usize,
        surface: &mut dyn PagingSurface,
    ) -> Option<usize> {
        let target = requested.min(self.page_count - 1);
        let normalized = (target != requested).then_some(target);

        if target == self.tracker.current() {
            return normalized;
        }
        if let Phase::TransitioningExternal { target: in_flight } = self.phase
            && in_flight == target
        {
            // Already on its way; the completion will commit it.
            return normalized;
        }

        let direction = self.tracker.direction_to(target);
        debug!(
            from = self.tracker.current(),
            to = target,
            direction = direction.as_str(),
            "external page change"
        );
        self.phase = Phase::TransitioningExternal { target };
        surface.display(target, direction, self.animated);
        normalized
    }

    /// Consumes a completion notification from the surface. Returns the
    /// index to write back into the external cell when the change
    /// originated inside the container.
    pub fn on_transition_finished(&mut self, finished: TransitionFinished) -> Option<usize> {
        match self.phase {
            Phase::TransitioningExternal { target } => {
                if !finished.completed || finished.page != target {
                    trace!(
                        reported = finished.page,
                        expected = target,
                        completed = finished.completed,
                        "discarding stale completion"
                    );
                    return None;
                }
                self.tracker.set(target);
                self.phase = Phase::Idle;
                None
            }
            Phase::Idle => {
                if !finished.completed || finished.page >= self.page_count {
                    return None;
                }
                if finished.page == self.tracker.current() {
                    // Echo of a value we already hold; no write-back.
                    return None;
                }
                self.phase = Phase::TransitioningInternal;
                self.tracker.set(finished.page);
                debug!(
                    from = self.tracker.previous(),
                    to = finished.page,
                    "container gesture committed"
                );
                self.phase = Phase::Idle;
                Some(finished.page)
            }
            // Internal transitions commit within one event; a completion
            // can never observe this phase from the single-threaded loop.
            Phase::TransitioningInternal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::paging::{Direction, PagingSurface, TransitionFinished};

    use super::PagingCoordinator;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        displayed: Vec<(usize, Direction, bool)>,
    }

    impl PagingSurface for RecordingSurface {
        fn display(&mut self, target: usize, direction: Direction, animated: bool) {
            self.displayed.push((target, direction, animated));
        }
    }

    fn finished(page: usize) -> TransitionFinished {
        TransitionFinished {
            page,
            completed: true,
        }
    }

    #[test]
    fn external_change_instructs_surface_and_commits_on_completion() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(0, 6, true);

        let normalized = coordinator.sync_external(3, &mut surface);
        assert_eq!(normalized, None);
        assert_eq!(surface.displayed, vec![(3, Direction::Forward, true)]);
        assert!(coordinator.is_transitioning());
        assert_eq!(coordinator.tracker().current(), 0);

        let write_back = coordinator.on_transition_finished(finished(3));
        assert_eq!(write_back, None);
        assert!(!coordinator.is_transitioning());
        assert_eq!(coordinator.tracker().current(), 3);
        assert_eq!(coordinator.tracker().previous(), 0);
    }

    #[test]
    fn equal_value_sync_is_a_noop() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(2, 6, true);

        assert_eq!(coordinator.sync_external(2, &mut surface), None);
        assert!(surface.displayed.is_empty());
        assert!(!coordinator.is_transitioning());
    }

    #[test]
    fn in_flight_target_is_not_reissued() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(0, 6, true);

        coordinator.sync_external(3, &mut surface);
        coordinator.sync_external(3, &mut surface);
        assert_eq!(surface.displayed.len(), 1);
    }

    #[test]
    fn newer_target_supersedes_and_stale_completion_is_discarded() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(0, 6, true);

        coordinator.sync_external(3, &mut surface);
        coordinator.sync_external(5, &mut surface);
        assert_eq!(surface.displayed.len(), 2);
        assert_eq!(surface.displayed[1].0, 5);

        // Completion for the superseded target must not touch the tracker.
        assert_eq!(coordinator.on_transition_finished(finished(3)), None);
        assert_eq!(coordinator.tracker().current(), 0);
        assert!(coordinator.is_transitioning());

        assert_eq!(coordinator.on_transition_finished(finished(5)), None);
        assert_eq!(coordinator.tracker().current(), 5);
    }

    #[test]
    fn aborted_transition_leaves_state_untouched() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(0, 6, true);

        coordinator.sync_external(3, &mut surface);
        let write_back = coordinator.on_transition_finished(TransitionFinished {
            page: 3,
            completed: false,
        });
        assert_eq!(write_back, None);
        assert_eq!(coordinator.tracker().current(), 0);
        assert!(coordinator.is_transitioning());
    }

    #[test]
    fn gesture_completion_writes_back_without_new_instruction() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(3, 6, true);

        let write_back = coordinator.on_transition_finished(finished(2));
        assert_eq!(write_back, Some(2));
        assert_eq!(coordinator.tracker().current(), 2);
        assert_eq!(coordinator.tracker().previous(), 3);

        // The written-back value must not echo into a surface instruction.
        assert_eq!(coordinator.sync_external(2, &mut surface), None);
        assert!(surface.displayed.is_empty());
    }

    #[test]
    fn gesture_echo_for_current_page_is_suppressed() {
        let mut coordinator = PagingCoordinator::new(2, 6, true);
        assert_eq!(coordinator.on_transition_finished(finished(2)), None);
        assert_eq!(coordinator.tracker().previous(), 2);
    }

    #[test]
    fn out_of_range_request_is_clamped_to_boundary() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(0, 6, true);

        let normalized = coordinator.sync_external(42, &mut surface);
        assert_eq!(normalized, Some(5));
        assert_eq!(surface.displayed, vec![(5, Direction::Forward, true)]);
    }

    #[test]
    fn out_of_range_completion_is_ignored_when_idle() {
        let mut coordinator = PagingCoordinator::new(0, 6, true);
        assert_eq!(coordinator.on_transition_finished(finished(9)), None);
        assert_eq!(coordinator.tracker().current(), 0);
    }

    #[test]
    fn six_card_scenario_from_start_to_noop() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(0, 6, true);

        // External jump to page 3.
        coordinator.sync_external(3, &mut surface);
        coordinator.on_transition_finished(finished(3));
        assert_eq!(surface.displayed, vec![(3, Direction::Forward, true)]);
        assert_eq!(coordinator.tracker().current(), 3);
        assert_eq!(coordinator.tracker().previous(), 0);

        // User swipes back one page.
        let cell = coordinator.on_transition_finished(finished(2));
        assert_eq!(cell, Some(2));
        assert_eq!(coordinator.tracker().current(), 2);
        assert_eq!(coordinator.tracker().previous(), 3);
        assert_eq!(coordinator.tracker().direction(), Direction::Reverse);

        // Writing 2 into the cell again issues nothing.
        assert_eq!(coordinator.sync_external(2, &mut surface), None);
        assert_eq!(surface.displayed.len(), 1);
    }

    #[test]
    fn reverse_direction_is_used_for_backward_targets() {
        let mut surface = RecordingSurface::default();
        let mut coordinator = PagingCoordinator::new(4, 6, false);

        coordinator.sync_external(1, &mut surface);
        assert_eq!(surface.displayed, vec![(1, Direction::Reverse, false)]);
    }
}
