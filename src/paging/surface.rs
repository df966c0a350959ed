use super::tracker::Direction;

/// Completion notification from the paging container.
///
/// `completed` is false when a transition was aborted before the visible
/// page changed (a gesture that snapped back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionFinished {
    pub page: usize,
    pub completed: bool,
}

/// The coordinator's view of the paging container.
///
/// `display` requests are asynchronous relative to completion: the surface
/// acknowledges them by later emitting a [`TransitionFinished`]
/// notification. A new request supersedes a pending one (replace
/// semantics), so the coordinator never needs its own queue.
pub trait PagingSurface {
    fn display(&mut self, target: usize, direction: Direction, animated: bool);
}
