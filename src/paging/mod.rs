mod coordinator;
mod surface;
mod tracker;

pub use coordinator::PagingCoordinator;
pub use surface::{PagingSurface, TransitionFinished};
pub use tracker::{Direction, PageTracker};
