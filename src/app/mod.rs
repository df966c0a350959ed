mod carousel;
mod core;
mod event_bus;
mod event_loop;
mod input_ops;
mod state;
pub(crate) mod terminal_session;
mod view_ops;

#[cfg(test)]
mod tests;

pub use carousel::CarouselSurface;
pub use core::{App, CarouselSubsystem};
pub use state::{AppState, StatusState};
