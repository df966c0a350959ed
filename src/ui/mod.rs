mod chrome;
mod layout;

pub use chrome::{StatusView, draw_card, draw_pager, draw_status};
pub use layout::{UiLayout, split_layout};
