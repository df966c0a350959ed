pub mod app;
pub mod command;
pub mod config;
pub mod deck;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod paging;
pub mod ui;
