use std::convert::Infallible;
use std::io;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Size;

use crate::app::App;
use crate::config::Config;
use crate::deck::Deck;

use super::super::terminal_session::TerminalSurface;

struct TestTerminalSurface {
    terminal: Terminal<TestBackend>,
}

impl TestTerminalSurface {
    fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = infallible_to_io(Terminal::new(TestBackend::new(width, height)))?;
        Ok(Self { terminal })
    }

    fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn size(&self) -> io::Result<Size> {
        infallible_to_io(self.terminal.size())
    }

    fn clear(&mut self) -> io::Result<()> {
        infallible_to_io(self.terminal.clear())
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

#[test]
fn render_frame_draws_card_pager_and_status() {
    let mut session = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");
    let mut app = App::new_with_config(Deck::builtin(), Config::default());

    app.render_frame(&mut session).expect("frame should render");

    let content = session.content();
    assert!(content.contains("Blue"), "card title should be drawn");
    assert!(content.contains('●'), "pager should mark the visible card");
    assert!(content.contains("card 1/6"), "status should show position");
}

#[test]
fn render_frame_survives_tiny_terminal() {
    let mut session = TestTerminalSurface::new(3, 2).expect("test terminal should initialize");
    let mut app = App::new_with_config(Deck::builtin(), Config::default());

    app.render_frame(&mut session).expect("frame should render");
}
