use std::time::{Duration, Instant};

use crossterm::event::Event;
use ratatui::layout::Rect;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::command::{self, ActionId, CommandOutcome};
use crate::error::AppResult;
use crate::event::DomainEvent;
use crate::input::map_mouse_to_gesture;
use crate::ui;

use super::core::App;
use super::event_bus::InputForwarder;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    session: TerminalSession,
    transition_tick: time::Interval,
    needs_redraw: bool,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    input_forwarder: InputForwarder,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;

        loop {
            if self.sync_carousel() {
                runtime.needs_redraw = true;
            }
            if runtime.needs_redraw {
                self.render_frame(&mut runtime.session)?;
                runtime.needs_redraw = false;
            }

            let waited =
                wait_next_event(&mut runtime.loop_event_rx, &mut runtime.transition_tick).await;
            if matches!(
                self.handle_waited_event(waited, &mut runtime)?,
                LoopControl::Break
            ) {
                break;
            }
        }

        runtime.input_forwarder.shutdown();
        runtime.session.restore()?;
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let (loop_event_tx, loop_event_rx, input_forwarder) = InputForwarder::spawn();
        let mut transition_tick =
            time::interval(Duration::from_millis(self.config.ui.transition_tick_ms));
        transition_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(LoopRuntime {
            session,
            transition_tick,
            needs_redraw: true,
            loop_event_tx,
            loop_event_rx,
            input_forwarder,
        })
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(Event::Key(key))) => {
                let outcome = self.handle_key_event(key);
                if outcome.quit_requested {
                    return Ok(LoopControl::Break);
                }
                if let Some(command) = outcome.command {
                    let _ = runtime.loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::Input(Event::Mouse(mouse))) => {
                if let Some(viewer) = Self::viewer_area(
                    &runtime.session,
                    self.state.status_detail_visible,
                ) && let Some(gesture) = map_mouse_to_gesture(&mouse, viewer)
                    && self.begin_gesture(gesture)
                {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Event(DomainEvent::Input(Event::Resize(..))) => {
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::Input(_)) => {}
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::Command(cmd)) => {
                match command::dispatch(&mut self.state, cmd, self.deck.len()) {
                    Ok(result) => {
                        for event in result.emitted_events {
                            let _ = runtime.loop_event_tx.send(DomainEvent::App(event));
                        }
                        if matches!(result.outcome, CommandOutcome::QuitRequested) {
                            return Ok(LoopControl::Break);
                        }
                        runtime.needs_redraw = true;
                    }
                    Err(err) => {
                        self.state.status.message = err.to_string();
                        runtime.needs_redraw = true;
                    }
                }
            }
            WaitEvent::Event(DomainEvent::App(event)) => {
                debug!(?event, "app event");
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::TransitionTick) => {
                let outcome = self.poll_transitions(Instant::now());
                if outcome.redraw {
                    runtime.needs_redraw = true;
                }
                for event in outcome.events {
                    let _ = runtime.loop_event_tx.send(DomainEvent::App(event));
                }
            }
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }

    fn viewer_area(session: &impl TerminalSurface, status_detail_visible: bool) -> Option<Rect> {
        let size = session.size().ok()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ui::split_layout(area, status_detail_visible);
        (layout.viewer.width > 0 && layout.viewer.height > 0).then_some(layout.viewer)
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    transition_tick: &mut time::Interval,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = transition_tick.tick() => {
            WaitEvent::Event(DomainEvent::TransitionTick)
        },
    }
}
