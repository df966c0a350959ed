use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;

/// Owns the background task that forwards crossterm input onto the loop
/// channel. One such task exists per session; `shutdown` aborts it so the
/// terminal is quiet before the session restores the screen.
pub(crate) struct InputForwarder {
    task: Option<JoinHandle<()>>,
}

impl InputForwarder {
    pub(crate) fn spawn() -> (
        UnboundedSender<DomainEvent>,
        UnboundedReceiver<DomainEvent>,
        Self,
    ) {
        let (tx, rx) = unbounded_channel();
        let task = spawn_input_task(tx.clone());
        (tx, rx, Self { task: Some(task) })
    }

    pub(crate) fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) => DomainEvent::Input(event),
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::InputForwarder;

    #[tokio::test]
    async fn shutdown_aborts_the_task_and_is_idempotent() {
        let task = tokio::spawn(std::future::pending::<()>());
        let mut forwarder = InputForwarder { task: Some(task) };

        forwarder.shutdown();
        assert!(forwarder.task.is_none());

        // Second call must not panic on the already-taken handle.
        forwarder.shutdown();
    }
}
