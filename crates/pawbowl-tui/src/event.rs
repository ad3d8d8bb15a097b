//! Terminal event source.
//!
//! One background task multiplexes crossterm input with the app's two
//! clocks: a coarse tick and the render cadence. The event loop drains a
//! single channel and never touches crossterm directly.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Coarse application tick (4 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Render cadence (~30 FPS). The UI is redrawn in full from state on
/// every render event; there is no diffing.
pub const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// What the app's event loop consumes.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized. The new size is not carried — the next
    /// draw picks it up from the backend.
    Resize,
    /// Periodic tick.
    Tick,
    /// Time to redraw.
    Render,
}

/// Map a raw crossterm event to an app event. Key release/repeat and
/// event kinds this single-screen app has no use for drop to `None`.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

/// Reads terminal events in a background task and sends them over a channel.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    /// Spawn the background reader with the module's tick/render cadence.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut input = EventStream::new();
            let mut tick = tokio::time::interval(TICK_INTERVAL);
            let mut render = tokio::time::interval(RENDER_INTERVAL);

            // Don't burst ticks if we fall behind
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            render.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = task_cancel.cancelled() => break,

                    _ = tick.tick() => Event::Tick,

                    _ = render.tick() => Event::Render,

                    Some(Ok(raw)) = input.next() => match translate(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                };

                // If the receiver is dropped, stop.
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, cancel }
    }

    /// Receive the next event. Returns `None` if the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Signal the background reader to stop.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;

    #[test]
    fn key_release_is_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(CrosstermEvent::Key(release)).is_none());
    }

    #[test]
    fn key_press_passes_through() {
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            translate(CrosstermEvent::Key(press)),
            Some(Event::Key(_))
        ));
    }

    #[test]
    fn resize_dimensions_are_not_carried() {
        assert!(matches!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize)
        ));
    }
}
