use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::PokemonDetail;
use crate::loader::LoadedPage;

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// A page load finished. `seq` is the navigation sequence the load
    /// was issued under; stale sequences are discarded by the app.
    PageLoaded { seq: u64, page: Box<LoadedPage> },

    /// A page load failed
    PageLoadFailed { seq: u64, message: String },

    /// A detail fetch for the panel finished
    DetailLoaded { seq: u64, detail: Box<PokemonDetail> },

    /// A detail fetch for the panel failed
    DetailLoadFailed { seq: u64, message: String },
}

/// Event handler bridging crossterm input and internal async events
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    sender: mpsc::UnboundedSender<Event>,
    poll_timeout: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            receiver,
            sender,
            poll_timeout: Duration::from_millis(tick_rate_ms.max(1)),
        }
    }

    /// Get the next event, falling back to a tick when nothing arrives
    /// within the poll timeout.
    pub async fn next(&mut self) -> Option<Event> {
        // Internal events (load completions) first
        if let Ok(event) = self.receiver.try_recv() {
            return Some(event);
        }

        let timeout = self.poll_timeout;
        let input = tokio::task::spawn_blocking(move || -> Result<Option<CrosstermEvent>> {
            if crossterm::event::poll(timeout)? {
                Ok(Some(crossterm::event::read()?))
            } else {
                Ok(None)
            }
        })
        .await;

        match input {
            Ok(Ok(Some(event))) => Some(Self::convert_crossterm_event(event)),
            _ => Some(Event::Tick),
        }
    }

    fn convert_crossterm_event(event: CrosstermEvent) -> Event {
        match event {
            CrosstermEvent::Key(key_event) => Event::Key(key_event),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        }
    }

    /// Get a clone of the sender for load tasks to report back on
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}
