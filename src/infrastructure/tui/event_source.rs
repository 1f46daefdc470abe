use std::{collections::VecDeque, sync::Arc};

use tokio::sync::{mpsc, Mutex};

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner pulls terminal events from
pub enum EventSource {
    /// The terminal's own event stream
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    /// A fixed script, exhausted after the last event
    Test(VecDeque<Event>),
    /// Events pushed by a test while the runner is live
    Channel(mpsc::UnboundedReceiver<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub fn channel() -> (mpsc::UnboundedSender<Event>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, EventSource::Channel(rx))
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
            EventSource::Channel(rx) => rx.recv().await,
        }
    }
}
