//! Background poll loading for the interactive application
//!
//! Fetches run on the tokio runtime; their completions are broadcast so the
//! UI future can hand them to the mounted view, which drops stale ones.

use pollview_core::{load_outcome, LoadOutcome, LoadTicket, PollSource};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

const EVENT_CAPACITY: usize = 64;

/// A finished load, tagged with the ticket it was started for
#[derive(Debug, Clone)]
pub struct LoadEvent {
    pub ticket: LoadTicket,
    pub outcome: LoadOutcome,
}

/// Starts poll fetches and publishes their outcomes
#[derive(Clone)]
pub struct PollLoader {
    source: Arc<dyn PollSource>,
    events: broadcast::Sender<LoadEvent>,
}

impl PollLoader {
    pub fn new(source: Arc<dyn PollSource>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { source, events }
    }

    /// Subscribe to load completions
    pub fn subscribe(&self) -> broadcast::Receiver<LoadEvent> {
        self.events.subscribe()
    }

    /// Fetch the poll named by `ticket` in the background
    ///
    /// Must be called from within a tokio runtime context.
    pub fn spawn(&self, ticket: LoadTicket) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        debug!(
            "Loading poll {} via {} (request {})",
            ticket.poll_id(),
            source.source_name(),
            ticket.request_id()
        );

        tokio::spawn(async move {
            let outcome = load_outcome(source.as_ref(), ticket.poll_id()).await;
            if events.send(LoadEvent { ticket, outcome }).is_err() {
                debug!("No view is listening for poll completions");
            }
        })
    }
}
