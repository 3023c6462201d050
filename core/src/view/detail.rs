//! Poll detail view state machine

use crate::client::PollSource;
use crate::poll::PollId;
use crate::view::load::{load_outcome, LoadOutcome};
use crate::view::render::{render, RenderedView};
use crate::view::state::ViewState;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Tag for one outstanding fetch.
///
/// A completion is applied only when it carries the ticket the view is
/// currently waiting for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    request_id: Uuid,
    poll_id: PollId,
}

impl LoadTicket {
    fn issue(poll_id: PollId) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            poll_id,
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Poll the fetch was issued for
    pub fn poll_id(&self) -> &PollId {
        &self.poll_id
    }
}

/// What happened to a completion handed to [`PollDetailView::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Detail view for a single mounted poll identifier
#[derive(Debug, Clone, PartialEq)]
pub struct PollDetailView {
    poll_id: PollId,
    state: ViewState,
    pending: Option<LoadTicket>,
}

impl PollDetailView {
    /// Mount the view for `poll_id`.
    ///
    /// The view starts in `Loading`; the caller must run the fetch for the
    /// returned ticket and hand the outcome to [`complete`](Self::complete).
    pub fn mount(poll_id: PollId) -> (Self, LoadTicket) {
        let ticket = LoadTicket::issue(poll_id.clone());
        debug!("Mounted poll view for {} ({})", poll_id, ticket.request_id);
        let view = Self {
            poll_id,
            state: ViewState::Loading,
            pending: Some(ticket.clone()),
        };
        (view, ticket)
    }

    /// Switch the view to another poll identifier.
    ///
    /// Returns the ticket for the new fetch, or `None` when the identifier is
    /// unchanged. Any fetch still outstanding for the previous identifier
    /// becomes stale.
    pub fn set_poll_id(&mut self, poll_id: PollId) -> Option<LoadTicket> {
        if poll_id == self.poll_id {
            return None;
        }

        info!("Poll view switching from {} to {}", self.poll_id, poll_id);
        let ticket = LoadTicket::issue(poll_id.clone());
        self.poll_id = poll_id;
        self.state = ViewState::Loading;
        self.pending = Some(ticket.clone());
        Some(ticket)
    }

    /// Apply the outcome of the fetch identified by `ticket`
    pub fn complete(&mut self, ticket: &LoadTicket, outcome: LoadOutcome) -> Completion {
        if self.pending.as_ref() != Some(ticket) {
            debug!(
                "Discarding stale completion for poll {} ({})",
                ticket.poll_id, ticket.request_id
            );
            return Completion::Stale;
        }

        self.pending = None;
        self.state = match outcome {
            LoadOutcome::Loaded(poll) => ViewState::Loaded(poll),
            LoadOutcome::NotFound => ViewState::NotFound,
            LoadOutcome::Failed(message) => ViewState::Error(message),
        };
        debug!("Poll {} is now {}", self.poll_id, self.state.kind());
        Completion::Applied
    }

    /// Mount the view and drive its single fetch to completion
    pub async fn load(source: &dyn PollSource, poll_id: PollId) -> Self {
        let (mut view, ticket) = Self::mount(poll_id);
        let outcome = load_outcome(source, ticket.poll_id()).await;
        view.complete(&ticket, outcome);
        view
    }

    pub fn poll_id(&self) -> &PollId {
        &self.poll_id
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Ticket of the outstanding fetch, if any
    pub fn pending(&self) -> Option<&LoadTicket> {
        self.pending.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn render(&self) -> RenderedView {
        render(&self.state)
    }
}
