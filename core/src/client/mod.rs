//! Poll source trait and implementations

pub mod http;

pub use http::HttpPollClient;

use crate::error::FetchError;
use crate::poll::{Poll, PollId};
use async_trait::async_trait;

/// Trait for anything that can produce a poll by id
#[async_trait]
pub trait PollSource: Send + Sync {
    /// Fetch a single poll.
    ///
    /// `Ok(None)` means the service answered successfully but the payload
    /// was `null`.
    async fn fetch_poll(&self, poll_id: &PollId) -> Result<Option<Poll>, FetchError>;

    /// Get the source name, used in logs
    fn source_name(&self) -> &str;
}
