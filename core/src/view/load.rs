//! The load operation: one fetch, converted into a view outcome

use crate::client::PollSource;
use crate::error::FetchError;
use crate::poll::{Poll, PollId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of one load, as applied to the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded(Poll),
    NotFound,
    Failed(String),
}

impl LoadOutcome {
    /// Classify a fetch result.
    ///
    /// Transport and status failures become `Failed` with a message naming
    /// the poll. A `null` payload and an undecodable payload both become
    /// `NotFound`.
    pub fn from_fetch(result: Result<Option<Poll>, FetchError>) -> Self {
        match result {
            Ok(Some(poll)) => LoadOutcome::Loaded(poll),
            Ok(None) => LoadOutcome::NotFound,
            Err(FetchError::Decode { poll_id, message }) => {
                warn!("Treating poll {} as not found: {}", poll_id, message);
                LoadOutcome::NotFound
            }
            Err(err @ FetchError::Transport { .. }) | Err(err @ FetchError::Status { .. }) => {
                LoadOutcome::Failed(err.to_string())
            }
        }
    }
}

/// Issue exactly one fetch for `poll_id` and classify the result.
///
/// Never fails: every error is folded into the returned outcome.
pub async fn load_outcome(source: &dyn PollSource, poll_id: &PollId) -> LoadOutcome {
    debug!("Loading poll {} from {}", poll_id, source.source_name());
    let outcome = LoadOutcome::from_fetch(source.fetch_poll(poll_id).await);
    if let LoadOutcome::Failed(message) = &outcome {
        debug!("Load of poll {} failed: {}", poll_id, message);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        result: Result<Option<Poll>, FetchError>,
    }

    #[async_trait]
    impl PollSource for CountingSource {
        async fn fetch_poll(&self, _poll_id: &PollId) -> Result<Option<Poll>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        fn source_name(&self) -> &str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_load_issues_exactly_one_fetch() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
            result: Ok(Some(Poll::new("T", "D"))),
        };

        let outcome = load_outcome(&source, &PollId::new("1").unwrap()).await;
        assert_eq!(outcome, LoadOutcome::Loaded(Poll::new("T", "D")));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_classification() {
        assert_eq!(LoadOutcome::from_fetch(Ok(None)), LoadOutcome::NotFound);

        let decode = FetchError::Decode {
            poll_id: "1".into(),
            message: "expected value".into(),
        };
        assert_eq!(LoadOutcome::from_fetch(Err(decode)), LoadOutcome::NotFound);

        let status = FetchError::Status {
            poll_id: "9".into(),
            status: 503,
        };
        assert_eq!(
            LoadOutcome::from_fetch(Err(status)),
            LoadOutcome::Failed("Failed to fetch poll with ID 9".into())
        );

        let transport = FetchError::Transport {
            poll_id: "9".into(),
            message: "refused".into(),
        };
        match LoadOutcome::from_fetch(Err(transport)) {
            LoadOutcome::Failed(message) => assert!(message.contains('9')),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
