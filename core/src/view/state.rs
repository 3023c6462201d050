//! View state of the poll detail view

use crate::poll::Poll;
use serde::{Deserialize, Serialize};

/// The mutually exclusive rendering mode of the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState {
    /// A fetch is outstanding
    Loading,
    /// The fetch failed; the message names the poll
    Error(String),
    /// The service answered but had no poll to give
    NotFound,
    /// The poll arrived
    Loaded(Poll),
}

/// Discriminant of [`ViewState`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Loading,
    Error,
    NotFound,
    Loaded,
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::Loading => ViewKind::Loading,
            ViewState::Error(_) => ViewKind::Error,
            ViewState::NotFound => ViewKind::NotFound,
            ViewState::Loaded(_) => ViewKind::Loaded,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Terminal states accept no further completions for the same mount
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn poll(&self) -> Option<&Poll> {
        match self {
            ViewState::Loaded(poll) => Some(poll),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Loading => "loading",
            ViewKind::Error => "error",
            ViewKind::NotFound => "not_found",
            ViewKind::Loaded => "loaded",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_with_tag() {
        let json = serde_json::to_value(ViewState::Error("boom".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"state": "error", "data": "boom"}));

        let json = serde_json::to_value(ViewState::NotFound).unwrap();
        assert_eq!(json, serde_json::json!({"state": "not_found"}));
    }

    #[test]
    fn test_error_and_loaded_are_not_loading() {
        assert!(ViewState::Loading.is_loading());
        assert!(ViewState::Error("x".into()).is_terminal());
        assert!(ViewState::Loaded(Poll::new("T", "D")).is_terminal());
        assert_eq!(ViewState::NotFound.kind(), ViewKind::NotFound);
    }
}
