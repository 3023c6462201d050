//! Pure rendering of the poll detail view

use crate::poll::{Question, RecordId};
use crate::view::state::{ViewKind, ViewState};
use serde::Serialize;

pub const LOADING_MESSAGE: &str = "Loading poll...";
pub const ERROR_PREFIX: &str = "Error: ";
pub const NOT_FOUND_MESSAGE: &str = "Poll not found.";
pub const NO_QUESTIONS_MESSAGE: &str = "No questions available for this poll.";

/// Display-ready form of a [`ViewState`].
///
/// Variants correspond one-to-one with the view states, so a rendering always
/// shows exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedView {
    Loading {
        message: String,
    },
    Error {
        message: String,
    },
    NotFound {
        message: String,
    },
    Poll {
        title: String,
        description: String,
        /// Empty when the poll has no questions
        questions: Vec<RenderedQuestion>,
        /// Set only when `questions` is empty
        #[serde(skip_serializing_if = "Option::is_none")]
        empty_message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuestion {
    pub key: String,
    pub text: String,
    pub choices: Vec<RenderedChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedChoice {
    pub key: String,
    pub text: String,
    /// `text` is the placeholder, not service data
    pub placeholder: bool,
}

/// Render a view state. Total over every state.
pub fn render(state: &ViewState) -> RenderedView {
    match state {
        ViewState::Loading => RenderedView::Loading {
            message: LOADING_MESSAGE.to_string(),
        },
        ViewState::Error(message) => RenderedView::Error {
            message: format!("{}{}", ERROR_PREFIX, message),
        },
        ViewState::NotFound => RenderedView::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        },
        ViewState::Loaded(poll) => {
            let questions: Vec<_> = poll
                .questions()
                .iter()
                .enumerate()
                .map(|(position, question)| render_question(position, question))
                .collect();
            let empty_message = questions
                .is_empty()
                .then(|| NO_QUESTIONS_MESSAGE.to_string());
            RenderedView::Poll {
                title: poll.title.clone(),
                description: poll.description.clone(),
                questions,
                empty_message,
            }
        }
    }
}

/// Service id when present, position otherwise
fn item_key(id: Option<&RecordId>, position: usize) -> String {
    match id {
        Some(id) => id.to_string(),
        None => format!("#{}", position),
    }
}

fn render_question(position: usize, question: &Question) -> RenderedQuestion {
    RenderedQuestion {
        key: item_key(question.id.as_ref(), position),
        text: question.text.clone(),
        choices: question
            .choices()
            .iter()
            .enumerate()
            .map(|(index, choice)| {
                let label = choice.label();
                RenderedChoice {
                    key: item_key(choice.id.as_ref(), index),
                    text: label.display().to_string(),
                    placeholder: label.is_placeholder(),
                }
            })
            .collect(),
    }
}

impl RenderedView {
    /// Which view state produced this rendering
    pub fn kind(&self) -> ViewKind {
        match self {
            RenderedView::Loading { .. } => ViewKind::Loading,
            RenderedView::Error { .. } => ViewKind::Error,
            RenderedView::NotFound { .. } => ViewKind::NotFound,
            RenderedView::Poll { .. } => ViewKind::Loaded,
        }
    }

    /// Plain text lines, no styling.
    ///
    /// Questions are separated by a blank line; choices are numbered from 1.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            RenderedView::Loading { message }
            | RenderedView::Error { message }
            | RenderedView::NotFound { message } => vec![message.clone()],
            RenderedView::Poll {
                title,
                description,
                questions,
                empty_message,
            } => {
                let mut lines = vec![title.clone(), description.clone()];
                if let Some(message) = empty_message {
                    lines.push(String::new());
                    lines.push(message.clone());
                }
                for question in questions {
                    lines.push(String::new());
                    lines.push(question.text.clone());
                    for (index, choice) in question.choices.iter().enumerate() {
                        lines.push(format!("  {}. {}", index + 1, choice.text));
                    }
                }
                lines
            }
        }
    }

    pub fn to_plain_text(&self) -> String {
        self.to_lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::{Choice, Poll, Question, CHOICE_TEXT_PLACEHOLDER};

    #[test]
    fn test_each_state_renders_exactly_its_own_kind() {
        let states = [
            ViewState::Loading,
            ViewState::Error("x".into()),
            ViewState::NotFound,
            ViewState::Loaded(Poll::new("T", "D")),
        ];
        for state in &states {
            let rendered = render(state);
            assert_eq!(rendered.kind(), state.kind());
            assert!(!rendered.to_plain_text().is_empty());
        }
    }

    #[test]
    fn test_loading_shows_no_data() {
        let rendered = render(&ViewState::Loading);
        assert_eq!(rendered.to_lines(), vec![LOADING_MESSAGE.to_string()]);
    }

    #[test]
    fn test_empty_questions_message() {
        let poll: Poll =
            serde_json::from_str(r#"{"title": "T", "description": "D", "questions": []}"#)
                .unwrap();
        let rendered = render(&ViewState::Loaded(poll));

        match &rendered {
            RenderedView::Poll {
                title,
                description,
                questions,
                empty_message,
            } => {
                assert_eq!(title, "T");
                assert_eq!(description, "D");
                assert!(questions.is_empty());
                assert_eq!(empty_message.as_deref(), Some(NO_QUESTIONS_MESSAGE));
            }
            other => panic!("unexpected rendering: {:?}", other),
        }

        let text = rendered.to_plain_text();
        assert!(text.contains('T'));
        assert!(text.contains('D'));
        assert!(text.contains("No questions available for this poll."));
        assert!(!text.contains("1."));
    }

    #[test]
    fn test_absent_questions_render_like_empty() {
        let poll: Poll = serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();
        let rendered = render(&ViewState::Loaded(poll));
        assert!(rendered.to_plain_text().ends_with(NO_QUESTIONS_MESSAGE));
    }

    #[test]
    fn test_choice_placeholder_in_order() {
        let poll: Poll = serde_json::from_str(
            r#"{"title": "T", "description": "D", "questions": [
                {"id": 1, "text": "Pick one", "choices": [
                    {"id": 1, "choice_text": "A"},
                    {"id": 2, "choice_text": ""}
                ]}
            ]}"#,
        )
        .unwrap();

        match render(&ViewState::Loaded(poll)) {
            RenderedView::Poll {
                questions,
                empty_message,
                ..
            } => {
                assert!(empty_message.is_none());
                let texts: Vec<_> = questions[0].choices.iter().map(|c| c.text.as_str()).collect();
                assert_eq!(texts, vec!["A", CHOICE_TEXT_PLACEHOLDER]);
                assert!(!questions[0].choices[0].placeholder);
                assert!(questions[0].choices[1].placeholder);
            }
            other => panic!("unexpected rendering: {:?}", other),
        }
    }

    #[test]
    fn test_questions_keep_order_and_numbering() {
        let poll = Poll::new("T", "D")
            .with_question(
                Question::new(5, "First")
                    .with_choice(Choice::new(1, "x"))
                    .with_choice(Choice::without_text(2)),
            )
            .with_question(Question::new(3, "Second"));

        let lines = render(&ViewState::Loaded(poll)).to_lines();
        assert_eq!(
            lines,
            vec![
                "T".to_string(),
                "D".to_string(),
                String::new(),
                "First".to_string(),
                "  1. x".to_string(),
                format!("  2. {}", CHOICE_TEXT_PLACEHOLDER),
                String::new(),
                "Second".to_string(),
            ]
        );
    }

    #[test]
    fn test_keys_follow_service_ids() {
        let poll: Poll = serde_json::from_str(
            r#"{"title": "T", "description": null, "questions": [
                {"id": "q1", "text": null, "choices": [
                    {"id": "c1", "choice_text": "A"},
                    {"choice_text": "B"}
                ]}
            ]}"#,
        )
        .unwrap();

        match render(&ViewState::Loaded(poll)) {
            RenderedView::Poll {
                description,
                questions,
                ..
            } => {
                assert_eq!(description, "");
                assert_eq!(questions[0].key, "q1");
                assert_eq!(questions[0].text, "");
                assert_eq!(questions[0].choices[0].key, "c1");
                assert_eq!(questions[0].choices[1].key, "#1");
            }
            other => panic!("unexpected rendering: {:?}", other),
        }
    }

    #[test]
    fn test_error_and_not_found_are_distinct() {
        let error = render(&ViewState::Error("Failed to fetch poll with ID 12".into()));
        let not_found = render(&ViewState::NotFound);

        assert_eq!(error.to_plain_text(), "Error: Failed to fetch poll with ID 12");
        assert_eq!(not_found.to_plain_text(), NOT_FOUND_MESSAGE);
        assert_ne!(error.kind(), not_found.kind());
    }
}
