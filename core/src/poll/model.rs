//! Poll, question and choice records

use crate::poll::record::{self, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Text shown in place of a choice whose `choice_text` is absent or empty
pub const CHOICE_TEXT_PLACEHOLDER: &str = "(No text provided)";

/// A poll as returned by `GET /api/polls/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    /// Poll id assigned by the service
    #[serde(
        default,
        deserialize_with = "record::record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,

    /// Poll title
    #[serde(default, deserialize_with = "record::text")]
    pub title: String,

    /// Poll description
    #[serde(default, deserialize_with = "record::text")]
    pub description: String,

    /// Ordered questions; `None` when the field is absent or null
    #[serde(default)]
    pub questions: Option<Vec<Question>>,

    /// Id of the user who created the poll
    #[serde(
        default,
        deserialize_with = "record::record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by: Option<RecordId>,

    /// When the poll opens
    #[serde(
        default,
        deserialize_with = "record::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Timestamp>,

    /// When the poll closes
    #[serde(
        default,
        deserialize_with = "record::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Timestamp>,

    /// Creation timestamp
    #[serde(
        default,
        deserialize_with = "record::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

impl Poll {
    /// Create a poll with a title, a description and no questions
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            questions: None,
            created_by: None,
            start_date: None,
            end_date: None,
            created_at: None,
        }
    }

    /// Append a question
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.get_or_insert_with(Vec::new).push(question);
        self
    }

    /// Questions in service order. An absent list reads as empty.
    pub fn questions(&self) -> &[Question] {
        self.questions.as_deref().unwrap_or_default()
    }

    /// Whether the poll has at least one question
    pub fn has_questions(&self) -> bool {
        !self.questions().is_empty()
    }
}

/// A question belonging to a poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(
        default,
        deserialize_with = "record::record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,

    #[serde(
        default,
        deserialize_with = "record::record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub poll_id: Option<RecordId>,

    /// Prompt text; `null` reads as empty
    #[serde(default, deserialize_with = "record::text")]
    pub text: String,

    /// Ordered choices; `None` when the field is absent or null
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

impl Question {
    pub fn new(id: impl Into<RecordId>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            poll_id: None,
            text: text.into(),
            choices: None,
        }
    }

    /// Append a choice
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.get_or_insert_with(Vec::new).push(choice);
        self
    }

    /// Choices in service order. An absent list reads as empty.
    pub fn choices(&self) -> &[Choice] {
        self.choices.as_deref().unwrap_or_default()
    }
}

/// A selectable answer option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(
        default,
        deserialize_with = "record::record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,

    #[serde(
        default,
        deserialize_with = "record::record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub question_id: Option<RecordId>,

    /// Display text; the service may omit it, send null, or send ""
    #[serde(default, deserialize_with = "record::optional_text")]
    pub choice_text: Option<String>,
}

impl Choice {
    pub fn new(id: impl Into<RecordId>, choice_text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            question_id: None,
            choice_text: Some(choice_text.into()),
        }
    }

    /// A choice with no text at all
    pub fn without_text(id: impl Into<RecordId>) -> Self {
        Self {
            id: Some(id.into()),
            question_id: None,
            choice_text: None,
        }
    }

    /// Display label for this choice
    pub fn label(&self) -> ChoiceLabel<'_> {
        match self.choice_text.as_deref() {
            Some(text) if !text.is_empty() => ChoiceLabel::Text(text),
            _ => ChoiceLabel::Missing,
        }
    }
}

/// Display label of a choice.
///
/// Absent and empty texts both collapse into `Missing`, which displays as
/// [`CHOICE_TEXT_PLACEHOLDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceLabel<'a> {
    Text(&'a str),
    Missing,
}

impl<'a> ChoiceLabel<'a> {
    /// Text to show for this label
    pub fn display(&self) -> &'a str {
        match self {
            ChoiceLabel::Text(text) => text,
            ChoiceLabel::Missing => CHOICE_TEXT_PLACEHOLDER,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ChoiceLabel::Missing)
    }
}
