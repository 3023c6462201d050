//! Poll data model
//!
//! Types mirror the JSON records served by the poll service. Every field the
//! client does not strictly need is optional so that partial records decode.

pub mod id;
pub mod model;
pub mod record;

pub use id::PollId;
pub use model::{Choice, ChoiceLabel, Poll, Question, CHOICE_TEXT_PLACEHOLDER};
pub use record::{RecordId, Timestamp};
