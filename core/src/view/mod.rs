//! Poll detail view
//!
//! [`PollDetailView`] owns the view state for one mounted poll identifier and
//! decides which fetch completions it accepts. [`render`] is a pure function
//! from that state to a [`RenderedView`] that front-ends draw.

pub mod detail;
pub mod load;
pub mod render;
pub mod state;

pub use detail::{Completion, LoadTicket, PollDetailView};
pub use load::{load_outcome, LoadOutcome};
pub use render::{
    render, RenderedChoice, RenderedQuestion, RenderedView, ERROR_PREFIX, LOADING_MESSAGE,
    NOT_FOUND_MESSAGE, NO_QUESTIONS_MESSAGE,
};
pub use state::{ViewKind, ViewState};
