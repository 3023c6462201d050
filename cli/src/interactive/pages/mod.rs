//! Pages mounted by the interactive application

pub mod home;
pub mod poll_detail;

pub use home::HomePage;
pub use poll_detail::PollDetailPage;
