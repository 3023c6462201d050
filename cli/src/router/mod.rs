//! Router module for mapping paths to views
//!
//! This module provides a small path router used by both the one-shot
//! command and the interactive application, plus the application's own
//! route table.

pub mod route;
pub mod router;

// Re-export commonly used types
pub use route::Route;
pub use router::{RouteMatch, Router, RouterConfig, RouterResult};

use anyhow::Result;
use pollview_core::PollId;

pub const HOME_ROUTE: &str = "home";
pub const POLL_DETAIL_ROUTE: &str = "poll_detail";
pub const POLL_ID_PARAM: &str = "pollId";

/// Route table of the application
pub fn app_router_config() -> RouterResult<RouterConfig> {
    Ok(RouterConfig::new()
        .add_route(Route::new(HOME_ROUTE, "Home", "/")?.as_default())
        .add_route(Route::new(POLL_DETAIL_ROUTE, "Poll", "/poll/:pollId")?))
}

/// Views the application can mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    PollDetail(PollId),
}

impl AppRoute {
    /// Map a route match onto the view it mounts
    pub fn from_match(matched: &RouteMatch) -> Result<Self> {
        match matched.route_id.0.as_str() {
            POLL_DETAIL_ROUTE => {
                let poll_id = PollId::new(matched.param(POLL_ID_PARAM)?)?;
                Ok(AppRoute::PollDetail(poll_id))
            }
            _ => Ok(AppRoute::Home),
        }
    }
}
