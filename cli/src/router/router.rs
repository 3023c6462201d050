//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and path resolution.

use super::route::{Route, RouteId, RouteParams};

/// Structured error type for router operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Initial route '{0}' not found in configuration")]
    InitialRouteMissing(String),

    #[error("Invalid route pattern '{0}'")]
    InvalidPattern(String),

    #[error("Route '{route}' is missing parameter '{param}'")]
    MissingParam { route: String, param: String },
}

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// A path resolved against the configured routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Route that matched
    pub route_id: RouteId,
    /// The path as requested
    pub path: String,
    /// Captured parameters
    pub params: RouteParams,
}

impl RouteMatch {
    /// Get a captured parameter
    pub fn param(&self, name: &str) -> RouterResult<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RouterError::MissingParam {
                route: self.route_id.0.clone(),
                param: name.to_string(),
            })
    }
}

/// Current state of the router
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Currently active route
    pub current: RouteMatch,
    /// Navigation history (most recent first)
    pub history: Vec<RouteMatch>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterState {
    /// Create a new router state with the given initial route
    pub fn new(initial: RouteMatch) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
            max_history: 50, // Default history limit
        }
    }

    /// Navigate to a new route
    pub fn navigate_to(&mut self, next: RouteMatch) {
        // Add current route to history if it's different
        if self.current.path != next.path {
            self.history.insert(0, self.current.clone());

            // Trim history if it exceeds max size
            if self.history.len() > self.max_history {
                self.history.truncate(self.max_history);
            }
        }

        self.current = next;
    }

    /// Go back to the previous route in history
    pub fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current = self.history.remove(0);
        true
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

/// Configuration for the router
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// All available routes, matched in registration order
    pub routes: Vec<Route>,
    /// Default route to use when no route is specified
    pub default_route: Option<RouteId>,
}

impl RouterConfig {
    /// Create a new router configuration
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            default_route: None,
        }
    }

    /// Add a route to the configuration
    pub fn add_route(mut self, route: Route) -> Self {
        // Set as default if this is marked as default and no default exists
        if route.is_default && self.default_route.is_none() {
            self.default_route = Some(route.id.clone());
        }

        self.routes.retain(|existing| existing.id != route.id);
        self.routes.push(route);
        self
    }

    /// Get a route by ID
    pub fn get_route(&self, route_id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|route| &route.id == route_id)
    }

    /// Resolve a path to the first route whose pattern matches it
    pub fn resolve(&self, path: &str) -> RouterResult<RouteMatch> {
        self.routes
            .iter()
            .find_map(|route| {
                route.pattern.match_path(path).map(|params| RouteMatch {
                    route_id: route.id.clone(),
                    path: path.to_string(),
                    params,
                })
            })
            .ok_or_else(|| RouterError::RouteNotFound(path.to_string()))
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Main router struct that manages navigation state and configuration
#[derive(Debug, Clone)]
pub struct Router {
    /// Router configuration
    config: RouterConfig,
    /// Current router state
    state: RouterState,
}

impl Router {
    /// Create a new router with the given configuration
    pub fn new(config: RouterConfig) -> RouterResult<Self> {
        // Determine initial route
        let initial_route = if let Some(default_route) = &config.default_route {
            config
                .get_route(default_route)
                .ok_or_else(|| RouterError::InitialRouteMissing(default_route.0.clone()))?
        } else if let Some(route) = config.routes.first() {
            route
        } else {
            return Err(RouterError::NoRoutes);
        };

        let initial = RouteMatch {
            route_id: initial_route.id.clone(),
            path: initial_route.pattern.as_str().to_string(),
            params: RouteParams::new(),
        };

        Ok(Self {
            config,
            state: RouterState::new(initial),
        })
    }

    /// Resolve a path without navigating
    pub fn resolve(&self, path: &str) -> RouterResult<RouteMatch> {
        self.config.resolve(path)
    }

    /// Navigate to a path. The current route is unchanged on error.
    pub fn navigate(&mut self, path: &str) -> RouterResult<RouteMatch> {
        let next = self.config.resolve(path)?;
        self.state.navigate_to(next.clone());
        Ok(next)
    }

    /// Go back to the previous route
    pub fn go_back(&mut self) -> Option<&RouteMatch> {
        if self.state.go_back() {
            Some(&self.state.current)
        } else {
            None
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Get the current route match
    pub fn current(&self) -> &RouteMatch {
        &self.state.current
    }

    /// Get the route definition of the current match
    pub fn current_route(&self) -> Option<&Route> {
        self.config.get_route(&self.state.current.route_id)
    }
}
