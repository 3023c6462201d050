//! Route definitions and utilities
//!
//! This module defines the core route types and the path patterns
//! routes are matched with.

use super::router::RouterError;
use std::collections::HashMap;

/// Unique identifier for a route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(pub String);

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Parameters captured from a path, keyed by parameter name
pub type RouteParams = HashMap<String, String>;

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A path pattern such as `/poll/:pollId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Segments starting with `:` capture a parameter.
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        if !pattern.starts_with('/') {
            return Err(RouterError::InvalidPattern(pattern.to_string()));
        }

        let mut segments = Vec::new();
        for part in split_path(pattern) {
            if part.is_empty() {
                return Err(RouterError::InvalidPattern(pattern.to_string()));
            }
            match part.strip_prefix(':') {
                Some("") => return Err(RouterError::InvalidPattern(pattern.to_string())),
                Some(name) => {
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                    {
                        return Err(RouterError::InvalidPattern(pattern.to_string()));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Match a path against this pattern.
    ///
    /// Parameter values are captured verbatim; empty segments never match a
    /// parameter.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts = split_path(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Split a path into segments, ignoring one leading and one trailing `/`.
///
/// Interior empty segments are kept so that `/poll//7` does not collapse
/// into `/poll/7`.
fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Route definition containing metadata and configuration
#[derive(Debug, Clone)]
pub struct Route {
    /// Unique identifier for this route
    pub id: RouteId,
    /// Human-readable name for this route
    pub name: String,
    /// Path pattern this route answers to
    pub pattern: RoutePattern,
    /// Whether this route is the default route
    pub is_default: bool,
}

impl Route {
    /// Create a new route with the given ID, name and path pattern
    pub fn new(
        id: impl Into<RouteId>,
        name: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, RouterError> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            pattern: RoutePattern::parse(pattern)?,
            is_default: false,
        })
    }

    /// Mark this route as the default route
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_captures_param() {
        let pattern = RoutePattern::parse("/poll/:pollId").unwrap();
        let params = pattern.match_path("/poll/42").unwrap();
        assert_eq!(params.get("pollId").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_pattern_forwards_value_verbatim() {
        let pattern = RoutePattern::parse("/poll/:pollId").unwrap();
        let params = pattern.match_path("/poll/a%20b").unwrap();
        assert_eq!(params["pollId"], "a%20b");
    }

    #[test]
    fn test_pattern_trailing_slash_and_mismatch() {
        let pattern = RoutePattern::parse("/poll/:pollId").unwrap();
        assert!(pattern.match_path("/poll/7/").is_some());
        assert!(pattern.match_path("/poll").is_none());
        assert!(pattern.match_path("/poll/").is_none());
        assert!(pattern.match_path("/polls/7").is_none());
        assert!(pattern.match_path("/poll/7/results").is_none());
    }

    #[test]
    fn test_empty_segments_do_not_collapse() {
        let pattern = RoutePattern::parse("/poll/:pollId").unwrap();
        assert!(pattern.match_path("/poll//7").is_none());
        assert!(pattern.match_path("//poll/7").is_none());
        assert!(pattern.match_path("/poll//").is_none());
        assert!(RoutePattern::parse("/poll//:pollId").is_err());
    }

    #[test]
    fn test_root_pattern() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.match_path("/").unwrap().is_empty());
        assert!(pattern.match_path("").is_some());
        assert!(pattern.match_path("/poll/1").is_none());
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(RoutePattern::parse("poll/:id").is_err());
        assert!(RoutePattern::parse("/poll/:").is_err());
        assert!(RoutePattern::parse("/:id/:id").is_err());
    }
}
