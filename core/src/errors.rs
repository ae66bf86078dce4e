use crate::routing::types::HttpMethod;
use thiserror::Error;

/// Errors surfaced by route registration and dispatch.
///
/// Registration errors (`RouteAlreadyExists`, `MalformedPattern`) and the
/// dispatch-time `HandlerNotConfigured` are distinct variants so callers can
/// tell a setup mistake from a missing fallback.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("a route with method {method} and pattern '{pattern}' already exists")]
    RouteAlreadyExists { method: HttpMethod, pattern: String },

    #[error("404 handler not set")]
    HandlerNotConfigured,

    #[error("malformed route pattern: {0}")]
    MalformedPattern(#[from] PatternError),
}

impl RouterError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RouteAlreadyExists { .. } => error_codes::ROUTE_ALREADY_EXISTS,
            Self::HandlerNotConfigured => error_codes::HANDLER_NOT_CONFIGURED,
            Self::MalformedPattern(_) => error_codes::MALFORMED_PATTERN,
        }
    }
}

/// Reasons a route pattern fails to compile. Offsets are byte positions in
/// the pattern string.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("unclosed parameter starting at {position} in '{pattern}'")]
    UnclosedParameter { pattern: String, position: usize },

    #[error("unclosed optional group starting at {position} in '{pattern}'")]
    UnclosedOptional { pattern: String, position: usize },

    #[error("unexpected '{found}' at {position} in '{pattern}'")]
    UnexpectedClose {
        pattern: String,
        position: usize,
        found: char,
    },

    #[error("empty parameter name at {position} in '{pattern}'")]
    EmptyParameterName { pattern: String, position: usize },

    #[error("invalid character '{found}' in parameter name at {position} in '{pattern}'")]
    InvalidParameterName {
        pattern: String,
        position: usize,
        found: char,
    },

    #[error("optional groups cannot be nested (at {position} in '{pattern}')")]
    NestedOptional { pattern: String, position: usize },

    #[error("parameter '{name}' appears more than once in '{pattern}'")]
    DuplicateParameter { pattern: String, name: String },

    #[error("pattern '{pattern}' produced an invalid matcher: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub mod error_codes {
    pub const ROUTE_ALREADY_EXISTS: &str = "ROUTER_ROUTE_ALREADY_EXISTS";
    pub const HANDLER_NOT_CONFIGURED: &str = "ROUTER_HANDLER_NOT_CONFIGURED";
    pub const MALFORMED_PATTERN: &str = "ROUTER_MALFORMED_PATTERN";
}
