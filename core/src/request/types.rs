use crate::request::parser::{normalize_path, parse_query_string};
use std::collections::HashMap;

/// The two pieces of a live request the router reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Method name as sent by the client, e.g. `"GET"`.
    pub method: String,
    /// Request URI as sent: percent-encoded, possibly with a query string.
    pub raw_path: String,
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>, raw_path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            raw_path: raw_path.into(),
        }
    }

    pub fn get(raw_path: impl Into<String>) -> Self {
        Self::new("GET", raw_path)
    }

    pub fn post(raw_path: impl Into<String>) -> Self {
        Self::new("POST", raw_path)
    }

    /// The path routes are matched against.
    pub fn normalized_path(&self, base_path: Option<&str>) -> String {
        normalize_path(&self.raw_path, base_path)
    }

    /// Raw query component, if the URI has one.
    pub fn query(&self) -> Option<&str> {
        self.raw_path.split_once('?').map(|(_, query)| query)
    }

    pub fn query_params(&self) -> HashMap<String, String> {
        self.query().map(parse_query_string).unwrap_or_default()
    }

    /// `"METHOD /path"` for callers that dispatch on their own.
    pub fn route_line(&self, base_path: Option<&str>) -> String {
        format!("{} {}", self.method, self.normalized_path(base_path))
    }
}
