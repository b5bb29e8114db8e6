//! Per-request options
//!
//! One explicit struct instead of an open-ended options bag: every
//! recognized knob is a named field with a documented default.

use crate::query::{QueryParams, QueryValue};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Options applied to a single request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query-string parameters, appended in insertion order
    pub params: QueryParams,
    /// Extra headers, merged over the client defaults (and able to
    /// override them)
    pub headers: HeaderMap,
    /// Per-request timeout override; `None` uses the client timeout
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to set the query parameters
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Builder-style method to append a single query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.push(key, value);
        self
    }

    /// Builder-style method to set a header
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Builder-style method to set a per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
