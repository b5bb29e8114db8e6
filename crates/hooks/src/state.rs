//! Fetch state and hook configuration

use fetchkit_client::{ApiError, QueryParams};
use std::sync::Arc;

/// Tracked state for a single endpoint fetch.
///
/// Exactly one of `data` and `error` is populated once a fetch settles;
/// both are `None` while the first fetch is still in flight. A refetch
/// clears `error` immediately but leaves `data` from the previous
/// successful fetch in place until the new fetch settles.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    /// Parsed response of the most recent successful fetch
    pub data: Option<T>,
    /// Whether a fetch is currently in flight
    pub is_loading: bool,
    /// Failure of the most recent fetch, shared so snapshots stay cheap
    pub error: Option<Arc<ApiError>>,
}

impl<T> FetchState<T> {
    /// State before any fetch has settled.
    ///
    /// `is_loading` starts as the `immediate` flag: a hook that fetches
    /// on mount is born loading.
    #[must_use]
    pub fn initial(immediate: bool) -> Self {
        Self {
            data: None,
            is_loading: immediate,
            error: None,
        }
    }

    /// Whether the most recent fetch has settled (success or error)
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_loading && (self.data.is_some() || self.error.is_some())
    }
}

/// Configuration for a [`UseFetch`](crate::UseFetch) hook
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Fetch automatically once on first mount (default `true`)
    pub immediate: bool,
    /// Query parameters forwarded verbatim to the request client
    pub params: QueryParams,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            immediate: true,
            params: QueryParams::new(),
        }
    }
}

impl FetchOptions {
    /// Options that fetch on mount
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that stay idle until `refetch` is called
    #[must_use]
    pub fn manual() -> Self {
        Self {
            immediate: false,
            ..Self::default()
        }
    }

    /// Builder-style method to set the query parameters
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }
}
