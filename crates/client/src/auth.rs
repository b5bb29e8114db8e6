//! Credential provider boundary
//!
//! The client never reads tokens from ambient global state; whatever
//! owns the session (login/logout flows live elsewhere) injects a
//! [`TokenProvider`] through [`ClientConfig`](crate::ClientConfig).
//! Tokens are read per request, so a provider backed by mutable storage
//! picks up rotation without rebuilding the client.

use std::env;

/// Environment variable read by [`EnvToken`]
pub const AUTH_TOKEN_ENV: &str = "FETCHKIT_AUTH_TOKEN";

/// Source of bearer tokens for the `Authorization` header
pub trait TokenProvider: Send + Sync {
    /// Current bearer token, if a session is active
    fn token(&self) -> Option<String>;
}

/// A fixed token, for service credentials and tests
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a token value
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads `FETCHKIT_AUTH_TOKEN` from the environment on every request
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvToken;

impl TokenProvider for EnvToken {
    fn token(&self) -> Option<String> {
        env::var(AUTH_TOKEN_ENV).ok().filter(|t| !t.is_empty())
    }
}
