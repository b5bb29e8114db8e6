//! Typed HTTP client for JSON APIs
//!
//! This crate provides a small, predictable request client: endpoints
//! are resolved against a configured base URL, query parameters keep
//! insertion order and skip absent values, and every response goes
//! through one fixed contract (non-2xx → [`ApiError::Status`], JSON
//! success → parsed value, non-JSON success → empty object).
//!
//! # Features
//!
//! - **Environment-based configuration**: base URL and timeout from
//!   environment variables
//! - **Injected credentials**: bearer tokens come from a
//!   [`TokenProvider`], never from ambient global state
//! - **Typed errors**: HTTP failures carry status, reason phrase, and
//!   body text; transport failures stay distinct
//! - **Request correlation**: unique IDs on every request for tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use fetchkit_client::{ApiClient, ClientConfig, QueryParams, RequestOptions};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Post {
//!     id: u64,
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default().with_base_url("https://api.example.com");
//!     let client = ApiClient::with_config(config)?;
//!
//!     let options = RequestOptions::new()
//!         .with_params(QueryParams::new().with("page", 1).with_opt("tag", None::<&str>));
//!     let posts: Vec<Post> = client.get_with("/posts", options).await?;
//!     println!("got {} posts", posts.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod query;

pub use auth::{EnvToken, StaticToken, TokenProvider, AUTH_TOKEN_ENV};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use options::RequestOptions;
pub use query::{QueryParams, QueryValue};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::auth::{EnvToken, StaticToken, TokenProvider};
    pub use crate::client::ApiClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::options::RequestOptions;
    pub use crate::query::{QueryParams, QueryValue};
}
