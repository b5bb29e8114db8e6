//! Observable fetch state over the fetchkit request client
//!
//! A [`UseFetch`] hook binds one endpoint (plus query parameters) to a
//! `{data, is_loading, error}` state cell, with an automatic
//! fetch-on-mount guarded by a one-shot latch and a manual `refetch`
//! operation. Consumers observe transitions through a tokio `watch`
//! channel instead of wiring their own subscribe/unsubscribe plumbing.
//!
//! # Example
//!
//! ```rust,no_run
//! use fetchkit_client::{ApiClient, ClientConfig};
//! use fetchkit_hooks::{FetchOptions, UseFetch};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default().with_base_url("https://api.example.com");
//!     let client = ApiClient::with_config(config)?;
//!
//!     let posts = UseFetch::<Value>::new(client, "/posts", FetchOptions::new());
//!     let mut updates = posts.subscribe();
//!     posts.mount();
//!
//!     while updates.changed().await.is_ok() {
//!         let state = updates.borrow().clone();
//!         if state.is_settled() {
//!             println!("settled: data={:?} error={:?}", state.data, state.error);
//!             break;
//!         }
//!     }
//!
//!     posts.unmount();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
pub mod state;

pub use fetch::UseFetch;
pub use state::{FetchOptions, FetchState};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::fetch::UseFetch;
    pub use crate::state::{FetchOptions, FetchState};
}
