//! # restcheck
//!
//! Typed client SDK for a GoRest-style public REST API (users, posts,
//! todos), built for conformance testing:
//! - Bearer-token and query-parameter authentication
//! - A pluggable [`http::ApiTransport`] so the offline simulator and the
//!   live backend share one call contract
//! - A reachability probe for choosing between them at runtime
//! - Random payload generators for positive test data
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restcheck::{Client, ClientConfig, types::CreateUser};
//!
//! #[tokio::main]
//! async fn main() -> restcheck::Result<()> {
//!     let client = Client::from_config(ClientConfig::from_env()?)?;
//!
//!     let user = client.users().create(&CreateUser::random()).await?;
//!     println!("created user {}", user.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::Client;
pub use config::{AuthMethod, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, FieldError, Result};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use serde_json::Value as JsonValue;
