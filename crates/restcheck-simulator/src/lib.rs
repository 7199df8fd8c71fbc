//! # restcheck-simulator
//!
//! Offline request-interception layer for the restcheck suite, used when
//! the real backend is unreachable. It replays the backend's observable
//! CRUD semantics (stateful deletion tracking, validation rules, and
//! URL-pattern dispatch) behind the same [`ApiTransport`] contract the
//! live transport implements.
//!
//! Components, leaves first:
//! - [`router::Router`]: specificity-ordered route matching
//! - [`rules`]: per-resource validation
//! - [`state::SessionState`]: deleted-id tracking with per-test reset
//! - [`synth`]: canonical success/error payload synthesis
//! - [`Simulator`] / [`SimulatedTransport`]: composition and the transport
//!   adapter
//!
//! [`ApiTransport`]: restcheck::http::ApiTransport

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use router::{RouteHandler, RouteMatch, Router, SimulatorError};
pub use rules::ValidationOutcome;
pub use simulator::Simulator;
pub use state::SessionState;
pub use synth::{SyntheticResponse, SENTINEL_NOT_FOUND_ID, SYNTHETIC_CREATED_ID};
pub use transport::SimulatedTransport;

pub mod router;
pub mod rules;
pub mod simulator;
pub mod state;
pub mod synth;
pub mod transport;
