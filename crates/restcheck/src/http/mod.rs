//! HTTP layer: transport abstraction, live reqwest transport, and the
//! reachability probe that decides between live and simulated backends.

pub use live::LiveTransport;
pub use probe::backend_reachable;
pub use transport::{ApiRequest, ApiResponse, ApiTransport};

mod live;
mod probe;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{Method, StatusCode};
