//! Simulated transport
//!
//! Adapts the [`Simulator`] to the SDK's transport contract so the client
//! cannot tell the simulation apart from the live backend.

use std::sync::Arc;

use async_trait::async_trait;
use restcheck::http::{ApiRequest, ApiResponse, ApiTransport};
use restcheck::{Error, Result};

use crate::simulator::Simulator;

/// Transport that answers requests from the in-process simulator.
///
/// Clone the `Arc` and keep one handle in the harness so [`reset`] can run
/// in the per-test setup hook.
///
/// [`reset`]: SimulatedTransport::reset
pub struct SimulatedTransport {
    simulator: Arc<Simulator>,
}

impl SimulatedTransport {
    /// Create a transport with a fresh simulator session.
    pub fn new() -> Self {
        Self {
            simulator: Arc::new(Simulator::new()),
        }
    }

    /// Clear deletion state; the harness calls this before every test case.
    pub fn reset(&self) {
        self.simulator.reset();
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SimulatedTransport {
    fn clone(&self) -> Self {
        Self {
            simulator: Arc::clone(&self.simulator),
        }
    }
}

#[async_trait]
impl ApiTransport for SimulatedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self
            .simulator
            .handle(&request.method, &request.path, request.body.as_ref())
            .map_err(|e| Error::Simulation(e.to_string()))?;

        let body = match response.body {
            Some(value) => serde_json::to_vec(&value)?,
            None => Vec::new(),
        };
        Ok(ApiResponse::new(response.status, body))
    }

    fn transport_name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[tokio::test]
    async fn test_execute_round_trip() {
        let transport = SimulatedTransport::new();
        let response = transport
            .execute(ApiRequest::new(Method::GET, "/users/5"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], 5);
    }

    #[tokio::test]
    async fn test_unhandled_route_is_fatal() {
        let transport = SimulatedTransport::new();
        let err = transport
            .execute(ApiRequest::new(Method::GET, "/comments"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Simulation(_)));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let transport = SimulatedTransport::new();
        let clone = transport.clone();

        transport
            .execute(ApiRequest::new(Method::DELETE, "/users/5"))
            .await
            .unwrap();

        let response = clone
            .execute(ApiRequest::new(Method::GET, "/users/5"))
            .await
            .unwrap();
        assert_eq!(response.status, 404);

        clone.reset();
        let response = transport
            .execute(ApiRequest::new(Method::GET, "/users/5"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }
}
