//! Harness helpers for the restcheck conformance suite
//!
//! Wires the reachability probe to the two transports and owns the per-test
//! reset hook the simulator needs.

use std::sync::Arc;

use restcheck::http::{backend_reachable, ApiTransport, LiveTransport};
use restcheck::{Client, ClientConfig, Result};
use restcheck_simulator::SimulatedTransport;

/// Pick a transport for this run: live when the backend answers the probe,
/// simulated otherwise.
///
/// # Errors
///
/// Returns an error if the live transport cannot be constructed from the
/// configuration.
pub async fn select_transport(config: &ClientConfig) -> Result<Arc<dyn ApiTransport>> {
    if backend_reachable(config).await {
        Ok(Arc::new(LiveTransport::new(config)?))
    } else {
        Ok(Arc::new(SimulatedTransport::new()))
    }
}

/// One test case's world: a client plus the reset handle for its simulated
/// session.
pub struct TestHarness {
    /// Client wired to the simulated transport
    pub client: Client,
    transport: SimulatedTransport,
}

impl TestHarness {
    /// Create a harness over a fresh simulated session.
    pub fn simulated() -> Self {
        let transport = SimulatedTransport::new();
        let client = Client::from_transport(Arc::new(transport.clone()));
        Self { client, transport }
    }

    /// Per-test setup hook: clear all deletion state.
    pub fn reset(&self) {
        self.transport.reset();
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::simulated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_harness_uses_simulated_transport() {
        let harness = TestHarness::simulated();
        assert_eq!(harness.client.transport_name(), "simulated");
    }

    #[tokio::test]
    async fn test_forced_simulator_selection() {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:1")
            .force_simulator(true)
            .build();

        let transport = select_transport(&config).await.unwrap();
        assert_eq!(transport.transport_name(), "simulated");
    }
}
