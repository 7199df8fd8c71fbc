//! Configuration for the restcheck client

use secrecy::SecretString;
use std::time::Duration;

/// Default base URL for the GoRest public API (v2).
pub const DEFAULT_BASE_URL: &str = "https://gorest.co.in/public/v2";

/// How the access token is attached to outgoing requests.
///
/// The backend accepts both forms; the conformance suite exercises each one
/// to verify they behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// `Authorization: Bearer <token>` header.
    #[default]
    BearerToken,
    /// `access_token=<token>` query parameter.
    QueryParam,
}

/// Configuration for the restcheck client.
///
/// Holds everything needed to talk to the backend: where it lives, how to
/// authenticate, and how patient to be.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,

    /// Access token for authentication (optional; unauthenticated GETs are
    /// permitted by the backend)
    pub token: Option<SecretString>,

    /// How the token is attached to requests
    pub auth_method: AuthMethod,

    /// Default timeout for requests
    pub timeout: Duration,

    /// Skip the reachability probe and always use the simulated transport
    pub force_simulator: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            auth_method: AuthMethod::default(),
            timeout: Duration::from_secs(30),
            force_simulator: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an access token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(SecretString::new(token.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `RESTCHECK_BASE_URL` for the API base URL
    /// - `RESTCHECK_TOKEN` for the access token
    /// - `RESTCHECK_TIMEOUT` for request timeout (in seconds)
    /// - `RESTCHECK_FORCE_SIMULATOR` to skip the reachability probe
    ///
    /// A `.env` file is honored if present.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        // Best effort; a missing .env file is not an error
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_url) = env::var("RESTCHECK_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(token) = env::var("RESTCHECK_TOKEN") {
            if !token.is_empty() {
                config.token = Some(SecretString::new(token.into_boxed_str()));
            }
        }

        if let Ok(timeout_str) = env::var("RESTCHECK_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                config.timeout = Duration::from_secs(timeout_secs);
            }
        }

        if let Ok(force) = env::var("RESTCHECK_FORCE_SIMULATOR") {
            config.force_simulator = matches!(force.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}

/// Builder for creating `ClientConfig` with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the access token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(SecretString::new(token.into().into_boxed_str()));
        self
    }

    /// Set the authentication method.
    pub fn auth_method(mut self, auth_method: AuthMethod) -> Self {
        self.config.auth_method = auth_method;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Always use the simulated transport, skipping the reachability probe.
    pub fn force_simulator(mut self, force: bool) -> Self {
        self.config.force_simulator = force;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}
