//! Main client implementation

use std::sync::Arc;
use std::sync::OnceLock;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::{ApiRequest, ApiResponse, ApiTransport, LiveTransport},
    resources::{Posts, Todos, Users},
};

/// Client for the users/posts/todos API.
///
/// All requests go through a single [`ApiTransport`], so the same client
/// works against the real backend and against the offline simulator.
///
/// # Example
///
/// ```rust,no_run
/// use restcheck::{Client, ClientConfig};
///
/// # async fn example() -> restcheck::Result<()> {
/// let client = Client::from_config(ClientConfig::with_token("token"))?;
/// let users = client.users().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn ApiTransport>,

    // Lazy-initialized resources
    users: OnceLock<Users>,
    posts: OnceLock<Posts>,
    todos: OnceLock<Todos>,
}

impl Client {
    /// Create a client over an explicit transport.
    ///
    /// This is how the test harness injects the simulated transport while
    /// production callers keep the live one; both sides share one call
    /// contract.
    pub fn from_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                users: OnceLock::new(),
                posts: OnceLock::new(),
                todos: OnceLock::new(),
            }),
        }
    }

    /// Create a client over the live transport built from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(LiveTransport::new(&config)?);
        Ok(Self::from_transport(transport))
    }

    /// Access the Users API endpoint.
    pub fn users(&self) -> &Users {
        self.inner.users.get_or_init(|| Users::new(self.clone()))
    }

    /// Access the Posts API endpoint.
    pub fn posts(&self) -> &Posts {
        self.inner.posts.get_or_init(|| Posts::new(self.clone()))
    }

    /// Access the Todos API endpoint.
    pub fn todos(&self) -> &Todos {
        self.inner.todos.get_or_init(|| Todos::new(self.clone()))
    }

    /// Name of the underlying transport, for logging.
    pub fn transport_name(&self) -> &'static str {
        self.inner.transport.transport_name()
    }

    /// Execute a request and map error statuses into typed errors.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.inner.transport.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::from_response(response.status, &response.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct CannedTransport {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl ApiTransport for CannedTransport {
        async fn execute(&self, _request: ApiRequest) -> Result<ApiResponse> {
            Ok(ApiResponse::new(self.status, self.body.as_bytes().to_vec()))
        }

        fn transport_name(&self) -> &'static str {
            "canned"
        }
    }

    #[tokio::test]
    async fn test_execute_maps_error_statuses() {
        let client = Client::from_transport(Arc::new(CannedTransport {
            status: 404,
            body: r#"{"message": "Resource not found"}"#,
        }));

        let err = client.users().get(1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_execute_passes_success_through() {
        let client = Client::from_transport(Arc::new(CannedTransport {
            status: 200,
            body: r#"{"id": 7, "name": "n", "email": "e@x.com", "gender": "male", "status": "active"}"#,
        }));

        let user = client.users().get(7).await.unwrap();
        assert_eq!(user.id, 7);
    }

    #[test]
    fn test_resources_are_lazily_shared() {
        let client = Client::from_transport(Arc::new(CannedTransport {
            status: 200,
            body: "[]",
        }));
        let first = client.users() as *const _;
        let second = client.users() as *const _;
        assert_eq!(first, second);
    }
}
