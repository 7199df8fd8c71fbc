//! Live transport over reqwest

use async_trait::async_trait;
use secrecy::ExposeSecret;
use url::Url;

use crate::{
    config::{AuthMethod, ClientConfig},
    error::{Error, Result},
    http::{ApiRequest, ApiResponse, ApiTransport},
};

/// Transport that sends requests to the real backend.
///
/// Applies the configured authentication method to every request and returns
/// raw status/body pairs without interpreting them; status mapping happens in
/// the client layer.
#[derive(Debug)]
pub struct LiveTransport {
    http_client: reqwest::Client,
    base_url: Url,
    token: Option<secrecy::SecretString>,
    auth_method: AuthMethod,
}

impl LiveTransport {
    /// Create a live transport from a client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            token: config.token.clone(),
            auth_method: config.auth_method,
        })
    }

    fn build_url(&self, request: &ApiRequest) -> Result<Url> {
        let joined = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.path
        );
        let mut url =
            Url::parse(&joined).map_err(|e| Error::InvalidUrl(format!("{}: {}", joined, e)))?;

        let token_in_query = self.auth_method == AuthMethod::QueryParam && self.token.is_some();
        if !request.query.is_empty() || token_in_query {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
            if token_in_query {
                if let Some(token) = &self.token {
                    pairs.append_pair("access_token", token.expose_secret());
                }
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl ApiTransport for LiveTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.build_url(&request)?;

        tracing::debug!(method = %request.method, url = %url, "sending live request");

        let mut req = self.http_client.request(request.method.clone(), url);

        if let Some(token) = &self.token {
            if self.auth_method == AuthMethod::BearerToken {
                req = req.header("Authorization", format!("Bearer {}", token.expose_secret()));
            }
        }

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        match req.send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let body = resp
                    .bytes()
                    .await
                    .map_err(|e| Error::Connection(e.to_string()))?
                    .to_vec();
                Ok(ApiResponse::new(status, body))
            }
            Err(e) if e.is_timeout() => Err(Error::Timeout(e.to_string())),
            Err(e) => Err(Error::Connection(e.to_string())),
        }
    }

    fn transport_name(&self) -> &'static str {
        "live"
    }
}
