//! Reachability probe
//!
//! Decides whether the real backend can be used for this run. CI egress is
//! sometimes blocked by a Cloudflare interstitial, which answers probes with
//! an HTML challenge page instead of JSON; that counts as unreachable.

use secrecy::ExposeSecret;
use std::time::Duration;

use crate::config::ClientConfig;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Probe the backend with `GET {base}/posts` and report whether it answered
/// like a real API.
///
/// Returns `false` when the configuration forces the simulator, when the
/// request fails outright, or when the response looks like a block page.
pub async fn backend_reachable(config: &ClientConfig) -> bool {
    if config.force_simulator {
        return false;
    }

    let client = match reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(_) => return false,
    };

    let url = format!("{}/posts", config.base_url.trim_end_matches('/'));
    let mut req = client.get(&url);
    if let Some(token) = &config.token {
        req = req.header("Authorization", format!("Bearer {}", token.expose_secret()));
    }

    match req.send().await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            if is_block_page(&body) {
                tracing::warn!(url = %url, "backend blocked by interstitial, probe failed");
                return false;
            }
            // 401 still proves the API itself answered
            status < 500
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "backend unreachable");
            false
        }
    }
}

fn is_block_page(body: &str) -> bool {
    body.contains("Just a moment") || body.to_lowercase().contains("cloudflare")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_page_detection() {
        assert!(is_block_page("<title>Just a moment...</title>"));
        assert!(is_block_page("Checking your browser - Cloudflare"));
        assert!(!is_block_page(r#"[{"id": 1}]"#));
    }

    #[tokio::test]
    async fn test_force_simulator_skips_probe() {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:1")
            .force_simulator(true)
            .build();
        assert!(!backend_reachable(&config).await);
    }
}
