use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::KeepAliveConfig;

/// Spawn the self-ping loop if it is enabled and has a target URL.
///
/// The task shares nothing with request handling and runs for the life
/// of the process.
pub fn spawn(config: &KeepAliveConfig) -> Option<JoinHandle<()>> {
    if !config.enabled {
        return None;
    }

    let Some(url) = config.url.clone() else {
        warn!("Keep-alive enabled but no url configured, not starting");
        return None;
    };

    let interval = Duration::from_secs(config.interval_seconds.max(1));
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .unwrap_or_else(|_| Client::new());

    info!("Keep-alive pinging {} every {:?}", url, interval);

    Some(tokio::spawn(async move {
        loop {
            ping(&client, &url).await;
            tokio::time::sleep(interval).await;
        }
    }))
}

async fn ping(client: &Client, url: &str) -> Option<u16> {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            info!("Self-ping status: {}", status);
            Some(status)
        }
        Err(e) => {
            warn!("Self-ping error: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(enabled: bool, url: Option<String>) -> KeepAliveConfig {
        KeepAliveConfig {
            enabled,
            url,
            interval_seconds: 3600,
            timeout_seconds: 2,
        }
    }

    #[tokio::test]
    async fn test_disabled_or_missing_url_does_not_spawn() {
        assert!(spawn(&config(false, Some("http://localhost".into()))).is_none());
        assert!(spawn(&config(true, None)).is_none());
    }

    #[tokio::test]
    async fn test_ping_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = Client::new();
        assert_eq!(ping(&client, &format!("{}/", server.uri())).await, Some(204));
    }

    #[tokio::test]
    async fn test_ping_swallows_errors() {
        let client = Client::new();
        // Port 9 (discard) is not expected to accept HTTP on the test host
        assert_eq!(ping(&client, "http://127.0.0.1:9/").await, None);
    }

    #[tokio::test]
    async fn test_spawned_loop_pings_immediately() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1..)
            .mount(&server)
            .await;

        let handle = spawn(&config(true, Some(server.uri()))).unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        handle.abort();
    }
}
