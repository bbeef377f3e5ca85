// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP(S) with reqwest.
//
// Key functionality:
// - One shared Client (connection pooling across the whole crawl)
// - Configurable User-Agent and per-request timeout
// - Any non-2xx status is a failure, the body is not read in that case
//
// Redirects are left to reqwest's default policy; cookies and sessions are
// not kept between requests.
// =============================================================================

use super::Fetcher;
use crate::error::{CrawlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher
    //
    // Parameters:
    //   user_agent: sent as the User-Agent header on every request
    //   timeout: upper bound for one whole request (connect + body)
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new("breadth-crawler-test", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "breadth-crawler-test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html><body>hello</body></html>"),
            )
            .mount(&mock_server)
            .await;

        let body = fetcher()
            .fetch(&format!("{}/page", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html><body>hello</body></html>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/missing", mock_server.uri());
        let err = fetcher().fetch(&url).await.unwrap_err();
        match err {
            CrawlError::Status { url: failed, status } => {
                assert_eq!(failed, url);
                assert_eq!(status, 404);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_transport_error() {
        let err = fetcher().fetch("ftp://x.test/f").await.unwrap_err();
        assert!(matches!(err, CrawlError::Http(_)));
        assert_eq!(err.kind(), crate::error::FailureKind::Transport);
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Port 9 (discard) is essentially never listening locally
        let err = fetcher().fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, CrawlError::Http(_)));
        assert_eq!(err.kind(), crate::error::FailureKind::Transport);
    }
}
