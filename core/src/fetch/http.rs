use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::Html;

use crate::config::ScanConfig;
use crate::error::{FetchError, ScanError};

use super::url::normalize_url;
use super::PageFetcher;

/// reqwest-backed fetcher. The client is built once and shared read-only by
/// every pool unit.
#[derive(Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ScanError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScanError::Client(e.to_string()))?;
        Ok(Self { http })
    }

    pub fn from_config(cfg: &ScanConfig) -> Result<Self, ScanError> {
        Self::new(cfg.timeout(), &cfg.user_agent)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = normalize_url(url);
        let parsed = reqwest::Url::parse(&target).map_err(|e| FetchError::InvalidUrl {
            url: target.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(target: "sitescan.fetch", url = %target, "GET");
        let resp = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &target))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: target,
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &target))?;
        tracing::debug!(
            target: "sitescan.fetch",
            url = %target,
            status = %status,
            bytes = body.len()
        );

        Ok(reconstitute_html(&body))
    }
}

/// Parse the body as an HTML document and serialize it back. Text and
/// attribute values survive intact; markup is normalized.
pub fn reconstitute_html(body: &str) -> String {
    Html::parse_document(body).html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use mockito::{Matcher, Server};

    fn fetcher(timeout_ms: u64) -> HttpFetcher {
        HttpFetcher::new(Duration::from_millis(timeout_ms), "sitescan-test/1.0").unwrap()
    }

    #[test]
    fn test_reconstitute_keeps_text_and_attributes() {
        let html = reconstitute_html("<p class=Promo>Keyword1 inside<p>second");
        assert!(html.contains("Keyword1 inside"));
        assert!(html.contains("Promo"));
        assert!(html.starts_with("<html>"));
    }

    #[tokio::test]
    async fn test_fetch_returns_html() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<html><body><h1>Hello KEYWORD1</h1></body></html>")
            .create_async()
            .await;

        let html = fetcher(2_000).fetch(&server.url()).await.unwrap();
        assert!(html.contains("Hello KEYWORD1"));
    }

    #[tokio::test]
    async fn test_fetch_without_scheme_uses_http() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<p>ok</p>")
            .create_async()
            .await;

        let bare = format!("{}/page", server.url().trim_start_matches("http://"));
        assert!(!bare.starts_with("http"));
        let html = fetcher(2_000).fetch(&bare).await.unwrap();
        assert!(html.contains("ok"));
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/")
            .match_header("user-agent", Matcher::Exact("sitescan-test/1.0".into()))
            .with_status(200)
            .with_body("ua ok")
            .create_async()
            .await;

        fetcher(2_000).fetch(&server.url()).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_is_status_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("keyword1 in an error page")
            .create_async()
            .await;

        let err = fetcher(2_000)
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Status);
        assert_eq!(
            err,
            FetchError::Status {
                url: format!("{}/missing", server.url()),
                status: 404
            }
        );
    }

    #[tokio::test]
    async fn test_other_success_codes_are_errors() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(204)
            .create_async()
            .await;

        let err = fetcher(2_000).fetch(&server.url()).await.unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Status);
    }

    #[tokio::test]
    async fn test_unparseable_url_is_invalid_url() {
        let err = fetcher(2_000).fetch("exa mple.com:99999").await.unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::InvalidUrl);
        assert!(err.to_string().starts_with("invalid url http://exa mple.com:99999"));
    }

    #[tokio::test]
    async fn test_refused_connection_is_reported() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = fetcher(2_000)
            .fetch(&format!("127.0.0.1:{port}"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            FetchErrorKind::Connect | FetchErrorKind::Request
        ));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        // Bound but never accepted: the handshake completes, no response ever comes.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let err = fetcher(200)
            .fetch(&format!("http://{addr}/"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Timeout);
        drop(listener);
    }
}
