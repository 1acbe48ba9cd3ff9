use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::info;

/// One country's row exactly as the backend sends it. `total` is trusted, not recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MedalEntry {
    pub country: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("server responded with {0}")]
    Server(StatusCode),
    #[error("could not parse medal data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything able to produce the current medal table.
pub trait MedalSource {
    fn fetch_medals(&self) -> impl Future<Output = Result<Vec<MedalEntry>, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpMedalSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMedalSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl MedalSource for HttpMedalSource {
    fn fetch_medals(&self) -> impl Future<Output = Result<Vec<MedalEntry>, FetchError>> + Send {
        get_medal_table(&self.client, &self.url)
    }
}

#[tracing::instrument(level = "trace", skip(client))]
pub(crate) async fn get_medal_table(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<MedalEntry>, FetchError> {
    info!(url, "Fetching medal table");
    let response = client.get(url).send().await.map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Server(status));
    }

    let body = response.text().await.map_err(FetchError::Network)?;
    let entries = serde_json::from_str::<Vec<MedalEntry>>(&body)?;
    info!(Count = entries.len(), "Fetched medal table");

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves a single canned HTTP response and returns the URL to hit.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/api/medals", addr)
    }

    fn source(url: impl Into<String>) -> HttpMedalSource {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpMedalSource::with_client(client, url)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once(
            "200 OK",
            r#"[{"country":"Norway","gold":5,"silver":3,"bronze":2,"total":10},
                {"country":"Italy","gold":2,"silver":4,"bronze":1,"total":7}]"#,
        )
        .await;

        let entries = source(url).fetch_medals().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            MedalEntry {
                country: "Norway".to_string(),
                gold: 5,
                silver: 3,
                bronze: 2,
                total: 10,
            }
        );
        assert_eq!(entries[1].country, "Italy");
    }

    #[tokio::test]
    async fn test_fetch_keeps_backend_total() {
        let url = serve_once(
            "200 OK",
            r#"[{"country":"Japan","gold":1,"silver":1,"bronze":1,"total":9}]"#,
        )
        .await;

        let entries = source(url).fetch_medals().await.unwrap();
        assert_eq!(entries[0].total, 9);
    }

    #[tokio::test]
    async fn test_fetch_empty_array() {
        let url = serve_once("200 OK", "[]").await;

        let entries = source(url).fetch_medals().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let url = serve_once("500 Internal Server Error", "oops").await;

        let err = source(url).fetch_medals().await.unwrap_err();
        assert!(matches!(err, FetchError::Server(status) if status == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve_once("200 OK", r#"{"country":"Norway"}"#).await;

        let err = source(url).fetch_medals().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(format!("http://{}/api/medals", addr))
            .fetch_medals()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
