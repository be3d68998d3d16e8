//! # HTTP Retrieval Utilities
//!
//! This module provides an asynchronous API client wrapper around `reqwest`
//! with standardized JSON response handling. Failures are classified into a
//! small closed taxonomy so callers can decide policy at the boundary.

use reqwest::header::HeaderMap;
use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Closed taxonomy of pipeline fetch failures.
///
/// Exactly one variant surfaces per failed invocation; callers are expected
/// to log it once and stop. No retry policy is attached to any variant.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response: DNS failure, refused
    /// connection, reset, or an error while reading the body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was received but could not be decoded as the
    /// expected JSON shape.
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),

    /// The relative path could not be joined onto the base URL.
    #[error("invalid request path: {0}")]
    Path(#[from] url::ParseError),

    /// The endpoint answered with a non-success HTTP status.
    #[error("endpoint returned HTTP {status} for {path}")]
    Endpoint {
        /// The numeric HTTP status code returned by the server.
        status: u16,
        /// The request path that produced the status.
        path: String,
    },
}

/// A standardized container for API responses.
///
/// This struct wraps the decoded data along with metadata about the
/// HTTP transaction, such as status codes and headers.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The successfully decoded response body, if any.
    pub data: Option<T>,
    /// The raw error body returned by the server if the request failed.
    pub error_body: Option<String>,
    /// The numeric HTTP status code.
    pub status: u16,
    /// Indicates if the status code was in the 2xx range.
    pub success: bool,
    /// The headers returned by the server.
    pub headers: HeaderMap,
}

/// A generic asynchronous HTTP client for JSON endpoints.
///
/// Handles base URLs, request dispatch, and decoding of response bodies.
/// Non-2xx statuses are reported non-throwingly through `ApiResponse` so the
/// caller decides whether they are fatal. No timeout is configured and no
/// cancellation is offered; a request waits on the transport's own defaults.
pub struct ApiClient {
    /// The underlying reqwest client.
    inner: reqwest::Client,
    /// The base URL to which all relative paths are joined.
    base_url: Url,
}

impl ApiClient {
    /// Creates a new `ApiClient` instance.
    ///
    /// # Arguments
    /// * `base_url` - The absolute base URL for the API (e.g., "https://api.example.com/v1/").
    ///
    /// # Panics
    /// Panics if the `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Self {
        // Parse the base URL to ensure it is valid and absolute
        let url = Url::parse(base_url).expect("Invalid Base URL (must be absolute)");

        Self {
            inner: reqwest::Client::new(),
            base_url: url,
        }
    }

    /// Performs an HTTP GET and decodes the response body as JSON.
    ///
    /// The calling task is suspended twice: once awaiting the server's
    /// response, and once awaiting the response body. The body is read as
    /// text first and decoded with `serde_json` so that transport failures
    /// and decode failures surface as distinct `FetchError` variants.
    ///
    /// # Arguments
    /// * `path` - The relative path to append to the base URL.
    /// * `headers` - Optional additional headers for this specific request.
    ///
    /// # Errors
    /// `FetchError::Path` if the path cannot be joined, `FetchError::Transport`
    /// if the request or body read fails, `FetchError::Decode` if a 2xx body
    /// is not valid JSON of the expected shape. A non-2xx status is NOT an
    /// error here; it is reported through `ApiResponse::success`.
    pub async fn get<T>(
        &self,
        path: &str,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        // 1. Construct the full absolute URL
        let full_url = self.base_url.join(path)?;
        let mut req = self.inner.get(full_url);

        // 2. Add custom headers if provided
        if let Some(h) = headers {
            req = req.headers(h);
        }

        // 3. Execute the request and capture response metadata
        let response: reqwest::Response = req.send().await?;
        let status = response.status();
        let resp_headers = response.headers().clone();
        let success = status.is_success();

        // 4. Handle the result based on success status
        if success {
            // Read the body, then decode it into the target type T
            let body = response.text().await?;
            let data = serde_json::from_str::<T>(&body)?;
            Ok(ApiResponse {
                data: Some(data),
                error_body: None,
                status: status.as_u16(),
                success: true,
                headers: resp_headers,
            })
        } else {
            // Capture the error body as a string for debugging
            let error_text = response.text().await.ok();
            Ok(ApiResponse {
                data: None,
                error_body: error_text,
                status: status.as_u16(),
                success: false,
                headers: resp_headers,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one connection with a canned HTTP/1.1 response, then exits.
    async fn one_shot_server(listener: TcpListener, status_line: &str, body: &str) {
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        if let Ok((mut stream, _)) = listener.accept().await {
            // Drain the request head before answering.
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    }

    async fn bind_local() -> (TcpListener, String) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        (listener, format!("http://{}/", addr))
    }

    #[test]
    #[should_panic(expected = "Invalid Base URL")]
    fn relative_base_url_panics() {
        let _ = ApiClient::new("users/");
    }

    #[tokio::test]
    async fn refused_connection_surfaces_transport_error() {
        // Bind then drop to obtain a port with nothing listening on it.
        let (listener, base_url) = bind_local().await;
        drop(listener);

        let client = ApiClient::new(&base_url);
        let result = client.get::<Value>("users", None).await;

        match result {
            Err(FetchError::Transport(_)) => {}
            other => panic!("expected transport failure, got {:?}", other.map(|r| r.status)),
        }
    }

    #[tokio::test]
    async fn malformed_body_surfaces_decode_error() {
        let (listener, base_url) = bind_local().await;
        let server = tokio::spawn(async move {
            one_shot_server(listener, "HTTP/1.1 200 OK", "this is not json").await;
        });

        let client = ApiClient::new(&base_url);
        let result = client.get::<Value>("users", None).await;

        match result {
            Err(FetchError::Decode(_)) => {}
            other => panic!("expected decode failure, got {:?}", other.map(|r| r.status)),
        }
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn non_success_status_is_reported_not_thrown() {
        let (listener, base_url) = bind_local().await;
        let server = tokio::spawn(async move {
            one_shot_server(listener, "HTTP/1.1 404 Not Found", "{\"error\":\"missing\"}").await;
        });

        let client = ApiClient::new(&base_url);
        let res = client
            .get::<Value>("nope", None)
            .await
            .expect("status errors are non-throwing");

        assert!(!res.success);
        assert_eq!(res.status, 404);
        assert!(res.data.is_none());
        assert_eq!(res.error_body.as_deref(), Some("{\"error\":\"missing\"}"));
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn success_body_decodes_into_target_type() {
        let (listener, base_url) = bind_local().await;
        let server = tokio::spawn(async move {
            one_shot_server(listener, "HTTP/1.1 200 OK", "[{\"name\":\"Leanne Graham\"}]").await;
        });

        let client = ApiClient::new(&base_url);
        let res = client.get::<Value>("users", None).await.expect("request");

        assert!(res.success);
        assert_eq!(res.status, 200);
        let data = res.data.expect("decoded body");
        assert_eq!(data[0]["name"], "Leanne Graham");
        server.await.expect("server task");
    }
}
