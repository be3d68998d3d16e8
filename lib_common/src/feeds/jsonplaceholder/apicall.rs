use crate::loggers::loggerlocal::LoggerLocal;
use crate::retrieve::api_http::{ApiClient, FetchError};
use serde_json::Value;
use std::sync::Arc;

/// Production base URL for the JSONPlaceholder test API.
const BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

/// A specialized client for making requests to the JSONPlaceholder API.
///
/// It encapsulates an `ApiClient` instance, which handles the low-level HTTP
/// communication, and a shared `LoggerLocal` for structured logging.
pub struct ApiCallPlaceholder {
    /// The underlying generic HTTP client, pre-configured for the API base URL.
    client: ApiClient,
    /// A shared logger for recording the outcomes of API calls.
    logger: Arc<LoggerLocal>,
}

impl ApiCallPlaceholder {
    /// Initializes a new client against the production JSONPlaceholder base URL.
    pub fn new(logger: Arc<LoggerLocal>) -> Self {
        Self::with_base_url(BASE_URL, logger)
    }

    /// Initializes a new client against an alternative base URL.
    ///
    /// Used to point the pipeline at a stand-in server during testing, or at
    /// a mirror of the fixture data.
    ///
    /// # Panics
    /// Panics if `base_url` is not a valid absolute URL.
    pub fn with_base_url(base_url: &str, logger: Arc<LoggerLocal>) -> Self {
        Self {
            client: ApiClient::new(base_url),
            logger,
        }
    }

    /// Performs a single GET request against the API and returns the raw JSON payload.
    ///
    /// No custom headers, query parameters, or request body are set, and no
    /// retries are attempted: a failure surfaces once and stops the pipeline.
    ///
    /// # Errors
    /// `FetchError::Transport` or `FetchError::Decode` as classified by the
    /// underlying client; a non-2xx status is logged and mapped to
    /// `FetchError::Endpoint`.
    pub async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        // We use Value as the generic so callers can inspect the raw JSON structure.
        let response = self.client.get::<Value>(path, None).await?;

        if response.success {
            if let Some(body) = response.data {
                self.logger
                    .debug(
                        &format!("GET {} succeeded with status {}", path, response.status),
                        None,
                    )
                    .await;
                return Ok(body);
            }
        }

        // HTTP level error (e.g., 403, 404, 500)
        let http_error = format!("HTTP Request failed for {}: Status {}", path, response.status);
        self.logger
            .error(
                &http_error,
                Some(serde_json::json!({
                    "status": response.status,
                    "path": path,
                    "body": response.error_body,
                })),
            )
            .await;

        Err(FetchError::Endpoint {
            status: response.status,
            path: path.to_string(),
        })
    }
}
