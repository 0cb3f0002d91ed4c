use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::retry::retry_with_backoff;
use crate::types::{CatalogRecord, CatalogResponse};

/// HTTP client for the storefront's product-list endpoint.
///
/// The endpoint serves an empty error page to requests without a
/// `Referer` from the shop itself, so every request sends the configured
/// referer. Non-2xx statuses and undecodable bodies surface as typed
/// errors; transient failures (network errors, 5xx) are retried with
/// exponential backoff up to `max_retries` additional attempts.
pub struct CatalogClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout, `User-Agent`,
    /// and retry policy. Set `max_retries` to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the full catalog record list, with automatic retry on
    /// transient errors.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`]: any non-2xx status. 5xx
    ///   statuses are retried before this propagates; 4xx are not.
    /// - [`FetchError::Http`]: network or TLS failure after all retries.
    /// - [`FetchError::Deserialize`]: body is not the expected catalog
    ///   envelope (not retried).
    pub async fn fetch_catalog(
        &self,
        url: &str,
        referer: &str,
    ) -> Result<Vec<CatalogRecord>, FetchError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self
                .client
                .get(url)
                .header(reqwest::header::REFERER, referer)
                .send()
                .await?;
            let status = response.status();

            if !status.is_success() {
                return Err(FetchError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            let body = response.text().await?;
            let parsed = serde_json::from_str::<CatalogResponse>(&body).map_err(|e| {
                FetchError::Deserialize {
                    context: format!("catalog list from {url}"),
                    source: e,
                }
            })?;

            Ok(parsed.data.list)
        })
        .await
    }
}
