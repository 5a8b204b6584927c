use tracing::{debug, warn};
use url::Url;

use crate::data::FetchOptions;
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Fetches a text document with one bounded GET request.
#[derive(Debug, Clone)]
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a new fetcher with the provided HTTP client and options.
    pub fn new(client: C, options: FetchOptions) -> Self {
        Self { client, options }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetch `url` and return its body if the response is 2xx.
    ///
    /// No retries are attempted. The request is abandoned once
    /// [`FetchOptions::timeout`] elapses.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `url` does not parse
    /// - [`FetchError::Timeout`] if the deadline passes first
    /// - [`FetchError::Network`] on connection or protocol failures
    /// - [`FetchError::Status`] for any non-2xx response, carrying its body
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let timeout = self.options.timeout;
        debug!(url = %parsed, ?timeout, "sending GET request");

        let response = tokio::time::timeout(timeout, self.client.get(parsed.as_str(), &self.options))
            .await
            .map_err(|_| FetchError::Timeout {
                url: url.to_string(),
                after: timeout,
            })
            .and_then(|result| result)
            .inspect_err(|e| warn!(url = %parsed, error = %e, "request failed"))?;

        debug!(
            status = response.status,
            bytes = response.body.len(),
            "response received"
        );

        if !response.is_success() {
            warn!(url = %parsed, status = response.status, "server returned non 2xx status");
            return Err(FetchError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}
