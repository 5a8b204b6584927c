use std::future::Future;

use crate::data::{FetchOptions, HttpResponse};
use crate::error::Result;

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed for a single GET.
/// Implementations handle their own redirect following and map their
/// failures onto [`FetchError`](crate::FetchError): a request that runs
/// out of time becomes `Timeout`, anything else at the transport level
/// becomes `Network`. A response with any status code is a success at
/// this level.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and read the whole body as text.
    fn get(
        &self,
        url: &str,
        options: &FetchOptions,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::error::FetchError;

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self> {
            Self::with_options(&FetchOptions::default())
        }

        /// Create a client whose connection settings follow `options`.
        pub fn with_options(options: &FetchOptions) -> Result<Self> {
            let client = reqwest::Client::builder()
                .connect_timeout(options.connect_timeout)
                .timeout(options.timeout)
                .user_agent(options.user_agent.clone())
                .build()
                .map_err(|e| FetchError::Client(Box::new(e)))?;
            Ok(Self { client })
        }

        fn map_error(url: &str, options: &FetchOptions, e: reqwest::Error) -> FetchError {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    after: options.timeout,
                }
            } else {
                FetchError::Network {
                    url: url.to_string(),
                    source: Box::new(e),
                }
            }
        }
    }

    impl HttpClient for ReqwestClient {
        async fn get(&self, url: &str, options: &FetchOptions) -> Result<HttpResponse> {
            let mut request = self.client.get(url).timeout(options.timeout);

            for (key, value) in options.headers.iter() {
                request = request.header(key, value);
            }

            let response = request
                .send()
                .await
                .map_err(|e| Self::map_error(url, options, e))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| Self::map_error(url, options, e))?;

            Ok(HttpResponse { status, body })
        }
    }

}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
