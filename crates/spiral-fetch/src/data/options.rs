use std::sync::Arc;
use std::time::Duration;

/// Default deadline for a whole request, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default deadline for establishing the connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a fetch.
///
/// # Examples
///
/// ```
/// use spiral_fetch::FetchOptions;
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .timeout(Duration::from_secs(5))
///     .header("Accept", "text/plain");
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Deadline for the whole request, from sending to the last body byte.
    ///
    /// The [`Fetcher`](crate::Fetcher) enforces it on top of whatever the
    /// client does, so a client that hangs still fails in time.
    ///
    /// Default: 30s
    pub timeout: Duration,

    /// Deadline for establishing the connection.
    ///
    /// Only honored by clients that distinguish connecting from waiting.
    ///
    /// Default: 10s
    pub connect_timeout: Duration,

    /// Custom HTTP headers to include with the request.
    ///
    /// Default: empty
    pub headers: Arc<[(String, String)]>,

    /// Value of the `User-Agent` header.
    ///
    /// Default: `spiral/<crate version>`
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            headers: Arc::new([]),
            user_agent: concat!("spiral/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchOptions {
    /// Set the overall request deadline.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection deadline.
    #[must_use]
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Add a single custom HTTP header.
    ///
    /// # Examples
    ///
    /// ```
    /// use spiral_fetch::FetchOptions;
    ///
    /// let options = FetchOptions::default()
    ///     .header("Accept", "text/plain")
    ///     .header("Cache-Control", "no-cache");
    /// assert_eq!(options.headers.len(), 2);
    /// ```
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// Set multiple custom HTTP headers at once, replacing existing ones.
    #[must_use]
    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = Arc::from(headers);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.connect_timeout, Duration::from_secs(10));
        assert!(options.headers.is_empty());
        assert!(options.user_agent.starts_with("spiral/"));
    }

    #[test]
    fn builder_overrides() {
        let options = FetchOptions::default()
            .timeout(Duration::from_millis(250))
            .connect_timeout(Duration::from_millis(100))
            .user_agent("test/1.0");
        assert_eq!(options.timeout, Duration::from_millis(250));
        assert_eq!(options.connect_timeout, Duration::from_millis(100));
        assert_eq!(options.user_agent, "test/1.0");
    }

    #[test]
    fn headers_replace_and_append() {
        let options = FetchOptions::default()
            .header("A", "1")
            .headers(vec![("B".to_string(), "2".to_string())])
            .header("C", "3");
        let keys: Vec<_> = options.headers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["B", "C"]);
    }
}
