//! Rate-limited HTTP client for EstrenosGO
//!
//! Fetches pages relative to a configurable base URL. Requests are spaced
//! out by a simple rate limiter; failures are returned to the caller as-is
//! without retrying.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

use reqwest::Url;

use crate::error::{EstrenosError, Result};

/// Base URL of the site
pub const DEFAULT_BASE_URL: &str = "https://estrenosgo.in";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// The site is Spanish-language
const DEFAULT_ACCEPT_LANGUAGE: &str = "es-ES,es;q=0.9,en;q=0.8";

/// Rate limiter to control request frequency
///
/// Ensures that requests are spaced at least `min_interval` apart.
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// # Example
    /// ```
    /// use estrenosgo_core::client::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(2.0);
    /// assert_eq!(limiter.min_interval().as_millis(), 500);
    /// ```
    ///
    /// # Panics
    /// If `1 / requests_per_second` is not a representable `Duration`.
    /// `EstrenosClient::with_config` validates the rate first.
    pub fn new(requests_per_second: f64) -> Self {
        Self::with_interval(Duration::from_secs_f64(1.0 / requests_per_second))
    }

    /// Create a rate limiter from the minimum spacing between requests
    pub fn with_interval(min_interval: Duration) -> Self {
        // The first request never waits
        let last = Instant::now()
            .checked_sub(min_interval)
            .unwrap_or_else(Instant::now);
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(last)),
        }
    }

    /// Wait until the minimum interval since the previous request has passed.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root every path and relative href is resolved against
    pub base_url: String,
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            requests_per_second: 2.0,
            timeout_secs: 30,
        }
    }
}

/// HTTP client for EstrenosGO
pub struct EstrenosClient {
    client: reqwest::Client,
    base_url: Url,
    rate_limiter: RateLimiter,
}

impl EstrenosClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `EstrenosError::InvalidConfig` - `requests_per_second` is not positive
    ///   or too small to express as an interval
    /// - `EstrenosError::InvalidUrl` - `base_url` is not an absolute URL
    /// - `EstrenosError::HttpError` - the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if !(config.requests_per_second > 0.0) {
            return Err(EstrenosError::InvalidConfig(format!(
                "requests_per_second must be positive, got {}",
                config.requests_per_second
            )));
        }
        let min_interval = Duration::try_from_secs_f64(1.0 / config.requests_per_second)
            .map_err(|e| {
                EstrenosError::InvalidConfig(format!(
                    "requests_per_second {} is out of range: {}",
                    config.requests_per_second, e
                ))
            })?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| EstrenosError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            rate_limiter: RateLimiter::with_interval(min_interval),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an href found on the site against the base URL.
    ///
    /// Handles site-relative (`/serie/x`), protocol-relative (`//host/x`)
    /// and absolute links.
    pub fn resolve(&self, href: &str) -> Result<Url> {
        self.base_url
            .join(href)
            .map_err(|e| EstrenosError::InvalidUrl(format!("{}: {}", href, e)))
    }

    /// Fetch HTML content from a path or href on the site.
    ///
    /// # Errors
    /// - `EstrenosError::HttpError` - network or transport error
    /// - `EstrenosError::RateLimited` - server returned 429
    /// - `EstrenosError::NotFound` - server returned 404
    /// - `EstrenosError::UnexpectedStatus` - any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.resolve(path)?;
        self.fetch_url(url).await
    }

    /// Fetch HTML content from an absolute URL.
    pub async fn fetch_url(&self, url: Url) -> Result<String> {
        self.rate_limiter.acquire().await;

        tracing::debug!(url = %url, "requesting");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EstrenosError::NotFound(url.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EstrenosError::RateLimited);
        }

        Err(EstrenosError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }

    #[cfg(test)]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}
