//! Client configuration

/// Client configuration for connecting to the booking API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.lagoonresort.example")
    pub base_url: String,

    /// Request timeout in seconds
    ///
    /// Applies to every call, including booking creation and payment
    /// initiation. The retry backoff is the only other timer in the flow.
    pub timeout: u64,

    /// User-Agent header value
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            user_agent: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
