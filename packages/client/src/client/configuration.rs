//! HTTP client construction

use std::time::Duration;

use super::HttpClient;
use crate::config::HttpConfig;

/// HTTP client builder for configuration
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpConfig,
}

impl HttpClientBuilder {
    /// Start from the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overall exchange timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the default user agent
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable `TCP_NODELAY`
    #[must_use]
    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.config.tcp_nodelay = enable;
        self
    }

    /// Only allow `https` URLs
    #[must_use]
    pub fn https_only(mut self, enable: bool) -> Self {
        self.config.https_only = enable;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> HttpClient {
        HttpClient::with_config(self.config)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
