//! Client configuration
//!
//! `HttpConfig` carries the knobs the transport honors. Everything the
//! builder layer does not own (timeouts, TLS policy, user agent) lives here.

pub mod defaults;

use std::time::Duration;

/// Configuration for [`HttpClient`](crate::HttpClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Upper bound on a whole exchange (connect, send, read body). `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Upper bound on establishing the TCP (and TLS) connection.
    pub connect_timeout: Duration,
    /// Sent as `User-Agent` unless the request sets its own.
    pub user_agent: String,
    /// Disable Nagle's algorithm on new connections.
    pub tcp_nodelay: bool,
    /// Reject plain `http` URLs.
    pub https_only: bool,
}

impl HttpConfig {
    /// Set the overall exchange timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the default user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable `TCP_NODELAY`
    #[must_use]
    pub fn with_tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }

    /// Only allow `https` URLs
    #[must_use]
    pub fn with_https_only(mut self, enable: bool) -> Self {
        self.https_only = enable;
        self
    }
}
