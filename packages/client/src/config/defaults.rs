use std::time::Duration;

use super::HttpConfig;

/// User agent sent when neither the config nor the request sets one
pub const DEFAULT_USER_AGENT: &str = concat!("courier/", env!("CARGO_PKG_VERSION"));

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tcp_nodelay: true,
            https_only: false,
        }
    }
}
