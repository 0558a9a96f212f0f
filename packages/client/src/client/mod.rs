//! HTTP client: the [`Sender`] capability and its default implementation

pub mod configuration;
mod connect;
pub mod core;
pub mod sender;
pub mod stats;

pub use configuration::HttpClientBuilder;
pub use self::core::HttpClient;
pub use sender::Sender;
pub use stats::{ClientStats, ClientStatsSnapshot};
