use thiserror::Error;

/// A marker type to indicate that a connection or exchange timed out.
#[derive(Debug, Error)]
#[error("timed out")]
pub struct TimedOut;

/// The URL scheme cannot be served by the client.
#[derive(Debug, Error)]
#[error("unsupported scheme `{0}`")]
pub struct BadScheme(pub String);

/// The URL carries no host to connect to.
#[derive(Debug, Error)]
#[error("url has no host")]
pub struct MissingHost;
