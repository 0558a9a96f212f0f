pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{BadScheme, MissingHost, TimedOut};
pub use types::{BoxError, Error, Kind, Result};

/// Alias kept for callers that name the error by domain
pub type HttpError = Error;
