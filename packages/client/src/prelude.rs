//! Canonical types for users of the client crate

pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Version};
pub use ::url::Url;
pub use bytes::Bytes;

pub use crate::client::{ClientStats, ClientStatsSnapshot, HttpClient, HttpClientBuilder, Sender};
pub use crate::config::HttpConfig;
pub use crate::error::{Error, HttpError, Kind, Result};
pub use crate::http::{HttpRequest, HttpResponse, ResponseBody, ResponseHead, escape};
