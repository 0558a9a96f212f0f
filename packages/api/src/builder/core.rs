//! Core `RequestBuilder` structure and base functionality
//!
//! Holds everything a request accumulates before dispatch, the sticky error,
//! and the memoized outcome of the one dispatch a builder is allowed.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use courier_client::{Error, HttpClient, HttpRequest, ResponseHead, Sender, error};
use http::{HeaderMap, Method};
use url::Url;

/// Content type enumeration for elegant API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// application/json content type
    ApplicationJson,
    /// application/x-www-form-urlencoded content type
    ApplicationFormUrlEncoded,
    /// application/octet-stream content type
    ApplicationOctetStream,
    /// text/plain content type
    TextPlain,
    /// text/html content type
    TextHtml,
}

impl ContentType {
    /// Convert content type to string representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ApplicationJson => "application/json",
            ContentType::ApplicationFormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::ApplicationOctetStream => "application/octet-stream",
            ContentType::TextPlain => "text/plain",
            ContentType::TextHtml => "text/html",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Methods whose parameters travel in the URL query rather than the body.
#[must_use]
pub fn encodes_parameters_in_url(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::DELETE)
}

/// Outcome of the single dispatch a builder performs.
#[derive(Debug, Default)]
pub(crate) struct Exchange {
    pub(crate) dispatched: bool,
    pub(crate) request: Option<HttpRequest>,
    pub(crate) response: Option<ResponseHead>,
    pub(crate) buffer: Option<Bytes>,
}

/// Fluent builder for one HTTP request and its memoized response.
///
/// Configuration methods consume and return the builder. The first response
/// accessor (or [`check_status_code`](Self::check_status_code)) sends the
/// request; every later accessor reads the cached outcome. Once an error is
/// recorded it sticks: dispatch is skipped and every accessor receives it.
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: Option<Url>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Bytes>,
    pub(crate) sender: Arc<dyn Sender>,
    pub(crate) last_error: Option<Error>,
    pub(crate) exchange: Exchange,
    pub(crate) debug_enabled: bool,
}

impl RequestBuilder {
    /// Start a request sent through a fresh [`HttpClient`].
    ///
    /// An unparsable `url` is recorded as a sticky builder error; the builder
    /// stays usable but will never dispatch.
    #[must_use]
    pub fn new(method: Method, url: &str) -> Self {
        Self::with_sender(method, url, HttpClient::new())
    }

    /// Start a request sent through `sender`.
    #[must_use]
    pub fn with_sender(method: Method, url: &str, sender: impl Sender + 'static) -> Self {
        Self::with_shared_sender(method, url, Arc::new(sender))
    }

    /// Start a request sent through a sender shared with other builders.
    #[must_use]
    pub fn with_shared_sender(method: Method, url: &str, sender: Arc<dyn Sender>) -> Self {
        let (url, last_error) = match Url::parse(url) {
            Ok(parsed) => (Some(parsed), None),
            Err(parse_error) => {
                log::warn!("Invalid URL provided '{url}': {parse_error}");
                (None, Some(error::builder(parse_error)))
            }
        };

        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            sender,
            last_error,
            exchange: Exchange::default(),
            debug_enabled: false,
        }
    }

    /// Enable debug logging for this request
    ///
    /// When enabled, the request line, body size and the response status are
    /// logged at debug level when the request is dispatched.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// HTTP method of the request
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL, `None` if the one supplied could not be parsed.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Headers set so far
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body bytes set by [`parameters`](Self::parameters), if any.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The sticky error, if one has been recorded.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Whether the request has already been sent.
    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        self.exchange.dispatched
    }

    pub(crate) fn fail(&mut self, err: Error) {
        if self.last_error.is_none() {
            self.last_error = Some(err);
        }
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url.as_ref().map(Url::as_str))
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(Bytes::len))
            .field("last_error", &self.last_error)
            .field("dispatched", &self.exchange.dispatched)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}
