//! Outgoing request representation
//!
//! `HttpRequest` is what a [`Sender`](crate::Sender) receives: method, URL,
//! headers, and an optional fully-buffered body.

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

/// Request handed to a [`Sender`](crate::Sender).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl HttpRequest {
    /// Create a request with no headers and no body
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Get the method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a mutable reference to the headers
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Get the body, if any
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Declared content length: the body size, or `None` when there is no body.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.body.as_ref().map(|b| b.len() as u64)
    }

    /// `Content-Type` header, if present and valid UTF-8
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Replace the method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Replace the URL
    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    /// Replace all headers
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Replace a header, dropping any previous values under the same name.
    #[must_use]
    pub fn header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Set the body and its `Content-Length`
    #[must_use]
    pub fn body_bytes(mut self, body: Bytes) -> Self {
        if let Ok(len) = HeaderValue::try_from(body.len().to_string()) {
            self.headers.insert(CONTENT_LENGTH, len);
        }
        self.body = Some(body);
        self
    }
}
