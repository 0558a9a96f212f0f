//! Incoming response representation
//!
//! A [`Sender`](crate::Sender) hands back an [`HttpResponse`]: the head plus a
//! body stream. Callers drain the stream once and keep the bytes.

use std::fmt;
use std::io::{Cursor, Read};

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Version};

use crate::error::{self, Result};

/// Status line and headers of a response.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// Response status code
    pub status: StatusCode,
    /// HTTP version the server answered with
    pub version: Version,
    /// Response headers
    pub headers: HeaderMap,
}

impl ResponseHead {
    /// Head with `status`, HTTP/1.1 and no headers
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
        }
    }

    /// Get the status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// `Content-Type` header, if present and valid UTF-8
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

/// Response body as a readable stream.
pub struct ResponseBody {
    reader: Box<dyn Read + Send>,
}

impl ResponseBody {
    /// Wrap any reader as a body
    pub fn new<R: Read + Send + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// A body with no bytes
    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::io::empty())
    }

    /// Read the stream to its end and release it.
    ///
    /// # Errors
    ///
    /// Returns a body error if the underlying reader fails.
    pub fn drain(mut self) -> Result<Bytes> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf).map_err(error::body)?;
        Ok(Bytes::from(buf))
    }
}

impl From<Bytes> for ResponseBody {
    fn from(bytes: Bytes) -> Self {
        Self::new(Cursor::new(bytes))
    }
}

impl From<Vec<u8>> for ResponseBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(Cursor::new(bytes))
    }
}

impl From<&'static str> for ResponseBody {
    fn from(text: &'static str) -> Self {
        Self::new(Cursor::new(text.as_bytes()))
    }
}

impl From<String> for ResponseBody {
    fn from(text: String) -> Self {
        Self::new(Cursor::new(text.into_bytes()))
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBody").finish_non_exhaustive()
    }
}

/// Response returned by a [`Sender`](crate::Sender): head plus body stream.
#[derive(Debug)]
pub struct HttpResponse {
    head: ResponseHead,
    body: ResponseBody,
}

impl HttpResponse {
    /// Response with `status` and an empty body
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            head: ResponseHead::new(status),
            body: ResponseBody::empty(),
        }
    }

    /// Assemble a response from its head and body
    #[must_use]
    pub fn from_parts(head: ResponseHead, body: ResponseBody) -> Self {
        Self { head, body }
    }

    /// Get the status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.head.status
    }

    /// Get the status line and headers
    #[must_use]
    pub fn head(&self) -> &ResponseHead {
        &self.head
    }

    /// Append a response header
    #[must_use]
    pub fn header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.head.headers.append(key, value);
        self
    }

    /// Set the HTTP version
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.head.version = version;
        self
    }

    /// Replace the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<ResponseBody>) -> Self {
        self.body = body.into();
        self
    }

    /// Split into head and body
    #[must_use]
    pub fn into_parts(self) -> (ResponseHead, ResponseBody) {
        (self.head, self.body)
    }
}
