use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use http::StatusCode;

/// A Result alias where the Err case is `courier_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by [`Error`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Errors raised while building, sending, or interpreting a request.
///
/// The value is cheap to clone: a builder holding a sticky error hands the
/// same error to every accessor that runs after it was recorded.
#[derive(Clone)]
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

#[derive(Clone)]
pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<Arc<dyn StdError + Send + Sync>>,
    pub(crate) url: Option<url::Url>,
}

/// What went wrong, in broad strokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Invalid URL, header, or scheme supplied while building.
    Builder,
    /// Request parameters could not be marshaled.
    Encode,
    /// Sending the request or receiving the response failed.
    Request,
    /// The connection could not be established.
    Connect,
    /// The configured timeout elapsed.
    Timeout,
    /// Reading the response body failed.
    Body,
    /// The response body could not be decoded.
    Decode,
    /// The response status was not among the accepted codes.
    Status(StatusCode),
}

impl Error {
    /// Create an error of `kind` with no source or URL
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    /// Attach the underlying cause
    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(Arc::from(source.into()));
        self
    }

    /// Attach the URL the error relates to
    #[must_use]
    pub fn with_url(mut self, url: url::Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    /// Get the kind of this error
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&url::Url> {
        self.inner.url.as_ref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("courier::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", &url.as_str());
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Builder => f.write_str("builder error")?,
            Kind::Encode => f.write_str("error encoding request parameters")?,
            Kind::Request => f.write_str("error sending request")?,
            Kind::Connect => f.write_str("error connecting to host")?,
            Kind::Timeout => f.write_str("request timeout")?,
            Kind::Body => f.write_str("error reading response body")?,
            Kind::Decode => f.write_str("error decoding response body")?,
            Kind::Status(code) => write!(f, "invalid status code {}", code.as_u16())?,
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " for url ({url})")?;
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
