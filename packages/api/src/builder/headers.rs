//! Header management
//!
//! Setting a header replaces earlier values under the same name. A name or
//! value that is not valid HTTP records a sticky builder error.

use courier_client::error;
use http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use http::{HeaderName, HeaderValue};

use crate::builder::core::{ContentType, RequestBuilder};

/// Value for [`RequestBuilder::accept`]: free-form or a known [`ContentType`].
#[derive(Debug, Clone)]
pub enum AcceptValue {
    /// Free-form media range, e.g. `text/*`
    String(String),
    /// One of the known content types
    ContentType(ContentType),
}

impl AcceptValue {
    /// Header value to send
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            AcceptValue::String(s) => s,
            AcceptValue::ContentType(ct) => ct.as_str(),
        }
    }
}

impl From<&str> for AcceptValue {
    fn from(s: &str) -> Self {
        AcceptValue::String(s.to_string())
    }
}

impl From<String> for AcceptValue {
    fn from(s: String) -> Self {
        AcceptValue::String(s)
    }
}

impl From<ContentType> for AcceptValue {
    fn from(ct: ContentType) -> Self {
        AcceptValue::ContentType(ct)
    }
}

impl RequestBuilder {
    /// Set a header on the request
    ///
    /// # Examples
    /// ```no_run
    /// let builder = courier::get("https://api.example.com/data")
    ///     .header("x-request-id", "8f14e45f");
    /// assert_eq!(builder.headers()["x-request-id"], "8f14e45f");
    /// ```
    #[must_use]
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        if self.last_error.is_some() {
            return self;
        }

        let name: Result<HeaderName, http::Error> = HeaderName::try_from(key).map_err(Into::into);
        let value: Result<HeaderValue, http::Error> =
            HeaderValue::try_from(value).map_err(Into::into);
        match (name, value) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Invalid header: {e}");
                self.fail(error::builder(e));
            }
        }
        self
    }

    /// Set several headers at once
    #[must_use]
    pub fn extend_headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (key, value)| builder.header(key, value))
    }

    /// Set the `Content-Type` header from an encoding name.
    ///
    /// `"json"`, in any letter case, means `application/json`. Any other
    /// non-empty value is used as the content type verbatim; an empty value
    /// leaves the header untouched.
    #[must_use]
    pub fn encoding(self, name: &str) -> Self {
        if name.is_empty() {
            return self;
        }
        if name.eq_ignore_ascii_case("json") {
            return self.content_type(ContentType::ApplicationJson);
        }
        self.header(CONTENT_TYPE, name)
    }

    /// Set content type using the `ContentType` enum
    #[must_use]
    pub fn content_type(self, content_type: ContentType) -> Self {
        self.header(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()))
    }

    /// Set User-Agent header
    #[must_use]
    pub fn user_agent(self, user_agent: &str) -> Self {
        self.header(USER_AGENT, user_agent)
    }

    /// Set Accept header - supports both string and ContentType enum
    ///
    /// # Examples
    /// ```no_run
    /// use courier::ContentType;
    ///
    /// let builder = courier::get("https://api.example.com/data")
    ///     .accept(ContentType::ApplicationJson);
    /// ```
    #[must_use]
    pub fn accept<T: Into<AcceptValue>>(self, accept: T) -> Self {
        let accept = accept.into();
        self.header(ACCEPT, accept.as_str())
    }
}
