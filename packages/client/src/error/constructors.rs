use http::StatusCode;

use super::types::{BoxError, Error, Kind};

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e)
}

/// Creates an `Error` for a parameter encoding error.
pub fn encode<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Encode).with(e)
}

/// Creates an `Error` for a request error.
pub fn request<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Request).with(e)
}

/// Creates an `Error` for a connection failure.
pub fn connect<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Connect).with(e)
}

/// Creates an `Error` for an elapsed timeout.
pub fn timeout() -> Error {
    Error::new(Kind::Timeout).with(super::helpers::TimedOut)
}

/// Creates an `Error` for a body error.
pub fn body<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Body).with(e)
}

/// Creates an `Error` for a decode error.
pub fn decode<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Decode).with(e)
}

/// Creates a builder `Error` for a URL scheme the client cannot serve.
pub fn url_bad_scheme(url: url::Url) -> Error {
    let scheme = url.scheme().to_owned();
    Error::new(Kind::Builder)
        .with(super::helpers::BadScheme(scheme))
        .with_url(url)
}

/// Creates a builder `Error` for a URL without a host.
pub fn url_missing_host(url: url::Url) -> Error {
    Error::new(Kind::Builder)
        .with(super::helpers::MissingHost)
        .with_url(url)
}

/// Creates an `Error` for a rejected response status.
pub fn status_code(url: url::Url, status: StatusCode) -> Error {
    Error::new(Kind::Status(status)).with_url(url)
}
