//! # courier
//!
//! A fluent HTTP request builder. Configure the method, URL, query, headers
//! and body, then read the outcome through typed callbacks. The request is
//! sent once, on the first accessor; later accessors share the result.
//!
//! ```no_run
//! use std::collections::BTreeMap;
//!
//! courier::post("https://api.example.com/login")
//!     .encoding("json")
//!     .json(&BTreeMap::from([("user", "ada"), ("pass", "hunter2")]))
//!     .check_status_code(&[200, 201])
//!     .on_response_json(|_, res, data, err| {
//!         if let Some(err) = err {
//!             eprintln!("login failed: {err}");
//!             return;
//!         }
//!         println!("{:?} token = {:?}", res.map(|r| r.status), data.get("token"));
//!     })
//!     .on_response_string(|_, _, raw, _| println!("raw body: {raw}"));
//! ```
//!
//! Requests go through a [`Sender`]; [`RequestBuilder::with_sender`] injects
//! one (a shared [`HttpClient`], or a closure in tests).

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{
    AcceptValue, ContentType, JsonMap, Parameters, Query, RequestBuilder, encodes_parameters_in_url,
};

pub use courier_client::{
    Error, HttpClient, HttpConfig, HttpRequest, HttpResponse, Kind, ResponseBody, ResponseHead,
    Result, Sender, escape,
};
pub use http::{Method, StatusCode};

/// Start a request with `method` to `url`, sent through a fresh [`HttpClient`].
#[must_use]
pub fn request(method: Method, url: &str) -> RequestBuilder {
    RequestBuilder::new(method, url)
}

/// Start a GET request
#[must_use]
pub fn get(url: &str) -> RequestBuilder {
    request(Method::GET, url)
}

/// Start a POST request
#[must_use]
pub fn post(url: &str) -> RequestBuilder {
    request(Method::POST, url)
}

/// Start a PUT request
#[must_use]
pub fn put(url: &str) -> RequestBuilder {
    request(Method::PUT, url)
}

/// Start a PATCH request
#[must_use]
pub fn patch(url: &str) -> RequestBuilder {
    request(Method::PATCH, url)
}

/// Start a DELETE request
#[must_use]
pub fn delete(url: &str) -> RequestBuilder {
    request(Method::DELETE, url)
}

/// Start a HEAD request
#[must_use]
pub fn head(url: &str) -> RequestBuilder {
    request(Method::HEAD, url)
}
