//! # courier client
//!
//! The transport half of `courier`: request and response types, the
//! [`Sender`] capability the builder dispatches through, and [`HttpClient`],
//! a blocking HTTP/1.1 implementation on hyper with rustls for `https`.
//!
//! ```no_run
//! use courier_client::{HttpClient, HttpRequest, Sender};
//! use http::Method;
//!
//! let client = HttpClient::new();
//! let url = url::Url::parse("http://example.com/").unwrap();
//! let response = client.send(&HttpRequest::new(Method::GET, url)).unwrap();
//! let (head, body) = response.into_parts();
//! println!("{} ({} bytes)", head.status, body.drain().unwrap().len());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub mod prelude;

pub use crate::prelude::*;
