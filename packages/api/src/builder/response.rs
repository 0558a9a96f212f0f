//! Dispatch, memoization and the response accessors
//!
//! A builder sends at most once. The first accessor to run triggers
//! [`RequestBuilder::ensure_response`]; the request, response head, drained
//! body and any error are kept on the builder and handed to every accessor
//! after it.

use bytes::Bytes;
use courier_client::{Error, HttpRequest, ResponseHead, Result, error};
use http::HeaderValue;
use http::header::CONTENT_TYPE;

use crate::builder::core::{ContentType, RequestBuilder};

/// A decoded JSON object.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

impl RequestBuilder {
    /// Send the request and drain the response body.
    fn dispatch(&mut self) -> Result<Bytes> {
        let Some(url) = self.url.clone() else {
            return Err(error::builder("request has no valid url"));
        };

        let mut headers = self.headers.clone();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static(ContentType::ApplicationFormUrlEncoded.as_str()),
            );
        }

        let mut request = HttpRequest::new(self.method.clone(), url).with_headers(headers);
        if let Some(body) = &self.body {
            request = request.body_bytes(body.clone());
        }

        if self.debug_enabled {
            log::debug!(
                "Dispatching {} {} ({} body bytes)",
                request.method(),
                request.url(),
                request.content_length().unwrap_or(0)
            );
        }

        let sent = self.sender.send(&request);
        self.exchange.request = Some(request);

        let (head, body) = sent?.into_parts();
        if self.debug_enabled {
            log::debug!("Response status {}", head.status);
        }
        self.exchange.response = Some(head);

        let buffer = body.drain()?;
        self.exchange.buffer = Some(buffer.clone());
        Ok(buffer)
    }

    /// Dispatch once; afterwards, and whenever an error is already recorded,
    /// leave the cached outcome as it is.
    pub(crate) fn ensure_response(&mut self) {
        if self.last_error.is_some() || self.exchange.dispatched {
            return;
        }
        self.exchange.dispatched = true;

        if let Err(err) = self.dispatch() {
            log::debug!("Request failed: {err}");
            self.fail(err);
        }
    }

    /// Receive the raw outcome: request, response head, buffered body, error.
    #[must_use]
    pub fn on_response<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(Option<&HttpRequest>, Option<&ResponseHead>, Option<&Bytes>, Option<&Error>),
    {
        self.ensure_response();
        handler(
            self.exchange.request.as_ref(),
            self.exchange.response.as_ref(),
            self.exchange.buffer.as_ref(),
            self.last_error.as_ref(),
        );
        self
    }

    /// Receive the response body as bytes; empty when there is none.
    #[must_use]
    pub fn on_response_bytes<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(Option<&HttpRequest>, Option<&ResponseHead>, &[u8], Option<&Error>),
    {
        self.ensure_response();
        let body = self.exchange.buffer.as_deref().unwrap_or_default();
        handler(
            self.exchange.request.as_ref(),
            self.exchange.response.as_ref(),
            body,
            self.last_error.as_ref(),
        );
        self
    }

    /// Receive the response body as text. Invalid UTF-8 is replaced with U+FFFD.
    #[must_use]
    pub fn on_response_string<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(Option<&HttpRequest>, Option<&ResponseHead>, &str, Option<&Error>),
    {
        self.ensure_response();
        let body = self.exchange.buffer.as_deref().unwrap_or_default();
        let text = String::from_utf8_lossy(body);
        handler(
            self.exchange.request.as_ref(),
            self.exchange.response.as_ref(),
            &text,
            self.last_error.as_ref(),
        );
        self
    }

    /// Receive the response body decoded as a JSON object.
    ///
    /// A body that is not a JSON object reaches `handler` as a decode error
    /// with an empty map. That error is not recorded on the builder: later
    /// accessors still see the buffered body.
    ///
    /// # Examples
    /// ```no_run
    /// courier::get("https://api.example.com/me")
    ///     .check_status_code(&[])
    ///     .on_response_json(|_, _, data, err| match err {
    ///         None => println!("name = {:?}", data.get("name")),
    ///         Some(err) => eprintln!("request failed: {err}"),
    ///     });
    /// ```
    #[must_use]
    pub fn on_response_json<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(Option<&HttpRequest>, Option<&ResponseHead>, JsonMap, Option<&Error>),
    {
        self.ensure_response();
        let request = self.exchange.request.as_ref();
        let response = self.exchange.response.as_ref();

        if let Some(err) = self.last_error.as_ref() {
            handler(request, response, JsonMap::new(), Some(err));
            return self;
        }

        let body = self.exchange.buffer.as_deref().unwrap_or_default();
        match serde_json::from_slice::<JsonMap>(body) {
            Ok(data) => handler(request, response, data, None),
            Err(e) => {
                let err = error::decode(e);
                handler(request, response, JsonMap::new(), Some(&err));
            }
        }
        self
    }
}
