//! Response validation

use std::collections::HashMap;

use courier_client::error;

use crate::builder::core::RequestBuilder;

/// Whether `status` is acceptable: one of `allowed`, or any 2xx when
/// `allowed` is empty.
fn status_allowed(status: u16, allowed: &[u16]) -> bool {
    if allowed.is_empty() {
        (200..300).contains(&status)
    } else {
        allowed.contains(&status)
    }
}

impl RequestBuilder {
    /// Require the response status to be one of `allowed` (any 2xx when empty).
    ///
    /// Sends the request if it has not been sent yet. A rejected status
    /// becomes the sticky error, so every accessor after this one receives it
    /// alongside the buffered body. An error recorded earlier, such as a body
    /// that failed mid-read, is kept instead. When there is no response the
    /// call does nothing.
    #[must_use]
    pub fn check_status_code(mut self, allowed: &[u16]) -> Self {
        self.ensure_response();

        let Some(status) = self.exchange.response.as_ref().map(|r| r.status) else {
            return self;
        };

        if !status_allowed(status.as_u16(), allowed) {
            log::debug!("Rejecting status {status}, accepted: {allowed:?}");
            let err = match self.url.clone() {
                Some(url) => error::status_code(url, status),
                None => courier_client::Error::new(courier_client::Kind::Status(status)),
            };
            self.fail(err);
        }
        self
    }

    /// Not implemented: always reports success.
    ///
    /// Reserved for checking the response `Content-Type` against accepted
    /// media types.
    #[must_use]
    pub fn check_accept_content_type(&self, accepted: &HashMap<String, String>) -> bool {
        log::warn!(
            "check_accept_content_type is not implemented; {} accepted types ignored",
            accepted.len()
        );
        true
    }

    /// Not implemented: always reports success. Same as
    /// [`check_accept_content_type`](Self::check_accept_content_type).
    #[must_use]
    pub fn validate_accept_content_type(&self, accepted: &HashMap<String, String>) -> bool {
        self.check_accept_content_type(accepted)
    }

    /// Not implemented: returns the builder unchanged.
    #[must_use]
    pub fn validate(self) -> Self {
        log::warn!("validate is not implemented and has no effect");
        self
    }
}
