//! Extension points with no behavior yet
//!
//! Each is accepted so call sites compile, documented as not implemented,
//! and logs a warning when used so silently ignored configuration shows up.

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Not implemented: credentials are ignored and no `Authorization`
    /// header is sent.
    #[must_use]
    pub fn authenticate(self, username: &str, _password: &str) -> Self {
        log::warn!("authenticate is not implemented; credentials for '{username}' are ignored");
        self
    }

    /// Not implemented: no progress is reported.
    #[must_use]
    pub fn progress(self) -> Self {
        log::warn!("progress is not implemented and has no effect");
        self
    }

    /// Not implemented: an in-flight request cannot be cancelled.
    pub fn cancel(&self) {
        log::warn!("cancel is not implemented; the request is not affected");
    }
}
