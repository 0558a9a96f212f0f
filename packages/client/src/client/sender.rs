//! The send capability the builder layer is written against

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

/// A blocking, single-exchange HTTP capability.
///
/// Implementations own connection handling, TLS, and timeouts. The request
/// body is already fully buffered; the returned body may still be streaming.
pub trait Sender: Send + Sync {
    /// Send `request` and return the response head with its body stream.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request cannot be delivered or the
    /// response cannot be read.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<F> Sender for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync,
{
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self(request)
    }
}
