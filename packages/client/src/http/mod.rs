//! HTTP request and response types exchanged with a [`Sender`](crate::Sender)

pub mod escape;
pub mod request;
pub mod response;

pub use escape::escape;
pub use request::HttpRequest;
pub use response::{HttpResponse, ResponseBody, ResponseHead};
