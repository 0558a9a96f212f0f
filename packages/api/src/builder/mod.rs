//! Request builder API
//!
//! [`RequestBuilder`] and its configuration, dispatch, and validation
//! methods, one concern per module.

pub mod body;
pub mod core;
pub mod extensions;
pub mod headers;
pub mod query;
pub mod response;
pub mod validate;

pub use body::Parameters;
pub use self::core::{ContentType, RequestBuilder, encodes_parameters_in_url};
pub use headers::AcceptValue;
pub use query::Query;
pub use response::JsonMap;
