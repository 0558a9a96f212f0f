//! Request body handling
//!
//! [`Parameters`] is the closed set of shapes a body can come from. Each
//! variant encodes to bytes one way; [`RequestBuilder::parameters`] applies
//! the result, or records the encoding failure as the sticky error.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use bytes::{Buf, Bytes, BytesMut};
use courier_client::{Result, error};
use serde::Serialize;
use url::form_urlencoded;

use crate::builder::core::{ContentType, RequestBuilder, encodes_parameters_in_url};

/// Body source for [`RequestBuilder::parameters`].
#[derive(Debug)]
pub enum Parameters {
    /// URL-encoded key/value pairs
    Form(String),
    /// Raw text, sent as-is
    Text(String),
    /// Raw bytes, sent as-is
    Bytes(Bytes),
    /// An already-buffered source adopted without copying
    Buffer(Bytes),
    /// JSON produced from an arbitrary serializable value
    Json(Bytes),
    /// A value that failed to marshal
    Unencodable(courier_client::Error),
}

impl Parameters {
    /// Serialize a struct or map as `application/x-www-form-urlencoded`.
    pub fn form<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_urlencoded::to_string(value) {
            Ok(encoded) => Parameters::Form(encoded),
            Err(e) => Parameters::Unencodable(error::encode(e)),
        }
    }

    /// Marshal any serializable value to JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(encoded) => Parameters::Json(Bytes::from(encoded)),
            Err(e) => Parameters::Unencodable(error::encode(e)),
        }
    }

    /// Adopt whatever `buf` has left to read.
    pub fn buffer<B: Buf>(mut buf: B) -> Self {
        let remaining = buf.remaining();
        Parameters::Buffer(buf.copy_to_bytes(remaining))
    }

    /// Encode into the body bytes; the length of the result is the content length.
    ///
    /// # Errors
    ///
    /// Returns the encoding error carried by [`Parameters::Unencodable`].
    pub fn encode(self) -> Result<Bytes> {
        match self {
            Parameters::Form(s) | Parameters::Text(s) => Ok(Bytes::from(s)),
            Parameters::Bytes(b) | Parameters::Buffer(b) | Parameters::Json(b) => Ok(b),
            Parameters::Unencodable(err) => Err(err),
        }
    }
}

pub(crate) fn encode_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

impl From<&str> for Parameters {
    fn from(text: &str) -> Self {
        Parameters::Text(text.to_owned())
    }
}

impl From<String> for Parameters {
    fn from(text: String) -> Self {
        Parameters::Text(text)
    }
}

impl From<&String> for Parameters {
    fn from(text: &String) -> Self {
        Parameters::Text(text.clone())
    }
}

impl From<Vec<u8>> for Parameters {
    fn from(bytes: Vec<u8>) -> Self {
        Parameters::Bytes(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Parameters {
    fn from(bytes: &[u8]) -> Self {
        Parameters::Bytes(Bytes::copy_from_slice(bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for Parameters {
    fn from(bytes: &[u8; N]) -> Self {
        Parameters::Bytes(Bytes::copy_from_slice(bytes))
    }
}

impl From<Bytes> for Parameters {
    fn from(bytes: Bytes) -> Self {
        Parameters::Bytes(bytes)
    }
}

impl From<BytesMut> for Parameters {
    fn from(buf: BytesMut) -> Self {
        Parameters::Buffer(buf.freeze())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Parameters
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Parameters::Form(encode_pairs(map))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<BTreeMap<K, V>> for Parameters {
    fn from(map: BTreeMap<K, V>) -> Self {
        Parameters::Form(encode_pairs(map))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<Vec<(K, V)>> for Parameters {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Parameters::Form(encode_pairs(pairs))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<&[(K, V)]> for Parameters {
    fn from(pairs: &[(K, V)]) -> Self {
        Parameters::Form(encode_pairs(pairs))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> From<[(K, V); N]> for Parameters {
    fn from(pairs: [(K, V); N]) -> Self {
        Parameters::Form(encode_pairs(pairs))
    }
}

impl From<serde_json::Value> for Parameters {
    fn from(value: serde_json::Value) -> Self {
        Parameters::json(&value)
    }
}

macro_rules! json_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Parameters {
                fn from(value: $ty) -> Self {
                    Parameters::json(&value)
                }
            }
        )*
    };
}

json_scalar!(bool, i32, i64, u32, u64, f64);

impl RequestBuilder {
    /// Set the request body.
    ///
    /// Does nothing for GET, HEAD and DELETE, whose parameters belong in the
    /// query (see [`query`](Self::query)), and nothing once an error has been
    /// recorded. A value that fails to encode records an encoding error and
    /// leaves the body unset.
    ///
    /// # Examples
    /// ```no_run
    /// use std::collections::BTreeMap;
    ///
    /// let form = BTreeMap::from([("name", "courier"), ("lang", "rust")]);
    /// courier::post("https://api.example.com/projects")
    ///     .parameters(form)
    ///     .on_response_string(|_, res, body, err| {
    ///         println!("{:?} {body} {err:?}", res.map(|r| r.status));
    ///     });
    /// ```
    #[must_use]
    pub fn parameters(mut self, parameters: impl Into<Parameters>) -> Self {
        if encodes_parameters_in_url(&self.method) {
            log::debug!("Ignoring body parameters for {} request", self.method);
            return self;
        }
        if self.last_error.is_some() {
            return self;
        }

        match parameters.into().encode() {
            Ok(body) => {
                if self.debug_enabled {
                    log::debug!("Set request body ({} bytes)", body.len());
                }
                self.body = Some(body);
            }
            Err(err) => {
                log::warn!("Failed to encode request parameters: {err}");
                self.fail(err);
            }
        }
        self
    }

    /// Marshal `value` to JSON as the body and set `Content-Type: application/json`.
    #[must_use]
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Self {
        if encodes_parameters_in_url(&self.method) {
            return self.parameters(Parameters::json(value));
        }
        self.content_type(ContentType::ApplicationJson)
            .parameters(Parameters::json(value))
    }

    /// Serialize `value` as a URL-encoded form body.
    #[must_use]
    pub fn form<T: Serialize + ?Sized>(self, value: &T) -> Self {
        self.parameters(Parameters::form(value))
    }
}
