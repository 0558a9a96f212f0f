//! URL query handling

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::builder::body::encode_pairs;
use crate::builder::core::RequestBuilder;

/// Query component for [`RequestBuilder::query`]: key/value pairs (encoded
/// on conversion), a raw query string, or raw bytes read as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Encoded query, without the leading `?`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Query(raw.to_owned())
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Query(raw)
    }
}

impl From<&[u8]> for Query {
    fn from(raw: &[u8]) -> Self {
        Query(String::from_utf8_lossy(raw).into_owned())
    }
}

impl From<Vec<u8>> for Query {
    fn from(raw: Vec<u8>) -> Self {
        Query::from(raw.as_slice())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Query
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Query(encode_pairs(map))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<BTreeMap<K, V>> for Query {
    fn from(map: BTreeMap<K, V>) -> Self {
        Query(encode_pairs(map))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<Vec<(K, V)>> for Query {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Query(encode_pairs(pairs))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<&[(K, V)]> for Query {
    fn from(pairs: &[(K, V)]) -> Self {
        Query(encode_pairs(pairs))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> From<[(K, V); N]> for Query {
    fn from(pairs: [(K, V); N]) -> Self {
        Query(encode_pairs(pairs))
    }
}

impl RequestBuilder {
    /// Replace the URL query.
    ///
    /// The previous query is discarded; an empty query removes it. Encoding
    /// is not validated beyond what the URL parser does.
    ///
    /// # Examples
    /// ```no_run
    /// let builder = courier::get("https://api.example.com/search")
    ///     .query([("q", "fluent builders"), ("page", "2")]);
    /// assert_eq!(
    ///     builder.url().map(|u| u.as_str()),
    ///     Some("https://api.example.com/search?q=fluent+builders&page=2")
    /// );
    /// ```
    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        let query = query.into();
        if let Some(url) = self.url.as_mut() {
            if query.as_str().is_empty() {
                url.set_query(None);
            } else {
                url.set_query(Some(query.as_str()));
            }
            if self.debug_enabled {
                log::debug!("Set request query: {}", query.as_str());
            }
        }
        self
    }
}
