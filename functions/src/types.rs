use std::collections::BTreeMap;

use ::http::header::{self, HeaderMap, HeaderName, HeaderValue};

use crate::error::{BindingError, Result};

/// Raw payload carried by requests, responses and blobs
pub type Body = bytes::Bytes;

/// Point in time reported by a trigger's backing store
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Query string parameters of an HTTP request
///
/// Unlike header names, parameter names are case-sensitive.
pub type Params = BTreeMap<String, String>;

/// HTTP header mapping with ASCII case-insensitive names
///
/// Names are normalized to lower case, so `X-Test` and `x-test` address the same entry. Names
/// must be valid HTTP tokens and values visible ASCII.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    map: HeaderMap,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a header mapping from `(name, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut headers = Headers::new();
        for (name, value) in pairs {
            headers.insert(name, value)?;
        }
        Ok(headers)
    }

    /// Insert a header, returning the value it replaced
    ///
    /// Fails with [BindingError::InvalidHeaderName] or [BindingError::InvalidHeaderValue].
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Result<Option<String>>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let name = name.as_ref();
        let value = value.as_ref();

        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| BindingError::InvalidHeaderName(name.to_owned()))?;
        let header_value = HeaderValue::from_str(value)
            .ok()
            .filter(|v| v.to_str().is_ok())
            .ok_or_else(|| BindingError::InvalidHeaderValue(name.to_owned()))?;

        Ok(self.map.insert(header_name, header_value).and_then(into_string))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(|v| v.to_str().ok())
    }

    /// Remove a header, returning its value if it was present
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.remove(name).and_then(into_string)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.keys_len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(name, value)` pairs; names are lower case
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.map.iter(),
        }
    }
}

fn into_string(value: HeaderValue) -> Option<String> {
    value.to_str().ok().map(String::from)
}

/// Iterator over the entries of [Headers]
pub struct Iter<'a> {
    inner: header::Iter<'a, HeaderValue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (name, value) in self.inner.by_ref() {
            if let Ok(value) = value.to_str() {
                return Some((name.as_str(), value));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
