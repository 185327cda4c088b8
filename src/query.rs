use core::slice;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::encoding::{self, table};
use crate::error::DecodeError;

/// The value slot of a query key.
///
/// A key holds a scalar on its first occurrence and is promoted to a
/// sequence when it repeats; later occurrences append in encounter
/// order. `None` is the "no value" state of a bare key written without
/// "=", which is kept apart from `Some("")` for a key written as
/// `key=`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    /// A key that occurred once.
    One(Option<String>),
    /// A key that occurred more than once, values in encounter order.
    Many(Vec<Option<String>>),
}

impl QueryValue {
    /// Appends another occurrence, promoting `One` to `Many`.
    pub fn push(&mut self, value: Option<String>) {
        match self {
            QueryValue::One(first) => {
                let first = first.take();
                *self = QueryValue::Many(vec![first, value]);
            }
            QueryValue::Many(values) => values.push(value),
        }
    }

    /// Iterates over the occurrence(s) in order.
    pub fn iter(&self) -> slice::Iter<'_, Option<String>> {
        match self {
            QueryValue::One(value) => slice::from_ref(value).iter(),
            QueryValue::Many(values) => values.iter(),
        }
    }
}

/// The [query component] of a URI, parsed into an ordered multimap.
///
/// [query component]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.4
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// Decoded key-value pairs, keys in first-seen order.
    ///
    /// `None` means the query component is absent from the URI, which
    /// is kept apart from `Some` with an empty map: both recompose to
    /// an empty string, but only the latter makes [`Uri`] emit a "?".
    ///
    /// [`Uri`]: crate::Uri
    pub values: Option<IndexMap<String, QueryValue>>,
}

impl Query {
    /// Parses a query string split off from a URI reference.
    ///
    /// Pairs are separated by "&". Within a pair, only the text up to
    /// the second "=" is consulted: the first field is the key and the
    /// second, when present, is the value. Pairs whose decoded key is
    /// empty are skipped entirely.
    ///
    /// # Errors
    ///
    /// Returns `Err` if percent-decoding of a key or value fails.
    pub fn parse(s: &str) -> Result<Query, DecodeError> {
        let mut query = Query {
            values: Some(IndexMap::new()),
        };
        for pair in s.split('&') {
            let mut parts = pair.split('=');
            let key = encoding::decode(parts.next().unwrap_or(""))?;
            if key.is_empty() {
                continue;
            }
            let value = match parts.next() {
                Some(value) => Some(encoding::decode(value)?),
                None => None,
            };
            query.append(key, value);
        }
        Ok(query)
    }

    /// Appends an occurrence of `key`, creating the map when absent.
    pub fn append(&mut self, key: impl Into<String>, value: Option<String>) {
        let values = self.values.get_or_insert_with(IndexMap::new);
        match values.entry(key.into()) {
            Entry::Occupied(mut slot) => slot.get_mut().push(value),
            Entry::Vacant(slot) => {
                slot.insert(QueryValue::One(value));
            }
        }
    }

    /// Looks up the value slot of a key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.values.as_ref()?.get(key)
    }

    /// Recomposes the pairs into the `key=value&...` form.
    ///
    /// Keys are emitted in first-seen order with repeated keys spelled
    /// out once per value; a `None` value yields a bare key. Both an
    /// unset and an empty map yield an empty string.
    pub fn recompose(&self) -> String {
        let Some(values) = &self.values else {
            return String::new();
        };
        let mut buf = String::new();
        for (key, slot) in values {
            for value in slot.iter() {
                if !buf.is_empty() {
                    buf.push('&');
                }
                buf.push_str(&encoding::encode(key, table::QUERY_PART));
                if let Some(value) = value {
                    buf.push('=');
                    buf.push_str(&encoding::encode(value, table::QUERY_PART));
                }
            }
        }
        buf
    }
}
