//! Query-string access.
//!
//! Pairs are form-decoded first (`+` becomes a space), then each value is
//! split on the `+` characters that survive, so `a=x+y` is the single value
//! `x y` while `a=1%2B2` yields `1` and `2`.
use std::collections::HashMap;

use url::form_urlencoded;

/// The value(s) recorded for one query key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryValues {
    /// The key is present without a usable value (`?flag` or `?flag=`).
    None,
    /// Exactly one value.
    Single(Box<str>),
    /// Several values, from an encoded `+` (`%2B`) inside the value.
    Multiple(Box<[Box<str>]>),
}

impl QueryValues {
    /// The values in query order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let values: &[Box<str>] = match self {
            Self::None => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        };
        values.iter().map(AsRef::as_ref)
    }

    /// Number of values.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Multiple(values) => values.len(),
        }
    }

    /// `true` for [`QueryValues::None`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Vec<Box<str>>> for QueryValues {
    fn from(mut values: Vec<Box<str>>) -> Self {
        match values.len() {
            0 => Self::None,
            1 => values.pop().map_or(Self::None, Self::Single),
            _ => Self::Multiple(values.into_boxed_slice()),
        }
    }
}

/// Borrowed view of a URL's query.
#[derive(Debug, Clone, Copy)]
pub struct QueryData<'a> {
    full_query: &'a str,
    collection: &'a HashMap<String, QueryValues>,
}

impl<'a> QueryData<'a> {
    pub(super) const fn new(
        full_query: &'a str,
        collection: &'a HashMap<String, QueryValues>,
    ) -> Self {
        Self {
            full_query,
            collection,
        }
    }

    /// The percent-decoded query string, without the leading `?`.
    #[must_use]
    pub const fn get_full_query(&self) -> &'a str {
        self.full_query
    }

    /// Whether `key` appears in the query, with or without a value.
    pub fn key_exists<S>(&self, key: &S) -> bool
    where
        S: AsRef<str> + ?Sized,
    {
        self.collection.contains_key(key.as_ref())
    }

    /// The value(s) of `key`.
    ///
    /// `Some(QueryValues::None)` means the key is present but carries no
    /// value.
    pub fn get_key<S>(&self, key: &S) -> Option<&'a QueryValues>
    where
        S: AsRef<str> + ?Sized,
    {
        self.collection.get(key.as_ref())
    }

    /// Every key in the query, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.collection.keys().map(String::as_str)
    }
}

/// Build the key/value table from a raw (still encoded) query string.
///
/// A repeated key keeps only its last occurrence.
pub(super) fn collect(raw: &str) -> HashMap<String, QueryValues> {
    form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| {
            let values: Vec<Box<str>> = value
                .split('+')
                .filter(|piece| !piece.is_empty())
                .map(Box::from)
                .collect();
            (key.into_owned(), QueryValues::from(values))
        })
        .collect()
}
