//! The decoded form of a URL, computed once at construction.
use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use url::Host;

use crate::UrlFault;
use crate::query::{self, QueryData, QueryValues};

/// Scheme, host and port of a URL that has a network location.
///
/// Unlike a browser origin this is never opaque: URLs without a host or
/// without any port yield no `Origin` at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin<'a> {
    /// Lower-cased scheme.
    pub scheme: &'a str,
    /// Domain or IP address.
    pub host: Host<&'a str>,
    /// Explicit port, or the scheme's default one.
    pub port: u16,
}

#[derive(Debug)]
pub(super) struct ParsedUrl {
    input: Box<str>,
    url: url::Url,
    username: Option<Box<str>>,
    password: Option<Box<str>>,
    path: Option<Box<str>>,
    full_query: Option<Box<str>>,
    query_values: HashMap<String, QueryValues>,
}

/// Percent-decode a component, treating an empty one as absent.
fn decoded(raw: Option<&str>, fault: UrlFault) -> Result<Option<Box<str>>, UrlFault> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => percent_decode_str(raw)
            .decode_utf8()
            .map(|s| Some(Box::from(s)))
            .map_err(|_| fault),
    }
}

impl ParsedUrl {
    pub(super) fn new(input: &str) -> Result<Self, UrlFault> {
        let url = url::Url::parse(input)?;
        let username = decoded(Some(url.username()), UrlFault::UserNameUtf8)?;
        let password = decoded(url.password(), UrlFault::PasswordUtf8)?;
        let path = decoded(Some(url.path()), UrlFault::PathUtf8)?;
        let full_query = decoded(url.query(), UrlFault::FullQueryUtf8)?;
        let query_values = url.query().map(query::collect).unwrap_or_default();

        Ok(Self {
            input: Box::from(input),
            url,
            username,
            password,
            path,
            full_query,
            query_values,
        })
    }

    pub(super) fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub(super) fn input(&self) -> &str {
        &self.input
    }

    pub(super) fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub(super) fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub(super) fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub(super) fn host(&self) -> Option<Host<&str>> {
        self.url.host()
    }

    pub(super) fn port(&self) -> Option<u16> {
        self.url.port()
    }

    pub(super) fn origin(&self) -> Option<Origin<'_>> {
        let host = self.url.host()?;
        let port = self.url.port_or_known_default()?;
        Some(Origin {
            scheme: self.url.scheme(),
            host,
            port,
        })
    }

    pub(super) fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub(super) fn query(&self) -> Option<QueryData<'_>> {
        self.full_query
            .as_deref()
            .map(|full| QueryData::new(full, &self.query_values))
    }
}
