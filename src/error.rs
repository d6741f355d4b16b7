//! Parse and decode failures.

use thiserror::Error;

/// Why a string could not be turned into a [`Url`](crate::Url).
///
/// The first group mirrors [`url::ParseError`]; the `*Utf8` variants come
/// from percent-decoding a component that is not valid UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UrlFault {
    /// Empty host.
    #[error("empty host")]
    EmptyHost,
    /// Invalid international domain name.
    #[error("invalid international domain name")]
    IdnaError,
    /// Invalid port number.
    #[error("invalid port number")]
    InvalidPort,
    /// Invalid IPv4 address.
    #[error("invalid IPv4 address")]
    InvalidIpv4Address,
    /// Invalid IPv6 address.
    #[error("invalid IPv6 address")]
    InvalidIpv6Address,
    /// Invalid domain character.
    #[error("invalid domain character")]
    InvalidDomainCharacter,
    /// Relative URL without a base.
    #[error("relative URL without a base")]
    RelativeUrlWithoutBase,
    /// Relative URL with a cannot-be-a-base base.
    #[error("relative URL with a cannot-be-a-base base")]
    RelativeUrlWithCannotBeABaseUrlIsABaseUrl,
    /// A cannot-be-a-base URL doesn't have a host to set.
    #[error("a cannot-be-a-base URL doesn't have a host to set")]
    SetHostOnCannotBeABaseUrl,
    /// URLs more than 4 GB are not supported.
    #[error("URLs more than 4 GB are not supported")]
    Overflow,
    /// A parse error kind this crate does not know about yet.
    #[error("unrecognised URL parse error")]
    Other,

    /// Username is not valid UTF-8 once decoded.
    #[error("username is not valid UTF-8 once decoded")]
    UserNameUtf8,
    /// Password is not valid UTF-8 once decoded.
    #[error("password is not valid UTF-8 once decoded")]
    PasswordUtf8,
    /// Path is not valid UTF-8 once decoded.
    #[error("path is not valid UTF-8 once decoded")]
    PathUtf8,
    /// Query is not valid UTF-8 once decoded.
    #[error("query is not valid UTF-8 once decoded")]
    FullQueryUtf8,
}

impl From<url::ParseError> for UrlFault {
    fn from(err: url::ParseError) -> Self {
        use url::ParseError as P;
        match err {
            P::EmptyHost => Self::EmptyHost,
            P::IdnaError => Self::IdnaError,
            P::InvalidPort => Self::InvalidPort,
            P::InvalidIpv4Address => Self::InvalidIpv4Address,
            P::InvalidIpv6Address => Self::InvalidIpv6Address,
            P::InvalidDomainCharacter => Self::InvalidDomainCharacter,
            P::RelativeUrlWithoutBase => Self::RelativeUrlWithoutBase,
            P::RelativeUrlWithCannotBeABaseBase => Self::RelativeUrlWithCannotBeABaseUrlIsABaseUrl,
            P::SetHostOnCannotBeABaseUrl => Self::SetHostOnCannotBeABaseUrl,
            P::Overflow => Self::Overflow,
            _ => Self::Other,
        }
    }
}
