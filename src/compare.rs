//! Comparisons between [`Url`] and strings or bytes.
use std::borrow::Cow;
use std::cmp::Ordering;

use crate::Url;

/// `Url == other` and `Url < other` through the normalised string.
macro_rules! compare_as {
    ($view:ty, $url:ident => $lhs:expr; $($other:ty),+ $(,)?) => {
        $(
            impl PartialEq<$other> for Url {
                fn eq(&self, other: &$other) -> bool {
                    let $url = self;
                    $lhs == AsRef::<$view>::as_ref(other)
                }
            }

            impl PartialOrd<$other> for Url {
                fn partial_cmp(&self, other: &$other) -> Option<Ordering> {
                    let $url = self;
                    $lhs.partial_cmp(AsRef::<$view>::as_ref(other))
                }
            }
        )+
    };
}

/// The mirrored `other == Url` direction for the string types.
macro_rules! compare_str_mirrored {
    ($($other:ty),+ $(,)?) => {
        $(
            impl PartialEq<Url> for $other {
                fn eq(&self, other: &Url) -> bool {
                    AsRef::<str>::as_ref(self) == other.get_string()
                }
            }

            impl PartialOrd<Url> for $other {
                fn partial_cmp(&self, other: &Url) -> Option<Ordering> {
                    AsRef::<str>::as_ref(self).partial_cmp(other.get_string())
                }
            }
        )+
    };
}

compare_as!(str, url => url.get_string();
    str, &str, String, &String, Cow<'_, str>, &Cow<'_, str>);

compare_as!([u8], url => url.get_string().as_bytes();
    [u8], &[u8], Vec<u8>, &Vec<u8>, Box<[u8]>, Cow<'_, [u8]>, &Cow<'_, [u8]>);

compare_str_mirrored!(str, &str, String);

impl PartialEq<&Self> for Url {
    fn eq(&self, other: &&Self) -> bool {
        self == *other
    }
}
