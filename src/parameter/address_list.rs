//! Parameters whose value is a list of calendar user addresses:
//! `DELEGATED-FROM`, `DELEGATED-TO`, and `MEMBER`.
use crate::email::extract_address;
use crate::error::ParamResult;
use crate::names;
use crate::render::{NamedValue, quoted_mailto_list};
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use std::fmt;

/// Normalizes each non-blank address, dropping later duplicates (ignoring case).
/// Returns `None` rather than an empty list when nothing is left.
fn normalize_addresses<I, S>(addresses: I) -> ParamResult<Option<Vec<String>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let mut normalized = Vec::new();
    for text in addresses {
        let text = text.as_ref();
        if text.trim().is_empty() {
            continue;
        }
        let address = extract_address(text)?;
        if seen.insert(address.to_lowercase()) {
            normalized.push(address);
        }
    }
    Ok(if normalized.is_empty() { None } else { Some(normalized) })
}

macro_rules! address_list {
    ($(
        $(#[$meta:meta])*
        $kind:ident($name:expr);
    )+) => {$(
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $kind(Option<Vec<String>>);

        impl $kind {
            /// Accepts addresses as `mailto:` URIs, bare addresses, or `Name <address>`.
            /// Blank entries are skipped; any other entry that isn't an address is an error.
            pub fn new<I, S>(addresses: I) -> ParamResult<Self>
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                Ok(Self(normalize_addresses(addresses)?))
            }

            pub fn single(address: &str) -> ParamResult<Self> {
                Self::new([address])
            }

            /// The bare addresses, without `mailto:`, in the order first given.
            #[must_use]
            pub fn addresses(&self) -> &[String] {
                self.0.as_deref().unwrap_or_default()
            }
        }

        impl NamedValue for $kind {
            fn name(&self) -> &'static str {
                $name
            }
            fn value(&self) -> Option<Cow<'_, str>> {
                self.0.as_ref().map(|list| Cow::Owned(quoted_mailto_list(list)))
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.value() {
                    Some(value) => write!(f, "{}={value}", $name),
                    None => Ok(()),
                }
            }
        }
    )+};
}

address_list! {
    /// `DELEGATED-FROM`: the calendar users who delegated their participation
    /// to the property's calendar user.
    DelegatedFrom(names::DELEGATED_FROM);

    /// `DELEGATED-TO`: the calendar users the property's calendar user delegated
    /// participation to.
    DelegatedTo(names::DELEGATED_TO);

    /// `MEMBER`: the groups or lists the property's calendar user belongs to.
    Membership(names::MEMBER);
}
