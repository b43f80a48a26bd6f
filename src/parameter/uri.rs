//! Parameters whose value is a quoted URI: `DIR` and `ALTREP`.
use crate::error::{ParamError, ParamResult};
use crate::names;
use crate::render::{NamedValue, name_equals_quoted_value};
use iri_string::types::{UriReferenceStr, UriReferenceString, UriStr, UriString};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

fn invalid_uri(uri: &str, reason: &impl fmt::Display) -> ParamError {
    tracing::debug!(uri, %reason, "Rejected URI");
    ParamError::InvalidUri { uri: uri.to_string(), reason: reason.to_string() }
}

// Directory entry reference
//==============================================================================

/// `DIR`: where to find the directory entry of the calendar user a property
/// refers to, e.g. an LDAP or HTTP URI.
///
/// Relative references are allowed. Unlike most parameters, blank input is an
/// error rather than an empty parameter; use [`Default`] for an empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectoryEntryReference(Option<UriReferenceString>);

impl DirectoryEntryReference {
    pub fn new(uri: &str) -> ParamResult<Self> {
        if uri.trim().is_empty() {
            return Err(ParamError::MissingValue(names::DIR));
        }
        match UriReferenceStr::new(uri) {
            Ok(reference) => Ok(Self(Some(reference.to_owned()))),
            Err(err) => Err(invalid_uri(uri, &err)),
        }
    }

    #[must_use]
    pub fn from_uri(uri: UriReferenceString) -> Self {
        Self(Some(uri))
    }

    #[must_use]
    pub fn uri(&self) -> Option<&UriReferenceStr> {
        self.0.as_ref().map(UriReferenceString::as_slice)
    }
}

impl FromStr for DirectoryEntryReference {
    type Err = ParamError;
    fn from_str(uri: &str) -> ParamResult<Self> {
        Self::new(uri)
    }
}

impl TryFrom<&str> for DirectoryEntryReference {
    type Error = ParamError;
    fn try_from(uri: &str) -> ParamResult<Self> {
        Self::new(uri)
    }
}

impl NamedValue for DirectoryEntryReference {
    fn name(&self) -> &'static str {
        names::DIR
    }
    fn value(&self) -> Option<Cow<'_, str>> {
        self.0.as_ref().map(|uri| Cow::Borrowed(uri.as_str()))
    }
    fn render(&self) -> Option<String> {
        name_equals_quoted_value(self)
    }
}

impl fmt::Display for DirectoryEntryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(uri) => write!(f, "{}=\"{uri}\"", names::DIR),
            None => Ok(()),
        }
    }
}

// Alternate text representation
//==============================================================================

/// `ALTREP`: a URI pointing to an alternate rendering of a text property, such
/// as an HTML version of a `DESCRIPTION`. The URI must be absolute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlternateTextRepresentation(Option<UriString>);

impl AlternateTextRepresentation {
    pub fn new(uri: &str) -> ParamResult<Self> {
        if uri.trim().is_empty() {
            return Ok(Self(None));
        }
        match UriStr::new(uri) {
            Ok(absolute) => Ok(Self(Some(absolute.to_owned()))),
            Err(err) => Err(invalid_uri(uri, &err)),
        }
    }

    #[must_use]
    pub fn from_uri(uri: UriString) -> Self {
        Self(Some(uri))
    }

    #[must_use]
    pub fn uri(&self) -> Option<&UriStr> {
        self.0.as_ref().map(UriString::as_slice)
    }
}

impl FromStr for AlternateTextRepresentation {
    type Err = ParamError;
    fn from_str(uri: &str) -> ParamResult<Self> {
        Self::new(uri)
    }
}

impl TryFrom<&str> for AlternateTextRepresentation {
    type Error = ParamError;
    fn try_from(uri: &str) -> ParamResult<Self> {
        Self::new(uri)
    }
}

impl NamedValue for AlternateTextRepresentation {
    fn name(&self) -> &'static str {
        names::ALTREP
    }
    fn value(&self) -> Option<Cow<'_, str>> {
        self.0.as_ref().map(|uri| Cow::Borrowed(uri.as_str()))
    }
    fn render(&self) -> Option<String> {
        name_equals_quoted_value(self)
    }
}

impl fmt::Display for AlternateTextRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(uri) => write!(f, "{}=\"{uri}\"", names::ALTREP),
            None => Ok(()),
        }
    }
}
