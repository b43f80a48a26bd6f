use crate::names;
use crate::parameter::{CalendarUserType, CommonName};
use crate::render::NamedValue;
use iri_string::types::{UriStr, UriString};
use std::fmt;

/// A `CAL-ADDRESS` value: the URI of a calendar user (usually `mailto:`), with
/// the parameters that describe who that is.
///
/// ```text
/// ORGANIZER;CN="John Smith":mailto:jsmith@example.com
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CalAddress {
    uri: UriString,
    common_name: CommonName,
    user_type: CalendarUserType,
}

impl CalAddress {
    pub const NAME: &'static str = names::CAL_ADDRESS;

    /// The URI is kept in RFC 3986 normal form, so `MAILTO:Jane@Example.com`
    /// becomes `mailto:Jane@Example.com`.
    #[must_use]
    pub fn new(uri: UriString) -> Self {
        let uri = UriString::from(uri.normalize());
        Self { uri, common_name: CommonName::default(), user_type: CalendarUserType::default() }
    }

    #[must_use]
    pub fn with_common_name(mut self, common_name: CommonName) -> Self {
        self.common_name = common_name;
        self
    }

    #[must_use]
    pub fn with_user_type(mut self, user_type: CalendarUserType) -> Self {
        self.user_type = user_type;
        self
    }

    #[must_use]
    pub fn uri(&self) -> &UriStr {
        self.uri.as_slice()
    }

    #[must_use]
    pub fn common_name(&self) -> &CommonName {
        &self.common_name
    }

    #[must_use]
    pub fn user_type(&self) -> &CalendarUserType {
        &self.user_type
    }

    /// The rendered `CN` and `CUTYPE` parameters, skipping whichever is empty.
    #[must_use]
    pub fn parameters(&self) -> Vec<String> {
        let params: [&dyn NamedValue; 2] = [&self.common_name, &self.user_type];
        params.iter().filter_map(|param| param.render()).collect()
    }

    /// `CN="name":uri`, or just the URI when there's no common name.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<UriString> for CalAddress {
    fn from(uri: UriString) -> Self {
        Self::new(uri)
    }
}

impl fmt::Display for CalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.common_name.is_empty() {
            write!(f, "{}:", self.common_name)?;
        }
        write!(f, "{}", self.uri)
    }
}
