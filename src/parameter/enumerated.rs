use super::keyword::{CUType, FBType, Keyword, PartStat, Range, RelType, Related};
use crate::error::{ParamError, ParamResult};
use crate::names::is_x_name;
use crate::render::NamedValue;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A value of an enumerated parameter: one of the RFC keywords, or an
/// experimental `X-` name kept exactly as the caller spelled it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token<K> {
    Known(K),
    X(String),
}
impl<K: Keyword> Token<K> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Token::Known(keyword) => keyword.as_str(),
            Token::X(name) => name,
        }
    }
}

/// An enumerated parameter (`RELATED`, `CUTYPE`, `FBTYPE`, `PARTSTAT`,
/// `RELTYPE`, `RANGE`, `ENCODING`), which may also be empty.
///
/// Construction is the only place validation happens: an `Enumerated` that
/// exists holds either nothing or a valid value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Enumerated<K>(Option<Token<K>>);

impl<K: Keyword> Enumerated<K> {
    /// Validates and normalizes `raw`.
    ///
    /// * Blank text gives the empty parameter.
    /// * A keyword (in any case) is stored in its RFC spelling.
    /// * If the parameter allows them, an `X-` name is stored verbatim.
    /// * Anything else is an [`ParamError::InvalidParameterValue`].
    pub fn new(raw: &str) -> ParamResult<Self> {
        Self::from_subset(raw, K::ALL)
    }

    /// Like [`Enumerated::new`], but only the keywords in `allowed` are accepted.
    pub(crate) fn from_subset(raw: &str, allowed: &[K]) -> ParamResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self(None));
        }
        if let Some(keyword) = K::from_caseless(raw).filter(|k| allowed.contains(k)) {
            return Ok(Self(Some(Token::Known(keyword))));
        }
        if K::EXTENSIBLE && is_x_name(raw) {
            return Ok(Self(Some(Token::X(raw.to_string()))));
        }
        tracing::debug!(parameter = K::PARAM_NAME, value = raw, "Rejected parameter value");
        Err(invalid_value(raw, allowed))
    }

    /// The empty parameter.
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn token(&self) -> Option<&Token<K>> {
        self.0.as_ref()
    }

    /// The keyword, or `None` if the parameter is empty or holds an `X-` name.
    #[must_use]
    pub fn keyword(&self) -> Option<K> {
        match &self.0 {
            Some(Token::Known(keyword)) => Some(*keyword),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_ref().map(Token::as_str)
    }

    #[must_use]
    pub fn is_extension(&self) -> bool {
        matches!(self.0, Some(Token::X(_)))
    }

    /// The value to act on: the stored value, or the RFC default when the parameter is empty.
    #[must_use]
    pub fn effective(&self) -> Option<&str> {
        self.as_str().or_else(|| K::DEFAULT.map(Keyword::as_str))
    }
}

pub(crate) fn invalid_value<K: Keyword>(raw: &str, allowed: &[K]) -> ParamError {
    ParamError::InvalidParameterValue {
        parameter: K::PARAM_NAME,
        received: raw.to_string(),
        allowed: allowed.iter().map(|k| k.as_str()).collect(),
        extensible: K::EXTENSIBLE,
    }
}

impl<K> Default for Enumerated<K> {
    fn default() -> Self {
        Self(None)
    }
}

impl<K: Keyword> From<K> for Enumerated<K> {
    fn from(keyword: K) -> Self {
        Self(Some(Token::Known(keyword)))
    }
}

impl<K: Keyword> FromStr for Enumerated<K> {
    type Err = ParamError;
    fn from_str(raw: &str) -> ParamResult<Self> {
        Self::new(raw)
    }
}

impl<K: Keyword> TryFrom<&str> for Enumerated<K> {
    type Error = ParamError;
    fn try_from(raw: &str) -> ParamResult<Self> {
        Self::new(raw)
    }
}

impl<K: Keyword> NamedValue for Enumerated<K> {
    fn name(&self) -> &'static str {
        K::PARAM_NAME
    }
    fn value(&self) -> Option<Cow<'_, str>> {
        self.as_str().map(Cow::Borrowed)
    }
}

impl<K: Keyword> fmt::Display for Enumerated<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(value) => write!(f, "{}={value}", K::PARAM_NAME),
            None => Ok(()),
        }
    }
}

// Parameter types
//==============================================================================

/// `RELATED=START` or `RELATED=END`
pub type AlarmTriggerRelationship = Enumerated<Related>;
/// `CUTYPE=INDIVIDUAL` and friends
pub type CalendarUserType = Enumerated<CUType>;
/// `FBTYPE=BUSY` and friends
pub type FreeBusyTimeType = Enumerated<FBType>;
/// `PARTSTAT=ACCEPTED` and friends
pub type ParticipationStatus = Enumerated<PartStat>;
/// `RELTYPE=PARENT` and friends
pub type RelationshipType = Enumerated<RelType>;
/// `RANGE=THISANDFUTURE`
pub type RecurrenceIdentifierRange = Enumerated<Range>;

impl Enumerated<FBType> {
    /// True for every value except `FREE`. Unrecognized `X-` names count as
    /// busy, as RFC 5545 requires. An empty parameter is not busy.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        match &self.0 {
            None | Some(Token::Known(FBType::Free)) => false,
            Some(_) => true,
        }
    }
}

impl Enumerated<PartStat> {
    /// A participation status valid in a `VEVENT`.
    pub fn for_event(raw: &str) -> ParamResult<Self> {
        Self::from_subset(raw, PartStat::EVENT)
    }
    /// A participation status valid in a `VTODO`.
    pub fn for_todo(raw: &str) -> ParamResult<Self> {
        Self::from_subset(raw, PartStat::TODO)
    }
    /// A participation status valid in a `VJOURNAL`.
    pub fn for_journal(raw: &str) -> ParamResult<Self> {
        Self::from_subset(raw, PartStat::JOURNAL)
    }
}
