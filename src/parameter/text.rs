//! Parameters whose value is free text (`CN`) or text with its own grammar
//! (`FMTTYPE`, `LANGUAGE`).
use crate::error::{ParamError, ParamResult};
use crate::language::normalize_language_tag;
use crate::names;
use crate::render::{NamedValue, name_equals_quoted_value};
use regex::Regex;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Common name
//==============================================================================

/// `CN`: the display name of the calendar user a property refers to.
///
/// Any text is accepted. It's kept exactly as given, and always rendered quoted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CommonName(Option<String>);

impl CommonName {
    #[must_use]
    pub fn new(text: &str) -> Self {
        if text.trim().is_empty() { Self(None) } else { Self(Some(text.to_string())) }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for CommonName {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl FromStr for CommonName {
    type Err = Infallible;
    fn from_str(text: &str) -> Result<Self, Infallible> {
        Ok(Self::new(text))
    }
}

impl NamedValue for CommonName {
    fn name(&self) -> &'static str {
        names::CN
    }
    fn value(&self) -> Option<Cow<'_, str>> {
        self.as_str().map(Cow::Borrowed)
    }
    fn render(&self) -> Option<String> {
        name_equals_quoted_value(self)
    }
}

impl fmt::Display for CommonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "{}=\"{text}\"", names::CN),
            None => Ok(()),
        }
    }
}

// Format type
//==============================================================================

// type "/" subtype *(";" attribute "=" (token / quoted-string)), as in RFC 6838
static MEDIA_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(application|audio|font|example|image|message|model|multipart|text|video|x-[0-9a-z!#$%&'*+.^_`|~-]+)/[0-9a-z!#$%&'*+.^_`|~-]+(?:[ \t]*;[ \t]*[0-9a-z!#$%&'*+.^_`|~-]+=(?:[0-9a-z!#$%&'*+.^_`|~-]+|"(?:[^"\\]|\\.)*"))*$"#,
    )
    .unwrap()
});

/// `FMTTYPE`: the media type of a referenced object, such as `application/msword`.
///
/// The top-level type must be one of the registered ones or an `x-` type. The
/// text is kept as given; media types are case-insensitive, so it isn't recased.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatType(Option<String>);

impl FormatType {
    pub fn new(media_type: &str) -> ParamResult<Self> {
        if media_type.trim().is_empty() {
            return Ok(Self(None));
        }
        if MEDIA_TYPE.is_match(media_type) {
            Ok(Self(Some(media_type.to_string())))
        } else {
            tracing::debug!(media_type, "Rejected media type");
            Err(ParamError::InvalidMediaType(media_type.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The top-level type, e.g. `application` for `application/msword`.
    #[must_use]
    pub fn top_level(&self) -> Option<&str> {
        self.as_str().and_then(|media_type| media_type.split('/').next())
    }
}

impl FromStr for FormatType {
    type Err = ParamError;
    fn from_str(media_type: &str) -> ParamResult<Self> {
        Self::new(media_type)
    }
}

impl TryFrom<&str> for FormatType {
    type Error = ParamError;
    fn try_from(media_type: &str) -> ParamResult<Self> {
        Self::new(media_type)
    }
}

impl NamedValue for FormatType {
    fn name(&self) -> &'static str {
        names::FMTTYPE
    }
    fn value(&self) -> Option<Cow<'_, str>> {
        self.as_str().map(Cow::Borrowed)
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(media_type) => write!(f, "{}={media_type}", names::FMTTYPE),
            None => Ok(()),
        }
    }
}

// Language
//==============================================================================

/// `LANGUAGE`: the language of a property's text, as a known IETF language tag
/// in its conventional casing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Language(Option<&'static str>);

impl Language {
    pub fn new(tag: &str) -> ParamResult<Self> {
        if tag.trim().is_empty() {
            return Ok(Self(None));
        }
        Ok(Self(Some(normalize_language_tag(tag)?)))
    }

    #[must_use]
    pub fn tag(&self) -> Option<&'static str> {
        self.0
    }
}

impl FromStr for Language {
    type Err = ParamError;
    fn from_str(tag: &str) -> ParamResult<Self> {
        Self::new(tag)
    }
}

impl TryFrom<&str> for Language {
    type Error = ParamError;
    fn try_from(tag: &str) -> ParamResult<Self> {
        Self::new(tag)
    }
}

impl NamedValue for Language {
    fn name(&self) -> &'static str {
        names::LANGUAGE
    }
    fn value(&self) -> Option<Cow<'_, str>> {
        self.0.map(Cow::Borrowed)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(tag) => write!(f, "{}={tag}", names::LANGUAGE),
            None => Ok(()),
        }
    }
}
