use super::enumerated::Enumerated;
use super::keyword::Encoding;
use crate::error::{ParamError, ParamResult};
use crate::names;
use crate::render::NamedValue;
use std::borrow::Cow;
use std::fmt;

const BINARY: &str = "BINARY";

/// `ENCODING`, together with the `VALUE` type of the property it's attached to.
///
/// The two travel together because a `BINARY` value has to be `BASE64` encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InlineEncoding {
    encoding: Enumerated<Encoding>,
    value_type: Option<String>,
}

impl InlineEncoding {
    /// Blank text for either argument means that parameter is absent. The
    /// encoding is matched ignoring case; the value type is kept as given.
    pub fn new(encoding: &str, value_type: &str) -> ParamResult<Self> {
        let encoding = Enumerated::<Encoding>::new(encoding)?;
        let value_type = (!value_type.trim().is_empty()).then(|| value_type.to_string());
        let binary = value_type.as_deref().is_some_and(|v| v.eq_ignore_ascii_case(BINARY));
        if binary && encoding.keyword() != Some(Encoding::Base64) {
            tracing::debug!(encoding = encoding.as_str(), "Rejected binary value without base64 encoding");
            return Err(ParamError::EncodingValueMismatch { encoding: encoding.as_str().map(str::to_string) });
        }
        Ok(Self { encoding, value_type })
    }

    /// An encoding with no `VALUE` type.
    pub fn encoding(encoding: &str) -> ParamResult<Self> {
        Self::new(encoding, "")
    }

    #[must_use]
    pub fn keyword(&self) -> Option<Encoding> {
        self.encoding.keyword()
    }

    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    /// The encoding to decode with: the stored one, or `8BIT` when absent.
    #[must_use]
    pub fn effective(&self) -> Encoding {
        self.keyword().unwrap_or(Encoding::EightBit)
    }
}

impl From<Encoding> for InlineEncoding {
    fn from(encoding: Encoding) -> Self {
        Self { encoding: encoding.into(), value_type: None }
    }
}

impl NamedValue for InlineEncoding {
    fn name(&self) -> &'static str {
        names::ENCODING
    }
    fn value(&self) -> Option<Cow<'_, str>> {
        self.encoding.value()
    }
    /// `ENCODING=token`, followed by `;VALUE=type` when there is a value type.
    fn render(&self) -> Option<String> {
        let encoding = self.encoding.render()?;
        Some(match &self.value_type {
            Some(value_type) => format!("{encoding};{}={value_type}", names::VALUE),
            None => encoding,
        })
    }
}

impl fmt::Display for InlineEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(rendered) => f.write_str(&rendered),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_with_and_without_value_type() {
        let cases = [
            ("", "", None),
            ("8BIT", "", Some("ENCODING=8BIT")),
            ("8bit", " ", Some("ENCODING=8BIT")),
            ("8BIT", "someValue", Some("ENCODING=8BIT;VALUE=someValue")),
            ("BASE64", "BINARY", Some("ENCODING=BASE64;VALUE=BINARY")),
            ("base64", "binary", Some("ENCODING=BASE64;VALUE=binary")),
        ];
        for (encoding, value_type, expected) in cases {
            let inline = InlineEncoding::new(encoding, value_type).unwrap();
            assert_eq!(inline.render().as_deref(), expected, "{encoding:?}, {value_type:?}");
            assert_eq!(inline.to_string(), expected.unwrap_or_default());
        }
    }
    #[test]
    fn unknown_encoding() {
        let err = InlineEncoding::new("foo", "").unwrap_err();
        assert_eq!(
            err,
            ParamError::InvalidParameterValue {
                parameter: "ENCODING",
                received: "foo".to_string(),
                allowed: vec!["8BIT", "BASE64"],
                extensible: false,
            }
        );
        assert!(InlineEncoding::encoding("X-UUENCODE").is_err());
    }
    #[test]
    fn binary_needs_base64() {
        assert_eq!(
            InlineEncoding::new("8bit", "BINARY"),
            Err(ParamError::EncodingValueMismatch { encoding: Some("8BIT".to_string()) })
        );
        assert_eq!(
            InlineEncoding::new("", "Binary"),
            Err(ParamError::EncodingValueMismatch { encoding: None })
        );
    }
    #[test]
    fn accessors() {
        let inline = InlineEncoding::new("base64", "BINARY").unwrap();
        assert_eq!(inline.keyword(), Some(Encoding::Base64));
        assert_eq!(inline.value_type(), Some("BINARY"));
        assert_eq!(inline.value().unwrap(), "BASE64");
        assert_eq!(inline.effective(), Encoding::Base64);
    }
    #[test]
    fn absent_encoding_means_8bit() {
        let inline = InlineEncoding::default();
        assert!(inline.is_empty());
        assert_eq!(inline.keyword(), None);
        assert_eq!(inline.effective(), Encoding::EightBit);
    }
    #[test]
    fn value_type_without_encoding_renders_nothing() {
        let inline = InlineEncoding::new("", "TEXT").unwrap();
        assert!(inline.is_empty());
        assert_eq!(inline.value_type(), Some("TEXT"));
        assert_eq!(inline.render(), None);
    }
    #[test]
    fn single_argument_and_keyword() {
        assert_eq!(InlineEncoding::encoding("base64").unwrap(), InlineEncoding::from(Encoding::Base64));
        assert_eq!(InlineEncoding::from(Encoding::EightBit).to_string(), "ENCODING=8BIT");
    }
}
