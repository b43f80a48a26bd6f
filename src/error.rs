use thiserror::Error;

pub type ParamResult<T> = Result<T, ParamError>;

/// Why a parameter value couldn't be constructed.
///
/// Every variant is a local validation failure, reported by the constructor
/// that received the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("{received:?} is not a valid {parameter} value; expected {}", expected(.allowed, *.extensible))]
    InvalidParameterValue {
        parameter: &'static str,
        received: String,
        allowed: Vec<&'static str>,
        extensible: bool,
    },
    #[error("{address:?} is not a valid email address ({reason})")]
    InvalidAddress { address: String, reason: String },
    #[error("An email address is required, but the input was blank")]
    MissingAddress,
    #[error("{0:?} is not a known IETF language tag")]
    UnknownLanguageTag(String),
    #[error("{0:?} is not a valid media type")]
    InvalidMediaType(String),
    #[error("VALUE=BINARY requires ENCODING=BASE64, but the encoding is {}", .encoding.as_deref().unwrap_or("missing"))]
    EncodingValueMismatch { encoding: Option<String> },
    #[error("{0} requires a value, but the input was blank")]
    MissingValue(&'static str),
    #[error("{uri:?} is not a valid URI ({reason})")]
    InvalidUri { uri: String, reason: String },
}

fn expected(allowed: &[&'static str], extensible: bool) -> String {
    let mut list = allowed.join(", ");
    if extensible {
        list.push_str(", or an X- name");
    }
    list
}
