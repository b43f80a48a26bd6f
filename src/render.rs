//! The rendering contract shared by every parameter type.
//!
//! A parameter renders as `NAME=value` or `NAME="value"`, or not at all when it's empty.
use iri_string::percent_encode::PercentEncodedForUri;
use std::borrow::Cow;
use std::fmt::Write;

/// A parameter with a fixed RFC name and an optional canonical value.
///
/// The trait is object safe, so a property can hold its parameters as
/// `&dyn NamedValue` and render them with [`join_parameters`].
pub trait NamedValue {
    /// The parameter name, in the casing RFC 5545 uses.
    fn name(&self) -> &'static str;

    /// The canonical value, or `None` if the parameter is absent.
    fn value(&self) -> Option<Cow<'_, str>>;

    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.value().is_none()
    }

    /// The wire form of the parameter, or `None` if it's empty. Never fails.
    #[must_use]
    fn render(&self) -> Option<String> {
        name_equals_value(self)
    }
}

/// `NAME=value`, or `None` if `param` is empty.
#[must_use]
pub fn name_equals_value<P: NamedValue + ?Sized>(param: &P) -> Option<String> {
    param.value().map(|value| format!("{}={value}", param.name()))
}

/// `NAME="value"`, or `None` if `param` is empty.
#[must_use]
pub fn name_equals_quoted_value<P: NamedValue + ?Sized>(param: &P) -> Option<String> {
    param.value().map(|value| format!("{}=\"{value}\"", param.name()))
}

/// Each address as `"mailto:address"`, joined with commas and no spaces.
///
/// Characters a `mailto:` URI can't carry as-is, such as the quotes and spaces
/// of a quoted local part, are percent-encoded.
#[must_use]
pub fn quoted_mailto_list<I, S>(addresses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = String::new();
    for (n, address) in addresses.into_iter().enumerate() {
        if n > 0 {
            list.push(',');
        }
        // Writing to a `String` can't fail
        let _ = write!(list, "\"mailto:{}\"", PercentEncodedForUri::from_path(address.as_ref()));
    }
    list
}

/// The `;`-delimited parameter list of a content line, skipping empty parameters.
/// Each non-empty parameter is preceded by a semicolon, so the result can be
/// appended directly to a property name: `ATTENDEE` + `;CN="Jane":...`.
#[must_use]
pub fn join_parameters<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = &'a dyn NamedValue>,
{
    let mut list = String::new();
    for rendered in params.into_iter().filter_map(|param| param.render()) {
        list.push(';');
        list.push_str(&rendered);
    }
    list
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixed(Option<&'static str>);
    impl NamedValue for Fixed {
        fn name(&self) -> &'static str {
            "FIXED"
        }
        fn value(&self) -> Option<Cow<'_, str>> {
            self.0.map(Cow::Borrowed)
        }
    }

    #[test]
    fn empty_renders_nothing() {
        let empty = Fixed(None);
        assert!(empty.is_empty());
        assert_eq!(empty.render(), None);
        assert_eq!(name_equals_quoted_value(&empty), None);
    }
    #[test]
    fn unquoted_and_quoted() {
        let full = Fixed(Some("value"));
        assert!(!full.is_empty());
        assert_eq!(name_equals_value(&full).unwrap(), "FIXED=value");
        assert_eq!(name_equals_quoted_value(&full).unwrap(), r#"FIXED="value""#);
    }
    #[test]
    fn mailto_lists() {
        assert_eq!(quoted_mailto_list(Vec::<String>::new()), "");
        assert_eq!(quoted_mailto_list(["a@x.com"]), r#""mailto:a@x.com""#);
        assert_eq!(
            quoted_mailto_list(["a@x.com", "b@x.com"]),
            r#""mailto:a@x.com","mailto:b@x.com""#
        );
    }
    #[test]
    fn mailto_lists_escape_quoted_local_parts() {
        assert_eq!(
            quoted_mailto_list([r#""john doe"@example.org"#, "first.last+tag@example.com"]),
            r#""mailto:%22john%20doe%22@example.org","mailto:first.last+tag@example.com""#
        );
        assert_eq!(quoted_mailto_list(["100%@example.org"]), r#""mailto:100%25@example.org""#);
    }
    #[test]
    fn joined_parameters_skip_empties() {
        let a = Fixed(Some("a"));
        let none = Fixed(None);
        let params: [&dyn NamedValue; 3] = [&a, &none, &a];
        assert_eq!(join_parameters(params), ";FIXED=a;FIXED=a");
        let only_empty: [&dyn NamedValue; 1] = [&none];
        assert_eq!(join_parameters(only_empty), "");
    }
}
