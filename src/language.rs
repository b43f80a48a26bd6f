//! Canonical casing for IETF language tags.
//!
//! RFC 5646 says language tags are case-insensitive but have a conventional
//! casing (`en-GB`, `zh-Hant-TW`, `sr-Latn`). We only accept tags we know, and
//! always hand back the conventional spelling.
use crate::error::{ParamError, ParamResult};
use crate::names;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

const KNOWN_TAGS: &str = include_str!("../assets/language-tags.txt");

// Lowercased tag => canonical tag. Built on first use and never modified afterward.
static BY_LOWERCASE: LazyLock<FxHashMap<String, &'static str>> = LazyLock::new(|| {
    let table: FxHashMap<_, _> = known_tags().map(|tag| (tag.to_ascii_lowercase(), tag)).collect();
    tracing::trace!(count = table.len(), "Built language tag table");
    table
});

fn known_tags() -> impl Iterator<Item = &'static str> {
    KNOWN_TAGS.lines().map(str::trim).filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Returns the canonical spelling of `tag`, matching case-insensitively.
///
/// Unlike the `Language` parameter, this requires a non-blank tag.
pub fn normalize_language_tag(tag: &str) -> ParamResult<&'static str> {
    if tag.trim().is_empty() {
        return Err(ParamError::MissingValue(names::LANGUAGE));
    }
    match BY_LOWERCASE.get(&tag.to_ascii_lowercase()).copied() {
        Some(canonical) => Ok(canonical),
        None => {
            tracing::debug!(tag, "Rejected unknown language tag");
            Err(ParamError::UnknownLanguageTag(tag.to_string()))
        }
    }
}

#[must_use]
pub fn is_known_language_tag(tag: &str) -> bool {
    BY_LOWERCASE.contains_key(&tag.to_ascii_lowercase())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_casing() {
        let cases = [
            ("en-GB", "en-GB"),
            ("en-gb", "en-GB"),
            ("EN-GB", "en-GB"),
            ("en", "en"),
            ("EN", "en"),
            ("no", "no"),
            ("zh-hant-tw", "zh-Hant-TW"),
            ("SR-LATN", "sr-Latn"),
            ("es-419", "es-419"),
        ];
        for (tag, expected) in cases {
            assert_eq!(normalize_language_tag(tag).unwrap(), expected, "tag: {tag}");
        }
    }
    #[test]
    fn unknown_tags() {
        for tag in ["foo", "nope", "en-XX", "en_GB", " en-GB"] {
            assert_eq!(
                normalize_language_tag(tag),
                Err(ParamError::UnknownLanguageTag(tag.to_string())),
                "tag: {tag}"
            );
        }
    }
    #[test]
    fn blank_is_an_error() {
        assert_eq!(normalize_language_tag(""), Err(ParamError::MissingValue("LANGUAGE")));
        assert_eq!(normalize_language_tag(" \t"), Err(ParamError::MissingValue("LANGUAGE")));
        assert_eq!(
            normalize_language_tag("").unwrap_err().to_string(),
            "LANGUAGE requires a value, but the input was blank"
        );
    }
    #[test]
    fn normalizing_is_idempotent() {
        for tag in known_tags() {
            assert_eq!(normalize_language_tag(tag).unwrap(), tag);
        }
    }
    #[test]
    fn known() {
        assert!(is_known_language_tag("de-at"));
        assert!(!is_known_language_tag("de-xx"));
    }
    #[test]
    fn bundled_tags_are_unique_and_canonical() {
        let tags: Vec<_> = known_tags().collect();
        assert_eq!(tags.len(), BY_LOWERCASE.len(), "duplicate tags (ignoring case) in the table");
        for tag in tags {
            let parsed = oxilangtag::LanguageTag::parse(tag);
            assert!(parsed.is_ok(), "{tag} is not a well-formed language tag");
        }
    }
}
