//! Parameter names, spelled the way RFC 5545 (and RFC 5546 for `RANGE`) spells them.

pub const ALTREP: &str = "ALTREP";
pub const CN: &str = "CN";
pub const CUTYPE: &str = "CUTYPE";
pub const DELEGATED_FROM: &str = "DELEGATED-FROM";
pub const DELEGATED_TO: &str = "DELEGATED-TO";
pub const DIR: &str = "DIR";
pub const ENCODING: &str = "ENCODING";
pub const FBTYPE: &str = "FBTYPE";
pub const FMTTYPE: &str = "FMTTYPE";
pub const LANGUAGE: &str = "LANGUAGE";
pub const MEMBER: &str = "MEMBER";
pub const PARTSTAT: &str = "PARTSTAT";
pub const RANGE: &str = "RANGE";
pub const RELATED: &str = "RELATED";
pub const RELTYPE: &str = "RELTYPE";
pub const VALUE: &str = "VALUE";

/// The name of the `CAL-ADDRESS` value type, which isn't a parameter but is rendered alongside them.
pub const CAL_ADDRESS: &str = "CAL-ADDRESS";

/// Every parameter name this crate knows, in sorted order.
#[rustfmt::skip]
pub const NAMES: [&str; 16] = [
    ALTREP, CN, CUTYPE, DELEGATED_FROM, DELEGATED_TO, DIR, ENCODING, FBTYPE,
    FMTTYPE, LANGUAGE, MEMBER, PARTSTAT, RANGE, RELATED, RELTYPE, VALUE,
];

/// Returns the RFC spelling of a known parameter name, matched case-insensitively.
#[must_use]
pub fn known_name(name: &str) -> Option<&'static str> {
    NAMES.iter().copied().find(|known| known.eq_ignore_ascii_case(name))
}

/// True if `text` is an experimental name: anything starting with `X-` (in
/// either case) that can stand as an unquoted parameter value.
///
/// An unquoted value can't hold control characters (other than tab), `"`, `;`,
/// `:`, or `,`.
#[must_use]
pub fn is_x_name(text: &str) -> bool {
    let Some(prefix) = text.get(..2) else { return false };
    prefix.eq_ignore_ascii_case("X-") && text[2..].chars().all(is_safe_char)
}

fn is_safe_char(c: char) -> bool {
    (c == '\t' || !c.is_control()) && !matches!(c, '"' | ';' | ':' | ',')
}
