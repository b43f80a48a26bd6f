//! Extracting a bare email address from loosely formatted text.
//!
//! Calendar users are often identified by whatever the caller has at hand:
//! `mailto:jane@example.com`, `jane@example.com`, or `Jane Doe <jane@example.com>`.
//! [`extract_address`] reduces all of those to `jane@example.com`.
//!
//! The grammar is the `mailbox` production of RFC 5322, without comments or
//! obsolete forms.
use crate::error::{ParamError, ParamResult};
use winnow::ascii::space0;
use winnow::combinator::{alt, cut_err, delimited, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, StrContext};
use winnow::token::{any, none_of, take_till, take_while};
use winnow::{ModalResult, Parser};

const MAILTO: &str = "mailto:";

mod msg {
    pub(super) const LOCAL_PART: &str = "a local part before the @";
    pub(super) const AT_SIGN: &str = "an @ between local part and domain";
    pub(super) const DOMAIN: &str = "a domain after the @";
    pub(super) const CLOSING_ANGLE: &str = "a closing > after the address";
}

/// Returns `text` without a leading `mailto:` (in any case), or `text` itself.
#[must_use]
pub fn strip_mailto(text: &str) -> &str {
    match text.get(..MAILTO.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(MAILTO) => &text[MAILTO.len()..],
        _ => text,
    }
}

/// Returns just the address part of `text`, which may be a `mailto:` URI, a
/// bare address, or an address in angle brackets preceded by a display name.
///
/// Blank input is an error ([`ParamError::MissingAddress`]); callers that treat
/// blank as "absent" must filter before calling.
pub fn extract_address(text: &str) -> ParamResult<String> {
    if text.trim().is_empty() {
        return Err(ParamError::MissingAddress);
    }
    let remainder = strip_mailto(text.trim());
    match mailbox.parse(remainder) {
        Ok(address) => Ok(address.to_string()),
        Err(err) => {
            let reason = reason(err.inner());
            tracing::debug!(address = text, %reason, "Rejected email address");
            Err(ParamError::InvalidAddress { address: text.to_string(), reason })
        }
    }
}

fn reason(err: &ContextError) -> String {
    let expected: Vec<String> = err
        .context()
        .filter_map(|ctx| match ctx {
            StrContext::Label(label) => Some((*label).to_string()),
            _ => None,
        })
        .collect();
    if expected.is_empty() {
        "unexpected text".to_string()
    } else {
        format!("expected {}", expected.join(", "))
    }
}

// Parsers
//==============================================================================

// RFC 5322 `atext`. Non-ASCII characters are allowed, as in RFC 6532.
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || !c.is_ascii()
}

fn dot_atom<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    separated(1.., take_while(1.., is_atext), '.').map(|()| ()).take().parse_next(input)
}

fn quoted_string<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    let quoted_char = alt((preceded('\\', any), none_of(['"', '\\'])));
    delimited('"', repeat(0.., quoted_char).map(|()| ()), '"').take().parse_next(input)
}

fn domain_name<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    separated(1.., take_while(1.., is_domain_char), '.').map(|()| ()).take().parse_next(input)
}

fn domain_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited('[', take_while(0.., |c: char| !matches!(c, '[' | ']' | '\\')), ']')
        .take()
        .parse_next(input)
}

fn addr_spec<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        alt((dot_atom, quoted_string)).context(StrContext::Label(msg::LOCAL_PART)),
        '@'.context(StrContext::Label(msg::AT_SIGN)),
        cut_err(alt((domain_name, domain_literal)).context(StrContext::Label(msg::DOMAIN))),
    )
        .take()
        .parse_next(input)
}

fn angle_addr<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited(
        ('<', space0),
        cut_err(addr_spec),
        cut_err((space0, '>')).context(StrContext::Label(msg::CLOSING_ANGLE)),
    )
    .parse_next(input)
}

// A display name is either a quoted string or any run of text up to the `<`
fn name_addr<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded((alt((quoted_string, take_till(0.., '<'))), space0), angle_addr).parse_next(input)
}

fn mailbox<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    terminated(alt((name_addr, addr_spec)), space0).parse_next(input)
}
