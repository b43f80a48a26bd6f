use crate::names;
use std::fmt;

/// The fixed set of values RFC 5545 defines for an enumerated parameter.
///
/// Implementors are fieldless enums whose variants are listed in `ALL` in the
/// order the RFC declares them.
pub trait Keyword: Copy + Eq + fmt::Debug + 'static {
    /// The name of the parameter this keyword is a value of.
    const PARAM_NAME: &'static str;
    /// Every keyword, in RFC declaration order.
    const ALL: &'static [Self];
    /// Whether the parameter also accepts experimental `X-` names.
    const EXTENSIBLE: bool;
    /// The value the RFC says to assume when the parameter is missing.
    const DEFAULT: Option<Self>;

    /// The RFC spelling of this keyword.
    fn as_str(self) -> &'static str;

    /// The first keyword in `ALL` matching `text`, ignoring case.
    #[must_use]
    fn from_caseless(text: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str().eq_ignore_ascii_case(text))
    }
}

macro_rules! keywords {
    ($(
        $(#[$meta:meta])*
        $kind:ident($param:expr, extensible: $ext:literal, default: $default:expr) {
            $($(#[$vmeta:meta])* $variant:ident = $text:literal),+ $(,)?
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $kind {
            $($(#[$vmeta])* $variant,)+
        }
        impl Keyword for $kind {
            const PARAM_NAME: &'static str = $param;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const EXTENSIBLE: bool = $ext;
            const DEFAULT: Option<Self> = $default;

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }
        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )+};
}

keywords! {
    /// `RELATED`: whether an alarm triggers relative to the start or the end of its component.
    Related(names::RELATED, extensible: false, default: Some(Related::Start)) {
        Start = "START",
        End = "END",
    }

    /// `CUTYPE`: the kind of calendar user an address refers to.
    CUType(names::CUTYPE, extensible: true, default: Some(CUType::Individual)) {
        Individual = "INDIVIDUAL",
        Group = "GROUP",
        Resource = "RESOURCE",
        Room = "ROOM",
        Unknown = "UNKNOWN",
    }

    /// `FBTYPE`: free or busy time. Unrecognized values are treated as `BUSY`.
    FBType(names::FBTYPE, extensible: true, default: Some(FBType::Busy)) {
        Free = "FREE",
        Busy = "BUSY",
        BusyUnavailable = "BUSY-UNAVAILABLE",
        BusyTentative = "BUSY-TENTATIVE",
    }

    /// `PARTSTAT`: a calendar user's participation status. Not every status
    /// applies to every component; see [`PartStat::EVENT`], [`PartStat::TODO`],
    /// and [`PartStat::JOURNAL`].
    PartStat(names::PARTSTAT, extensible: true, default: Some(PartStat::NeedsAction)) {
        NeedsAction = "NEEDS-ACTION",
        Accepted = "ACCEPTED",
        Declined = "DECLINED",
        Tentative = "TENTATIVE",
        Delegated = "DELEGATED",
        /// To-dos only
        Completed = "COMPLETED",
        /// To-dos only
        InProcess = "IN-PROCESS",
    }

    /// `RELTYPE`: how a related component is related to this one.
    RelType(names::RELTYPE, extensible: true, default: Some(RelType::Parent)) {
        Parent = "PARENT",
        Child = "CHILD",
        Sibling = "SIBLING",
    }

    /// `RANGE`: the recurrence instances a `RECURRENCE-ID` applies to.
    /// RFC 5545 dropped `THISANDPRIOR`, leaving a single value.
    Range(names::RANGE, extensible: false, default: None) {
        ThisAndFuture = "THISANDFUTURE",
    }

    /// `ENCODING`: the inline encoding of a property value.
    Encoding(names::ENCODING, extensible: false, default: Some(Encoding::EightBit)) {
        EightBit = "8BIT",
        Base64 = "BASE64",
    }
}

impl PartStat {
    /// The statuses allowed in a `VEVENT`.
    pub const EVENT: &'static [Self] =
        &[Self::NeedsAction, Self::Accepted, Self::Declined, Self::Tentative, Self::Delegated];
    /// The statuses allowed in a `VTODO`.
    pub const TODO: &'static [Self] = Self::ALL;
    /// The statuses allowed in a `VJOURNAL`.
    pub const JOURNAL: &'static [Self] = &[Self::NeedsAction, Self::Accepted, Self::Declined];
}
