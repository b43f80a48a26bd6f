//! Typed property parameters.
//!
//! Each type validates and normalizes its input when it's constructed, and
//! renders itself through [`NamedValue`](crate::render::NamedValue).
mod address_list;
mod encoding;
mod enumerated;
mod keyword;
mod text;
mod uri;

pub use address_list::{DelegatedFrom, DelegatedTo, Membership};
pub use encoding::InlineEncoding;
pub use enumerated::{
    AlarmTriggerRelationship, CalendarUserType, Enumerated, FreeBusyTimeType, ParticipationStatus,
    RecurrenceIdentifierRange, RelationshipType, Token,
};
pub use keyword::{CUType, Encoding, FBType, Keyword, PartStat, Range, RelType, Related};
pub use text::{CommonName, FormatType, Language};
pub use uri::{AlternateTextRepresentation, DirectoryEntryReference};
