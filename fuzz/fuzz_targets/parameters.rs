#![no_main]

use icalparam::{
    CalendarUserType, CommonName, DirectoryEntryReference, FormatType, InlineEncoding, Language, Membership,
    NamedValue, ParticipationStatus,
};
use libfuzzer_sys::fuzz_target;

// Constructors must never panic, and rebuilding from a value must give the same value.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };
    if let Ok(partstat) = ParticipationStatus::new(text) {
        if let Some(value) = partstat.value() {
            assert_eq!(ParticipationStatus::new(&value).unwrap(), partstat, "text: {text:?}");
        }
    }
    if let Ok(cutype) = CalendarUserType::new(text) {
        let _ = cutype.render();
    }
    if let Ok(members) = Membership::new(text.split(',')) {
        assert_eq!(Membership::new(members.addresses()).unwrap(), members, "text: {text:?}");
    }
    if let Ok(lang) = Language::new(text) {
        if let Some(tag) = lang.tag() {
            assert_eq!(Language::new(tag).unwrap(), lang);
        }
    }
    if let Ok(fmt) = FormatType::new(text) {
        let _ = fmt.render();
    }
    let _ = DirectoryEntryReference::new(text).map(|dir| dir.render());
    let _ = InlineEncoding::new(text, text).map(|enc| enc.render());
    let _ = CommonName::new(text).render();
});
