use icalparam::{
    AlarmTriggerRelationship, AlternateTextRepresentation, CalendarUserType, CommonName, DelegatedFrom,
    DelegatedTo, DirectoryEntryReference, FormatType, FreeBusyTimeType, InlineEncoding, Language, Membership,
    NamedValue, ParticipationStatus, RecurrenceIdentifierRange, RelationshipType, join_parameters,
};
use pretty_assertions::assert_eq;

fn rendered(param: &dyn NamedValue) -> String {
    param.render().unwrap_or_else(|| panic!("{} should not be empty", param.name()))
}

#[test_log::test]
fn enumerated_parameters() {
    assert_eq!(rendered(&AlarmTriggerRelationship::new("start").unwrap()), "RELATED=START");
    assert_eq!(rendered(&AlarmTriggerRelationship::new("END").unwrap()), "RELATED=END");
    assert_eq!(rendered(&CalendarUserType::new("unknown").unwrap()), "CUTYPE=UNKNOWN");
    assert_eq!(rendered(&CalendarUserType::new("X-ROBOT").unwrap()), "CUTYPE=X-ROBOT");
    assert_eq!(rendered(&FreeBusyTimeType::new("busy-unavailable").unwrap()), "FBTYPE=BUSY-UNAVAILABLE");
    assert_eq!(rendered(&ParticipationStatus::new("needs-action").unwrap()), "PARTSTAT=NEEDS-ACTION");
    assert_eq!(rendered(&RelationshipType::new("Sibling").unwrap()), "RELTYPE=SIBLING");
    assert_eq!(rendered(&RecurrenceIdentifierRange::new("thisandfuture").unwrap()), "RANGE=THISANDFUTURE");
}

#[test_log::test]
fn quoted_parameters() {
    assert_eq!(rendered(&CommonName::new("Rian Stockbower")), r#"CN="Rian Stockbower""#);
    assert_eq!(
        rendered(&DirectoryEntryReference::new("ldap://example.com:6666/o=ABC%20Industries,c=US???(cn=Jim%20Dolittle)").unwrap()),
        r#"DIR="ldap://example.com:6666/o=ABC%20Industries,c=US???(cn=Jim%20Dolittle)""#
    );
    assert_eq!(
        rendered(&AlternateTextRepresentation::new("CID:part3.msg.970415T083000@example.com").unwrap()),
        r#"ALTREP="CID:part3.msg.970415T083000@example.com""#
    );
}

#[test_log::test]
fn address_lists() {
    assert_eq!(
        rendered(&DelegatedFrom::new(["mailto:a@x.com", "b@x.com"]).unwrap()),
        r#"DELEGATED-FROM="mailto:a@x.com","mailto:b@x.com""#
    );
    assert_eq!(rendered(&DelegatedTo::single("a@x.com").unwrap()), r#"DELEGATED-TO="mailto:a@x.com""#);
    assert_eq!(
        rendered(&Membership::new(["Group A <a@x.com>", "MAILTO:b@x.com"]).unwrap()),
        r#"MEMBER="mailto:a@x.com","mailto:b@x.com""#
    );
}

#[test_log::test]
fn other_parameters() {
    assert_eq!(rendered(&FormatType::new("application/msword").unwrap()), "FMTTYPE=application/msword");
    assert_eq!(rendered(&Language::new("en-gb").unwrap()), "LANGUAGE=en-GB");
    assert_eq!(rendered(&InlineEncoding::encoding("8bit").unwrap()), "ENCODING=8BIT");
    assert_eq!(
        rendered(&InlineEncoding::new("BASE64", "BINARY").unwrap()),
        "ENCODING=BASE64;VALUE=BINARY"
    );
}

#[test_log::test]
fn attendee_parameter_list() {
    let cutype = CalendarUserType::new("individual").unwrap();
    let partstat = ParticipationStatus::for_event("accepted").unwrap();
    let cn = CommonName::new("Jane Doe");
    let unset = RelationshipType::default();
    let delegated = DelegatedFrom::single("boss@example.com").unwrap();
    let params: [&dyn NamedValue; 5] = [&cutype, &partstat, &unset, &cn, &delegated];
    assert_eq!(
        format!("ATTENDEE{}:mailto:jane@example.com", join_parameters(params)),
        r#"ATTENDEE;CUTYPE=INDIVIDUAL;PARTSTAT=ACCEPTED;CN="Jane Doe";DELEGATED-FROM="mailto:boss@example.com":mailto:jane@example.com"#
    );
}
