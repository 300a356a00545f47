use crate::enum_table::{
    CanonicalValue, EnumForm, EnumKey, EnumTable, join, normalize, resolve, resolve_many,
};
use crate::error::EnumError;

const FILTER: EnumTable = EnumTable::new("filter", EnumForm::Code, &[("ALL", 0), ("NONE", 1)]);

const COLOR: EnumTable = EnumTable::new(
    "color",
    EnumForm::Name,
    &[("RED", 10), ("GREEN", 20), ("BLUE", 30)],
);

/// **VALUE**: Lower-case names resolve to the table's code form.
#[test]
fn given_lowercase_name_when_normalize_then_returns_code() {
    assert_eq!(normalize("all", &FILTER).unwrap(), CanonicalValue::Code(0));
}

#[test]
fn given_numeric_string_when_normalize_then_resolves_by_code() {
    assert_eq!(normalize("1", &FILTER).unwrap(), CanonicalValue::Code(1));
    assert_eq!(normalize(" 1 ", &FILTER).unwrap(), CanonicalValue::Code(1));
}

#[test]
fn given_integer_key_when_resolve_then_member_has_name_and_code() {
    let member = resolve(20, &COLOR).unwrap();

    assert_eq!(member.name, "GREEN");
    assert_eq!(member.code, 20);
}

/// **VALUE**: Name-form tables hand back the name whatever the caller passed.
///
/// **BUG THIS CATCHES**: Would catch call sites getting a code where the
/// endpoint expects a symbolic value (or the reverse).
#[test]
fn given_name_form_table_when_normalize_code_then_returns_name() {
    assert_eq!(normalize(30, &COLOR).unwrap(), CanonicalValue::Name("BLUE"));
    assert_eq!(normalize("blue", &COLOR).unwrap().to_string(), "BLUE");
}

/// **VALUE**: Unknown keys fail with the table's description.
///
/// **WHY THIS MATTERS**: The message is what a user sees when they mistype
/// "lastweek"; it has to say which parameter was wrong.
#[test]
fn given_unknown_name_when_normalize_then_error_names_table() {
    let err = normalize("bogus", &FILTER).unwrap_err();

    assert!(matches!(err, EnumError::UnknownKey { .. }));
    assert_eq!(err.key(), Some("bogus"));
    assert!(err.to_string().contains("bogus is not a valid filter"));
}

#[test]
fn given_unknown_code_when_resolve_then_error() {
    let err = resolve(99, &FILTER).unwrap_err();

    assert!(err.to_string().contains("99 is not a valid filter"));
}

#[test]
fn given_numeric_string_not_in_table_when_resolve_then_error() {
    assert!(resolve("7", &FILTER).is_err());
}

#[test]
fn given_owned_string_key_when_resolve_then_works() {
    let key = String::from("Red");

    assert_eq!(resolve(&key, &COLOR).unwrap().code, 10);
    assert_eq!(resolve(key, &COLOR).unwrap().code, 10);
}

#[test]
fn given_key_list_when_resolve_many_then_joined_in_order() {
    let keys: Vec<EnumKey> = vec!["green".into(), 10.into()];

    let values = resolve_many(keys, &COLOR).unwrap();

    assert_eq!(join(&values), "GREEN,RED");
}

#[test]
fn given_key_list_with_unknown_when_resolve_many_then_fails() {
    let result = resolve_many(["red", "purple"], &COLOR);

    assert_eq!(result.unwrap_err().key(), Some("purple"));
}

#[test]
fn given_duplicate_code_when_validate_then_rejected() {
    const BAD: EnumTable = EnumTable::new("bad", EnumForm::Code, &[("A", 1), ("B", 1)]);

    assert!(matches!(BAD.validate(), Err(EnumError::InvalidTable { .. })));
}

#[test]
fn given_lowercase_member_when_validate_then_rejected() {
    const BAD: EnumTable = EnumTable::new("bad", EnumForm::Code, &[("a", 1)]);

    assert!(BAD.validate().is_err());
}

#[test]
fn given_case_insensitive_lookup_when_code_of_then_found() {
    assert_eq!(COLOR.code_of("gReEn"), Some(20));
    assert_eq!(COLOR.name_of(30), Some("BLUE"));
    assert_eq!(COLOR.code_of("PINK"), None);
}
