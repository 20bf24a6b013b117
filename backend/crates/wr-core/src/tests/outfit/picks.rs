use crate::{CoreError, Section, decode_outfit_picks};

use googletest::prelude::*;

#[test]
fn given_complete_object_when_decoded_then_all_slots_present() {
    let picks = decode_outfit_picks(r#"{"top":"a","bottom":"b","shoes":"c"}"#).unwrap();

    assert_eq!(picks.get(Section::Top), Some("a"));
    assert_eq!(picks.get(Section::Bottom), Some("b"));
    assert_eq!(picks.get(Section::Shoes), Some("c"));
}

#[test]
fn given_surrounding_whitespace_when_decoded_then_accepted() {
    let picks = decode_outfit_picks("\n  {\"top\": \"a\"}  \n").unwrap();

    assert_eq!(picks.top.as_deref(), Some("a"));
}

#[test]
fn given_null_missing_and_empty_values_when_decoded_then_slots_are_none() {
    let picks = decode_outfit_picks(r#"{"top": null, "bottom": ""}"#).unwrap();

    assert_that!(picks.top, none());
    assert_that!(picks.bottom, none());
    assert_that!(picks.shoes, none());
}

#[test]
fn given_extra_keys_when_decoded_then_ignored() {
    let picks =
        decode_outfit_picks(r#"{"top":"a","bottom":"b","shoes":"c","hat":"d","why":1}"#).unwrap();

    assert_eq!(picks.shoes.as_deref(), Some("c"));
}

#[test]
fn given_non_json_text_when_decoded_then_malformed() {
    let result = decode_outfit_picks("not json");

    assert!(matches!(result, Err(CoreError::MalformedResponse { .. })));
}

#[test]
fn given_json_array_when_decoded_then_malformed() {
    let result = decode_outfit_picks(r#"["a","b","c"]"#);

    assert!(matches!(result, Err(CoreError::MalformedResponse { .. })));
}

#[test]
fn given_numeric_identifier_when_decoded_then_malformed() {
    let result = decode_outfit_picks(r#"{"top": 12, "bottom": "b", "shoes": "c"}"#);

    assert!(matches!(result, Err(CoreError::MalformedResponse { .. })));
}

#[test]
fn given_prose_wrapped_json_when_decoded_then_malformed() {
    let result = decode_outfit_picks(r#"Here you go: {"top":"a"}"#);

    assert_that!(result, err(anything()));
}
