use crate::{CoreError, Section};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_section_as_str() {
    assert_eq!(Section::Top.as_str(), "top");
    assert_eq!(Section::Bottom.as_str(), "bottom");
    assert_eq!(Section::Shoes.as_str(), "shoes");
}

#[test]
fn test_section_from_str_canonical() {
    assert_eq!(Section::from_str("top").unwrap(), Section::Top);
    assert_eq!(Section::from_str("bottom").unwrap(), Section::Bottom);
    assert_eq!(Section::from_str("shoes").unwrap(), Section::Shoes);
}

#[test]
fn given_plural_alias_when_parsed_then_normalizes_to_canonical() {
    assert_eq!(Section::from_str("tops").unwrap(), Section::Top);
    assert_eq!(Section::from_str("bottoms").unwrap(), Section::Bottom);
}

#[test]
fn given_mixed_case_with_padding_when_parsed_then_accepted() {
    assert_eq!(Section::from_str("  Shoes ").unwrap(), Section::Shoes);
}

#[test]
fn given_unknown_section_when_parsed_then_invalid_section_error() {
    let result = Section::from_str("hats");

    assert_that!(result, err(anything()));
    assert!(matches!(
        result,
        Err(CoreError::InvalidSection { ref value, .. }) if value == "hats"
    ));
}

#[test]
fn test_section_serde_uses_lowercase() {
    let json = serde_json::to_string(&Section::Bottom).unwrap();
    assert_eq!(json, "\"bottom\"");

    let parsed: Section = serde_json::from_str("\"shoes\"").unwrap();
    assert_eq!(parsed, Section::Shoes);
}

#[test]
fn test_section_all_order() {
    assert_eq!(Section::ALL, [Section::Top, Section::Bottom, Section::Shoes]);
}
