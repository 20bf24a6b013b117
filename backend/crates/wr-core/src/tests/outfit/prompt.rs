use crate::tests::{basic_catalog, item};
use crate::{CoreError, Section, build_outfit_prompt, format_catalog, format_catalog_line};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn test_catalog_line_format() {
    let mut jacket = item(Uuid::new_v4(), Section::Top, "Denim Jacket");
    jacket.color = "blue".to_string();
    jacket.style = "streetwear".to_string();
    jacket.item_type = "jacket".to_string();

    let line = format_catalog_line(&jacket);

    assert_eq!(
        line,
        format!("{}: Denim Jacket (top): blue, streetwear, jacket", jacket.id)
    );
}

#[test]
fn test_catalog_joins_lines_with_newline() {
    let catalog = basic_catalog();

    let text = format_catalog(&catalog);

    assert_that!(text.lines().count(), eq(3));
    assert!(text.lines().next().unwrap().contains("white tee (top)"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn given_request_when_prompt_built_then_contains_trimmed_request_and_catalog() {
    // Given
    let catalog = basic_catalog();

    // When
    let prompt = build_outfit_prompt("  something for a rainy day \n", &catalog).unwrap();

    // Then
    assert_that!(
        prompt,
        contains_substring("USER PROMPT: \"something for a rainy day\"")
    );
    for clothing in &catalog {
        assert_that!(prompt, contains_substring(format_catalog_line(clothing)));
    }
    assert_that!(prompt, contains_substring("\"top\""));
    assert_that!(prompt, contains_substring("\"bottom\""));
    assert_that!(prompt, contains_substring("\"shoes\""));
    assert_that!(prompt, contains_substring("Only respond with the JSON"));
}

#[test]
fn given_blank_request_when_prompt_built_then_validation_error() {
    let result = build_outfit_prompt("   ", &basic_catalog());

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref field), .. }) if field == "prompt"
    ));
}
