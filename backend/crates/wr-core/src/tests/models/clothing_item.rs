use crate::tests::item;
use crate::{ClothingItemChanges, CoreError, Section};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_changes_when_applied_then_only_provided_fields_are_trimmed_and_updated() {
    // Given
    let mut shirt = item(Uuid::new_v4(), Section::Top, "shirt");
    let before = shirt.clone();
    let changes = ClothingItemChanges {
        name: Some("  linen shirt ".to_string()),
        color: Some("beige".to_string()),
        ..Default::default()
    };

    // When
    changes.apply(&mut shirt);

    // Then
    assert_eq!(shirt.name, "linen shirt");
    assert_eq!(shirt.color, "beige");
    assert_that!(shirt.item_type, eq(&before.item_type));
    assert_that!(shirt.style, eq(&before.style));
    assert_that!(shirt.section, eq(Section::Top));
    assert!(shirt.updated_at >= before.updated_at);
}

#[test]
fn given_no_changes_when_validated_then_error() {
    let result = ClothingItemChanges::default().validate(100);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_blank_field_when_validated_then_error_names_field() {
    let changes = ClothingItemChanges {
        style: Some("   ".to_string()),
        ..Default::default()
    };

    let result = changes.validate(100);

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref field), .. }) if field == "style"
    ));
}

#[test]
fn given_overlong_field_when_validated_then_error() {
    let changes = ClothingItemChanges {
        name: Some("x".repeat(11)),
        ..Default::default()
    };

    assert!(changes.validate(10).is_err());
    assert!(changes.validate(11).is_ok());
}
