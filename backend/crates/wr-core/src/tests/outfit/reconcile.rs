use crate::tests::{basic_catalog, item};
use crate::{OutfitPicks, Section, SelectionNotice, decode_outfit_picks, reconcile};

use googletest::prelude::*;
use uuid::Uuid;

fn picks_for(top: &str, bottom: &str, shoes: &str) -> OutfitPicks {
    OutfitPicks {
        top: Some(top.to_string()),
        bottom: Some(bottom.to_string()),
        shoes: Some(shoes.to_string()),
    }
}

#[test]
fn given_valid_identifiers_when_reconciled_then_exact_items_selected() {
    // Given
    let catalog = basic_catalog();
    let text = format!(
        r#"{{"top":"{}","bottom":"{}","shoes":"{}"}}"#,
        catalog[0].id, catalog[1].id, catalog[2].id
    );
    let picks = decode_outfit_picks(&text).unwrap();

    // When
    let selection = reconcile(&catalog, &picks);

    // Then
    assert_that!(selection.top.as_item(), some(eq(&catalog[0])));
    assert_that!(selection.bottom.as_item(), some(eq(&catalog[1])));
    assert_that!(selection.shoes.as_item(), some(eq(&catalog[2])));
    assert!(selection.notices.is_empty());
}

#[test]
fn given_unknown_top_when_reconciled_then_top_unselected_and_rest_kept() {
    // Given
    let catalog = basic_catalog();
    let picks = picks_for(
        "z",
        &catalog[1].id.to_string(),
        &catalog[2].id.to_string(),
    );

    // When
    let selection = reconcile(&catalog, &picks);

    // Then
    assert!(!selection.top.is_selected());
    assert_that!(selection.bottom.item_id(), some(eq(catalog[1].id)));
    assert_that!(selection.shoes.item_id(), some(eq(catalog[2].id)));
    assert_eq!(
        selection.notices,
        vec![SelectionNotice::UnknownItem {
            section: Section::Top,
            id: "z".to_string()
        }]
    );
}

#[test]
fn given_identifier_from_wrong_section_when_reconciled_then_not_substituted() {
    // Given: the "top" pick points at the bottom item
    let catalog = basic_catalog();
    let bottom_id = catalog[1].id.to_string();
    let picks = picks_for(&bottom_id, &bottom_id, &catalog[2].id.to_string());

    // When
    let selection = reconcile(&catalog, &picks);

    // Then
    assert!(!selection.top.is_selected());
    assert_that!(selection.bottom.item_id(), some(eq(catalog[1].id)));
    assert_that!(selection.notices.len(), eq(1));
}

#[test]
fn given_uppercase_identifier_when_reconciled_then_matches() {
    let catalog = basic_catalog();
    let picks = OutfitPicks {
        top: Some(catalog[0].id.to_string().to_uppercase()),
        ..Default::default()
    };

    let selection = reconcile(&catalog, &picks);

    assert_that!(selection.top.item_id(), some(eq(catalog[0].id)));
}

#[test]
fn given_missing_slots_when_reconciled_then_no_suggestion_notices() {
    let catalog = basic_catalog();

    let selection = reconcile(&catalog, &OutfitPicks::default());

    assert!(selection.triple().is_none());
    assert!(
        selection
            .notices
            .contains(&SelectionNotice::NoSuggestion { section: Section::Shoes })
    );
}

#[test]
fn given_other_users_item_id_when_reconciled_then_unselected() {
    // Given: catalog only holds the caller's items
    let catalog = basic_catalog();
    let foreign = item(Uuid::new_v4(), Section::Top, "borrowed");
    let picks = OutfitPicks {
        top: Some(foreign.id.to_string()),
        ..Default::default()
    };

    // When
    let selection = reconcile(&catalog, &picks);

    // Then
    assert_that!(selection.top.as_item(), none());
}

#[test]
fn given_catalog_without_shoes_when_reconciled_then_empty_section_notice() {
    // Given
    let mut catalog = basic_catalog();
    catalog.retain(|item| item.section != Section::Shoes);
    let picks = picks_for(
        &catalog[0].id.to_string(),
        &catalog[1].id.to_string(),
        "made-up-shoe",
    );

    // When
    let selection = reconcile(&catalog, &picks);

    // Then
    assert!(selection.top.is_selected());
    assert!(selection.bottom.is_selected());
    assert!(!selection.shoes.is_selected());
    assert_eq!(
        selection.notices,
        vec![SelectionNotice::EmptySection {
            section: Section::Shoes
        }]
    );
}

#[test]
fn given_empty_catalog_when_reconciled_then_every_section_reports_empty() {
    let selection = reconcile(&[], &OutfitPicks::default());

    assert_eq!(
        selection.notices,
        Section::ALL
            .iter()
            .map(|section| SelectionNotice::EmptySection { section: *section })
            .collect::<Vec<_>>()
    );
}

#[test]
fn given_missing_suggestion_when_displayed_then_reads_no_suggestion_returned() {
    let notice = SelectionNotice::NoSuggestion {
        section: Section::Bottom,
    };

    assert_eq!(notice.to_string(), "No bottom suggestion was returned");
}
