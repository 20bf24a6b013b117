use crate::tests::{basic_catalog, item};
use crate::{Section, SelectionNotice, pick_random};

use googletest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

#[test]
fn given_full_catalog_when_picked_randomly_then_every_slot_is_filled() {
    // Given
    let catalog = basic_catalog();
    let mut rng = StdRng::seed_from_u64(7);

    // When
    let selection = pick_random(&catalog, &mut rng);

    // Then
    assert!(selection.is_complete());
    assert_that!(selection.notices.len(), eq(0));
    assert_that!(selection.top.item_id(), some(eq(catalog[0].id)));
    assert_that!(selection.bottom.item_id(), some(eq(catalog[1].id)));
    assert_that!(selection.shoes.item_id(), some(eq(catalog[2].id)));
}

#[test]
fn given_catalog_without_shoes_when_picked_randomly_then_shoes_slot_is_unselected() {
    // Given
    let user_id = Uuid::new_v4();
    let catalog = vec![
        item(user_id, Section::Top, "tee"),
        item(user_id, Section::Bottom, "shorts"),
    ];
    let mut rng = StdRng::seed_from_u64(1);

    // When
    let selection = pick_random(&catalog, &mut rng);

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
    assert_eq!(selection.notices[0].to_string(), "No items in section shoes");
}

#[test]
fn given_empty_catalog_when_picked_randomly_then_nothing_selected_without_error() {
    let mut rng = StdRng::seed_from_u64(3);

    let selection = pick_random(&[], &mut rng);

    assert!(selection.triple().is_none());
    assert_that!(selection.notices.len(), eq(3));
}

#[test]
fn given_same_seed_when_picked_twice_then_selection_is_identical() {
    // Given
    let user_id = Uuid::new_v4();
    let catalog: Vec<_> = (0..10)
        .map(|i| item(user_id, Section::ALL[i % 3], &format!("piece-{i}")))
        .collect();

    // When
    let first = pick_random(&catalog, &mut StdRng::seed_from_u64(42));
    let second = pick_random(&catalog, &mut StdRng::seed_from_u64(42));

    // Then
    assert_eq!(first, second);
}
