use crate::tests::{basic_catalog, item};
use crate::{DeckPosition, Section, SectionDeck};

use googletest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

fn three_tops() -> Vec<crate::ClothingItem> {
    let user_id = Uuid::new_v4();
    vec![
        item(user_id, Section::Top, "a"),
        item(user_id, Section::Top, "b"),
        item(user_id, Section::Top, "c"),
        item(user_id, Section::Shoes, "boots"),
    ]
}

#[test]
fn given_catalog_when_deck_shuffled_then_only_section_items_kept() {
    let catalog = three_tops();

    let deck = SectionDeck::shuffled(Section::Top, &catalog, &mut StdRng::seed_from_u64(9));

    assert_that!(deck.len(), eq(3));
    assert!(deck.items.iter().all(|i| i.section == Section::Top));
    assert_that!(deck.position, eq(DeckPosition::Empty));
    assert_that!(deck.current(), none());
}

#[test]
fn given_deck_when_stepping_forward_then_cycles_through_empty() {
    // Given
    let mut deck = SectionDeck::shuffled(
        Section::Top,
        &three_tops(),
        &mut StdRng::seed_from_u64(2),
    );

    // When / Then
    assert_that!(deck.next(), eq(DeckPosition::At(0)));
    assert_that!(deck.next(), eq(DeckPosition::At(1)));
    assert_that!(deck.next(), eq(DeckPosition::At(2)));
    assert_that!(deck.next(), eq(DeckPosition::Empty));
    assert_that!(deck.next(), eq(DeckPosition::At(0)));
}

#[test]
fn given_deck_when_stepping_backward_then_wraps_to_last() {
    let mut deck = SectionDeck::shuffled(
        Section::Top,
        &three_tops(),
        &mut StdRng::seed_from_u64(2),
    );

    assert_that!(deck.prev(), eq(DeckPosition::At(2)));
    assert_that!(deck.current().map(|i| i.id), some(eq(deck.items[2].id)));
    assert_that!(deck.prev(), eq(DeckPosition::At(1)));
    assert_that!(deck.prev(), eq(DeckPosition::At(0)));
    assert_that!(deck.prev(), eq(DeckPosition::Empty));
}

#[test]
fn given_empty_deck_when_navigated_then_stays_empty() {
    let mut deck = SectionDeck::shuffled(
        Section::Bottom,
        &three_tops(),
        &mut StdRng::seed_from_u64(2),
    );

    assert!(deck.is_empty());
    assert_that!(deck.next(), eq(DeckPosition::Empty));
    assert_that!(deck.prev(), eq(DeckPosition::Empty));
    assert_that!(
        deck.random_position(&mut StdRng::seed_from_u64(5)),
        eq(DeckPosition::Empty)
    );
}

#[test]
fn given_known_id_when_selected_then_position_moves() {
    // Given
    let catalog = three_tops();
    let mut deck = SectionDeck::shuffled(Section::Top, &catalog, &mut StdRng::seed_from_u64(4));
    let target = catalog[1].id;

    // When
    let found = deck.select_by_id(target);

    // Then
    assert!(found);
    assert_that!(deck.current().map(|i| i.id), some(eq(target)));
}

#[test]
fn given_unknown_id_when_selected_then_position_unchanged() {
    let mut deck = SectionDeck::shuffled(
        Section::Top,
        &three_tops(),
        &mut StdRng::seed_from_u64(4),
    );
    deck.next();

    let found = deck.select_by_id(Uuid::new_v4());

    assert!(!found);
    assert_that!(deck.position, eq(DeckPosition::At(0)));
}

#[test]
fn given_non_empty_deck_when_random_position_then_never_empty() {
    let mut deck = SectionDeck::shuffled(
        Section::Shoes,
        &basic_catalog(),
        &mut StdRng::seed_from_u64(8),
    );
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        assert_that!(deck.random_position(&mut rng), eq(DeckPosition::At(0)));
    }
}
