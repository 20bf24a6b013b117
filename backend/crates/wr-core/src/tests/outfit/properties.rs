use crate::tests::item;
use crate::{ClothingItem, OutfitPicks, Section, pick_random, reconcile};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

fn catalog_from(sections: &[usize]) -> Vec<ClothingItem> {
    let user_id = Uuid::new_v4();
    sections
        .iter()
        .enumerate()
        .map(|(i, s)| item(user_id, Section::ALL[*s], &format!("piece-{i}")))
        .collect()
}

proptest! {
    #[test]
    fn given_any_catalog_when_picked_randomly_then_slots_match_sections(
        sections in proptest::collection::vec(0usize..3, 0..30),
        seed in any::<u64>(),
    ) {
        let catalog = catalog_from(&sections);
        let selection = pick_random(&catalog, &mut StdRng::seed_from_u64(seed));

        for section in Section::ALL {
            let available = catalog.iter().any(|i| i.section == section);
            let slot = selection.slot(section);
            prop_assert_eq!(slot.is_selected(), available);
            if let Some(chosen) = slot.as_item() {
                prop_assert_eq!(chosen.section, section);
                prop_assert!(catalog.contains(chosen));
            }
        }
    }

    #[test]
    fn given_valid_same_section_ids_when_reconciled_then_exactly_those_items(
        sections in proptest::collection::vec(0usize..3, 3..30),
        choice in any::<[usize; 3]>(),
    ) {
        let mut catalog = catalog_from(&sections);
        // make sure every section is present
        for (i, section) in Section::ALL.iter().enumerate() {
            catalog[i].section = *section;
        }

        let expected: Vec<ClothingItem> = Section::ALL
            .iter()
            .zip(choice)
            .map(|(section, c)| {
                let group: Vec<_> = catalog.iter().filter(|i| i.section == *section).collect();
                group[c % group.len()].clone()
            })
            .collect();
        let picks = OutfitPicks {
            top: Some(expected[0].id.to_string()),
            bottom: Some(expected[1].id.to_string()),
            shoes: Some(expected[2].id.to_string()),
        };

        let selection = reconcile(&catalog, &picks);

        prop_assert_eq!(selection.top.as_item(), Some(&expected[0]));
        prop_assert_eq!(selection.bottom.as_item(), Some(&expected[1]));
        prop_assert_eq!(selection.shoes.as_item(), Some(&expected[2]));
        prop_assert!(selection.notices.is_empty());
    }

    #[test]
    fn given_arbitrary_identifiers_when_reconciled_then_never_panics(
        top in ".{0,40}",
        bottom in ".{0,40}",
        shoes in ".{0,40}",
    ) {
        let catalog = catalog_from(&[0, 1, 2]);
        let picks = OutfitPicks { top: Some(top), bottom: Some(bottom), shoes: Some(shoes) };

        let selection = reconcile(&catalog, &picks);

        for section in Section::ALL {
            if let Some(chosen) = selection.slot(section).as_item() {
                prop_assert_eq!(chosen.section, section);
            }
        }
    }

    #[test]
    fn given_arbitrary_text_when_decoded_then_never_panics(text in ".{0,80}") {
        let _ = crate::decode_outfit_picks(&text);
    }
}
