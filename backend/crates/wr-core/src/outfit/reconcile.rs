use crate::{ClothingItem, OutfitPicks, OutfitSelection, Section, SelectionNotice, SlotPick};

/// Resolves returned identifiers against the caller's catalog.
///
/// A slot is selected only when an item with that identifier exists in the
/// catalog and sits in the same section. Everything else leaves the slot
/// unselected with a notice. A section with no items reports `EmptySection`
/// whatever the pick was.
pub fn reconcile(catalog: &[ClothingItem], picks: &OutfitPicks) -> OutfitSelection {
    let mut selection = OutfitSelection::default();

    for section in Section::ALL {
        if !catalog.iter().any(|item| item.section == section) {
            selection
                .notices
                .push(SelectionNotice::EmptySection { section });
            continue;
        }

        let Some(id) = picks.get(section) else {
            selection
                .notices
                .push(SelectionNotice::NoSuggestion { section });
            continue;
        };

        let found = catalog.iter().find(|item| {
            item.section == section && item.id.to_string().eq_ignore_ascii_case(id)
        });

        match found {
            Some(item) => selection.set_slot(section, SlotPick::Selected(item.clone())),
            None => selection.notices.push(SelectionNotice::UnknownItem {
                section,
                id: id.to_string(),
            }),
        }
    }

    selection
}
