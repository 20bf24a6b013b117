use crate::{ClothingItem, OutfitSelection, Section, SelectionNotice, SlotPick};

use rand::Rng;

/// Draws one item uniformly at random from each section of the catalog.
///
/// Sections without items stay `Unselected` and produce an
/// [`SelectionNotice::EmptySection`].
pub fn pick_random<R: Rng + ?Sized>(catalog: &[ClothingItem], rng: &mut R) -> OutfitSelection {
    let mut selection = OutfitSelection::default();

    for section in Section::ALL {
        let group: Vec<&ClothingItem> = catalog
            .iter()
            .filter(|item| item.section == section)
            .collect();

        if group.is_empty() {
            selection
                .notices
                .push(SelectionNotice::EmptySection { section });
            continue;
        }

        let index = rng.random_range(0..group.len());
        selection.set_slot(section, SlotPick::Selected(group[index].clone()));
    }

    selection
}
