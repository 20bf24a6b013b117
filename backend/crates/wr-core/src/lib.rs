pub mod error;
pub mod models;
pub mod outfit;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::clothing_item::{ClothingItem, ClothingItemChanges, validate_text_field};
pub use models::saved_outfit::{OutfitTriple, SavedOutfit};
pub use models::section::Section;
pub use models::subscription_plan::SubscriptionPlan;
pub use models::user_profile::UserProfile;
pub use outfit::deck::{DeckPosition, SectionDeck};
pub use outfit::picks::{OutfitPicks, decode_outfit_picks};
pub use outfit::prompt::{
    OUTFIT_SYSTEM_INSTRUCTION, build_outfit_prompt, format_catalog, format_catalog_line,
};
pub use outfit::random::pick_random;
pub use outfit::reconcile::reconcile;
pub use outfit::selection::{OutfitSelection, SelectionNotice, SlotPick};
