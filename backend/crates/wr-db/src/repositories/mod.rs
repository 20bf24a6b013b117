pub(crate) mod columns;

pub mod clothing_item_repository;
pub mod saved_outfit_repository;
pub mod user_repository;
