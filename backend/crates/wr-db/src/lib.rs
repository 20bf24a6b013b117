pub mod connection;
pub mod error;
pub mod repositories;


pub use connection::pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::clothing_item_repository::ClothingItemRepository;
pub use repositories::saved_outfit_repository::{SavedOutfitRepository, ToggleOutcome};
pub use repositories::user_repository::UserRepository;
