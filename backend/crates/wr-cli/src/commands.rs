use crate::{clothes_commands::ClothesCommands, outfit_commands::OutfitCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current user's profile
    Profile,

    /// Catalog operations
    Clothes {
        #[command(subcommand)]
        action: ClothesCommands,
    },

    /// Outfit selection and saved outfits
    Outfit {
        #[command(subcommand)]
        action: OutfitCommands,
    },
}
