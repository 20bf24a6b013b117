use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum OutfitCommands {
    /// Pick one random item per section
    Random,

    /// Ask for an outfit matching a description (premium plan)
    Suggest {
        /// What the outfit is for, e.g. "rainy office day"
        prompt: String,
    },

    /// Shuffled decks for browsing each section
    Decks,

    /// List saved outfits
    Saved,

    /// Check whether an outfit is saved
    Status(OutfitIds),

    /// Save an outfit, or remove it if already saved
    Toggle(OutfitIds),

    /// Delete a saved outfit by its ID
    Unsave {
        /// Saved outfit ID (UUID)
        id: String,
    },
}

#[derive(Args)]
pub struct OutfitIds {
    #[arg(long)]
    pub top: String,

    #[arg(long)]
    pub bottom: String,

    #[arg(long)]
    pub shoes: String,
}
