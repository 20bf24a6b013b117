use std::path::PathBuf;

use clap::Subcommand;

const SECTIONS: [&str; 3] = ["top", "bottom", "shoes"];

#[derive(Subcommand)]
pub enum ClothesCommands {
    /// List clothing items
    List {
        /// Only this section: top, bottom or shoes
        #[arg(long, value_parser = SECTIONS)]
        section: Option<String>,
    },

    /// Upload a photo and add it to the catalog
    Add {
        #[arg(long, value_parser = SECTIONS)]
        section: String,

        #[arg(long)]
        name: String,

        /// Freeform type tag (e.g. "t-shirt")
        #[arg(long)]
        r#type: String,

        #[arg(long)]
        color: String,

        #[arg(long)]
        style: String,

        /// Path to the photo
        #[arg(long)]
        image: PathBuf,
    },

    /// Edit an item's metadata
    Edit {
        /// Clothing item ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        r#type: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        style: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Clothing item ID (UUID)
        id: String,
    },
}
