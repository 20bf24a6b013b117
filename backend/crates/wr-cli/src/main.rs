//! wr - Wardrobe CLI
//!
//! # Examples
//!
//! ```bash
//! # Add a shirt from a photo
//! wr clothes add --section top --name "Blue tee" --type t-shirt \
//!     --color blue --style casual --image ./tee.jpg
//!
//! # Ask for an outfit
//! wr outfit suggest "dinner with friends" --pretty
//!
//! # Save it
//! wr outfit toggle --top <uuid> --bottom <uuid> --shoes <uuid>
//! ```

use wr_cli::{
    Cli, CliClientResult, Client, ClothesCommands, Commands, ItemEdits, NewItem, OutfitCommands,
};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server, cli.user_id.as_deref(), cli.token.as_deref());

    let result = run(&client, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Profile => client.get_profile().await,

        Commands::Clothes { action } => match action {
            ClothesCommands::List { section } => client.list_clothes(section.as_deref()).await,
            ClothesCommands::Add {
                section,
                name,
                r#type,
                color,
                style,
                image,
            } => {
                let item = NewItem {
                    section: &section,
                    name: &name,
                    item_type: &r#type,
                    color: &color,
                    style: &style,
                };
                client.add_clothing_item(item, &image).await
            }
            ClothesCommands::Edit {
                id,
                name,
                r#type,
                color,
                style,
            } => {
                let edits = ItemEdits {
                    name: name.as_deref(),
                    item_type: r#type.as_deref(),
                    color: color.as_deref(),
                    style: style.as_deref(),
                };
                client.edit_clothing_item(&id, edits).await
            }
            ClothesCommands::Delete { id } => client.delete_clothing_item(&id).await,
        },

        Commands::Outfit { action } => match action {
            OutfitCommands::Random => client.random_outfit().await,
            OutfitCommands::Suggest { prompt } => client.suggest_outfit(&prompt).await,
            OutfitCommands::Decks => client.outfit_decks().await,
            OutfitCommands::Saved => client.list_saved_outfits().await,
            OutfitCommands::Status(ids) => {
                client
                    .saved_outfit_status(&ids.top, &ids.bottom, &ids.shoes)
                    .await
            }
            OutfitCommands::Toggle(ids) => {
                client
                    .toggle_saved_outfit(&ids.top, &ids.bottom, &ids.shoes)
                    .await
            }
            OutfitCommands::Unsave { id } => client.delete_saved_outfit(&id).await,
        },
    }
}
