//! wr-cli library
//!
//! HTTP client and command definitions for the `wr` binary.

pub mod cli;
pub(crate) mod client;
pub mod clothes_commands;
pub mod commands;
pub mod outfit_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, ItemEdits, NewItem, content_type_for};
pub use clothes_commands::ClothesCommands;
pub use commands::Commands;
pub use outfit_commands::{OutfitCommands, OutfitIds};
