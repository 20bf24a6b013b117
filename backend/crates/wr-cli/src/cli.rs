use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "wr")]
#[command(about = "Wardrobe CLI: manage clothes and outfits from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "WR_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Identity-provider user id, for servers running without auth
    #[arg(long, global = true, env = "WR_USER_ID")]
    pub user_id: Option<String>,

    /// JWT bearer token
    #[arg(long, global = true, env = "WR_TOKEN")]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
