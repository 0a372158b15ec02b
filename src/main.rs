//! gistport - GitHub gists to snippet library migration
//!
//! Reads GITHUB_TOKEN and GITHUB_USERNAME from the environment (or `.env`),
//! converts every gist of the user and writes the resulting database to
//! `db.json`. Run `gistport help` for the other commands.

use color_eyre::Result;
use color_eyre::eyre::eyre;

use gistport::{cli, logging};

/// Application entry point and initialization
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    cli::execute_cli(&args)
        .await
        .map_err(|e| eyre!("{:#}", e))
}
