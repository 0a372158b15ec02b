use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::config::{self, Config};
use crate::github::GithubClient;
use crate::migrate::run_migration;
use crate::models::StorageManager;

/// Runs the full migration for `username`, or the configured user
pub async fn run(username: Option<&str>) -> Result<()> {
    let config = Config::from_env()?;
    let username = config.username(username)?;
    let catalog = config.load_catalog()?;
    info!("Loaded {} languages", catalog.len());

    let client = GithubClient::new(&config.api_url, &config.github_token)?;
    let storage = StorageManager::new(&config.output_file);

    info!("Migrating gists of {}", username);
    let summary = run_migration(&client, &catalog, &username, &storage).await?;

    println!(
        "{}  {} folders, {} tags, {} snippets written to {}",
        "┃".bright_magenta(),
        summary.folders.to_string().yellow(),
        summary.tags.to_string().yellow(),
        summary.snippets.to_string().yellow(),
        summary.destination.bright_white()
    );

    Ok(())
}

/// Prints the language each filename resolves to
pub fn show_languages(filenames: &[String]) -> Result<()> {
    let catalog = config::load_catalog(config::languages_file_from_env().as_deref())?;

    for filename in filenames {
        let language = catalog.resolve(filename);
        println!(
            "{}  {:<30} {} ({})",
            "┃".bright_magenta(),
            filename.bright_white(),
            language.name.bold(),
            language.extension
        );
    }

    Ok(())
}
