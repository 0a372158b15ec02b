//! CLI Module for gistport
//! Dispatches the command-line arguments to the migration or to the
//! helper commands.

pub mod commands;

use anyhow::{Result, bail};
use colored::Colorize;

/// Executes CLI commands based on the provided arguments
pub async fn execute_cli(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return commands::run(None).await;
    }

    match args[0].as_str() {
        "run" | "migrate" => {
            commands::run(args.get(1).map(String::as_str)).await?;
        }
        "lang" | "language" => {
            if args.len() < 2 {
                println!(
                    "{}  Usage: gistport lang <FILENAME>...",
                    "┃".bright_magenta()
                );
                bail!("Missing filename");
            }

            commands::show_languages(&args[1..])?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        unknown => {
            print_help();
            bail!("Unknown command: {}", unknown);
        }
    }

    Ok(())
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "GISTPORT - GIST TO SNIPPET MIGRATION".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  gistport [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "run [USERNAME]".bright_white(),
        "Convert all gists of the user and write the database (default)"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "lang <FILENAME>...".bright_white(),
        "Show which language folder each file would land in"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "help".bright_white(),
        "Display this help message"
    );

    println!("{}  {}", "┃".bright_magenta(), "ENVIRONMENT:".bright_green());
    for (key, about) in [
        ("GITHUB_TOKEN", "Personal access token (required)"),
        ("GITHUB_USERNAME", "Owner of the gists"),
        ("GITHUB_API_URL", "API base URL, for GitHub Enterprise"),
        ("GISTPORT_LANGUAGES", "Language catalog JSON file"),
        ("GISTPORT_OUTPUT", "Output file (default db.json)"),
    ] {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            key.bright_white(),
            about
        );
    }
}
