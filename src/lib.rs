//! gistport - GitHub gists to snippet library migration
//!
//! Pages through a user's gists, turns every gist into a snippet grouped in
//! a folder per inferred language, collects the tags found in descriptions,
//! and writes everything out as a single JSON database.

pub mod cli;
pub mod config;
pub mod convert;
pub mod github;
pub mod logging;
pub mod migrate;
pub mod models;

pub use config::Config;
pub use convert::{GistConverter, ParsedDescription, parse_description};
pub use github::{Gist, GistApi, GithubClient};
pub use migrate::{MigrationSummary, collect_snippets, run_migration};
