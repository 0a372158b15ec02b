//! Settings read from the environment (and a `.env` file, if present)

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::github::DEFAULT_API_URL;
use crate::models::LanguageCatalog;

pub const DEFAULT_LANGUAGES_FILE: &str = "resources/languages.ext.json";
pub const DEFAULT_OUTPUT_FILE: &str = "db.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub github_token: String,
    pub github_username: Option<String>,
    pub api_url: String,
    /// Explicitly configured catalog; `None` means the default location
    pub languages_file: Option<PathBuf>,
    pub output_file: PathBuf,
}

impl Config {
    /// Loads `.env` and reads the process environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(github_token) = get("GITHUB_TOKEN") else {
            bail!("GitHub token is missing. Make sure to set GITHUB_TOKEN in the .env file.");
        };

        Ok(Self {
            github_token,
            github_username: get("GITHUB_USERNAME"),
            api_url: get("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            languages_file: get("GISTPORT_LANGUAGES").map(PathBuf::from),
            output_file: get("GISTPORT_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        })
    }

    /// Picks the username given on the command line over the configured one
    pub fn username(&self, cli_username: Option<&str>) -> Result<String> {
        cli_username
            .map(str::to_string)
            .or_else(|| self.github_username.clone())
            .context("GitHub username is missing. Set GITHUB_USERNAME or pass it as an argument.")
    }

    pub fn load_catalog(&self) -> Result<LanguageCatalog> {
        load_catalog(self.languages_file.as_deref())
    }
}

/// Loads the catalog at `path`. Without an explicit path the default file is
/// used when it exists, otherwise the built-in catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<LanguageCatalog> {
    match path {
        Some(path) => LanguageCatalog::load(path),
        None => {
            let default = Path::new(DEFAULT_LANGUAGES_FILE);
            if default.exists() {
                LanguageCatalog::load(default)
            } else {
                LanguageCatalog::builtin()
            }
        }
    }
}

/// Catalog location from the environment alone, for commands that don't need a token
pub fn languages_file_from_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok();
    std::env::var("GISTPORT_LANGUAGES")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
