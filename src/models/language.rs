use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog shipped with the binary, used when no catalog file is found on disk
const BUILTIN_CATALOG: &str = include_str!("../../resources/languages.ext.json");

/// A programming language as listed in the language catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgrammingLanguage {
    /// File extension without the leading dot
    pub extension: String,
    /// Display name, also used as folder name
    pub name: String,
}

impl ProgrammingLanguage {
    pub fn new(extension: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            name: name.into(),
        }
    }

    /// Language used for files the catalog doesn't know about
    pub fn plain_text() -> Self {
        Self::new("txt", "Plain Text")
    }
}

/// Lookup table from file extension to programming language
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    by_extension: HashMap<String, ProgrammingLanguage>,
}

impl LanguageCatalog {
    /// Builds a catalog from a list of languages. When an extension appears
    /// more than once the first entry wins.
    pub fn new(languages: Vec<ProgrammingLanguage>) -> Self {
        let mut by_extension = HashMap::with_capacity(languages.len());
        for language in languages {
            by_extension
                .entry(language.extension.to_lowercase())
                .or_insert(language);
        }
        Self { by_extension }
    }

    /// Parses a catalog from a JSON array of `{extension, name}` objects
    pub fn from_json(json: &str) -> Result<Self> {
        let languages: Vec<ProgrammingLanguage> =
            serde_json::from_str(json).context("Failed to parse language catalog JSON")?;
        Ok(Self::new(languages))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language catalog {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Extension of a filename: the text after the last dot, lowercased
    pub fn extension_of(filename: &str) -> Option<String> {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(str::to_lowercase)
    }

    /// Resolves the language of a file from its name, falling back to plain text
    pub fn resolve(&self, filename: &str) -> ProgrammingLanguage {
        Self::extension_of(filename)
            .and_then(|ext| self.by_extension.get(&ext))
            .cloned()
            .unwrap_or_else(ProgrammingLanguage::plain_text)
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}
