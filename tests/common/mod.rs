#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use gistport::models::{DatabaseSink, SnippetDatabase};
use gistport::github::{GistFile, GistFiles};
use gistport::{Gist, GistApi};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the GitHub API.
/// Page N is `pages[N - 1]`; pages past the end are empty.
#[derive(Default)]
pub struct MockApi {
    pages: Vec<Result<Vec<Value>, String>>,
    raw: HashMap<String, String>,
    pub page_requests: Mutex<Vec<u32>>,
    pub raw_requests: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, gists: Vec<Gist>) -> Self {
        let entries = gists
            .iter()
            .map(|gist| serde_json::to_value(gist).unwrap())
            .collect();
        self.raw_page(entries)
    }

    /// A page whose entries are served exactly as given
    pub fn raw_page(mut self, entries: Vec<Value>) -> Self {
        self.pages.push(Ok(entries));
        self
    }

    pub fn failing_page(mut self, message: &str) -> Self {
        self.pages.push(Err(message.to_string()));
        self
    }

    pub fn raw(mut self, url: &str, body: &str) -> Self {
        self.raw.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl GistApi for MockApi {
    async fn list_gists(&self, _username: &str, page: u32, _per_page: u32) -> Result<Vec<Value>> {
        self.page_requests.lock().unwrap().push(page);
        match self.pages.get(page as usize - 1) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(message)) => Err(anyhow!("{}", message)),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_raw(&self, url: &str) -> Result<String> {
        self.raw_requests.lock().unwrap().push(url.to_string());
        self.raw
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("404 Not Found: {}", url))
    }
}

/// A file entry: (filename, raw_url, declared language)
pub type FileSpec<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

/// Builds a gist with its files in the given order
pub fn gist(description: &str, files: &[FileSpec]) -> Gist {
    Gist {
        id: Some(format!("gist-{}", description.len())),
        description: Some(description.to_string()),
        files: GistFiles(
            files
                .iter()
                .map(|(name, raw_url, language)| {
                    (
                        name.to_string(),
                        GistFile {
                            raw_url: raw_url.map(str::to_string),
                            language: language.map(str::to_string),
                        },
                    )
                })
                .collect(),
        ),
        created_at: Some("2021-03-04T05:06:07Z".to_string()),
        updated_at: Some("2022-03-04T05:06:07Z".to_string()),
    }
}

/// Remembers what it was asked to save
#[derive(Default)]
pub struct RecordingSink {
    pub saved: Mutex<Option<Value>>,
}

impl DatabaseSink for RecordingSink {
    fn save_database(&self, db: &SnippetDatabase) -> Result<()> {
        *self.saved.lock().unwrap() = Some(serde_json::to_value(db)?);
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".to_string()
    }
}

impl RecordingSink {
    pub fn document(&self) -> Option<Value> {
        self.saved.lock().unwrap().clone()
    }
}
