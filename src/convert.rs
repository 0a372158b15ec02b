//! Turning gists into snippets

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::github::{Gist, GistApi};
use crate::models::{LanguageCatalog, Snippet, SnippetContent, SnippetDatabase, id, now_millis};

// ASCII word characters only
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("tag pattern is valid"));

/// Name and tags parsed out of a gist description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDescription {
    pub name: String,
    pub tags: Vec<String>,
}

/// Splits a description like `"Retry helper #rust #async"` into its name
/// (everything before the first `#`, trimmed) and its tags in order of
/// appearance. Repeated tags are kept.
pub fn parse_description(description: &str) -> ParsedDescription {
    let name = match description.find('#') {
        Some(pos) => &description[..pos],
        None => description,
    };

    let tags = TAG_PATTERN
        .captures_iter(description)
        .map(|caps| caps[1].to_string())
        .collect();

    ParsedDescription {
        name: name.trim().to_string(),
        tags,
    }
}

/// Converts gists one at a time, registering folders and tags as it goes
pub struct GistConverter<'a, A: GistApi + ?Sized> {
    api: &'a A,
    catalog: &'a LanguageCatalog,
}

impl<'a, A: GistApi + ?Sized> GistConverter<'a, A> {
    pub fn new(api: &'a A, catalog: &'a LanguageCatalog) -> Self {
        Self { api, catalog }
    }

    /// Converts one entry of a listing page, returning `None` when it has no
    /// downloadable files or when anything goes wrong (including an entry
    /// that doesn't decode). Failures are logged and leave `db` untouched.
    pub async fn convert(&self, raw: &Value, db: &mut SnippetDatabase) -> Option<Snippet> {
        let result = match Gist::from_value(raw) {
            Ok(gist) => self.try_convert(&gist, db).await,
            Err(e) => Err(e),
        };
        self.report(Gist::id_or_unknown(raw), result)
    }

    /// Same as [`convert`](Self::convert) for an already decoded gist
    pub async fn convert_gist(&self, gist: &Gist, db: &mut SnippetDatabase) -> Option<Snippet> {
        let result = self.try_convert(gist, db).await;
        self.report(gist.id.as_deref().unwrap_or("<unknown>"), result)
    }

    fn report(&self, gist_id: &str, result: Result<Option<Snippet>>) -> Option<Snippet> {
        match result {
            Ok(Some(snippet)) => {
                info!("Snippet \"{}\" converted", snippet.name);
                Some(snippet)
            }
            Ok(None) => {
                debug!("Gist {} has no downloadable files, skipping", gist_id);
                None
            }
            Err(e) => {
                error!("Error converting gist {} to snippet: {:#}", gist_id, e);
                None
            }
        }
    }

    async fn try_convert(&self, gist: &Gist, db: &mut SnippetDatabase) -> Result<Option<Snippet>> {
        let description = gist.description()?;
        let parsed = parse_description(description);

        let mut content = Vec::new();
        for (filename, file) in gist.files.iter() {
            let Some(raw_url) = file.raw_url.as_deref() else {
                debug!("File {} has no raw URL", filename);
                continue;
            };

            let value = self
                .api
                .fetch_raw(raw_url)
                .await
                .with_context(|| format!("Failed to fetch content of {filename}"))?;

            content.push(SnippetContent::new(
                filename.to_string(),
                file.language.as_deref(),
                value,
            ));
        }

        let Some(first) = content.first() else {
            return Ok(None);
        };

        // Everything fallible happens before the registries are touched
        let created_at = gist.created_at_millis()?;
        let updated_at = gist.updated_at_millis()?.unwrap_or_else(now_millis);

        let language = self.catalog.resolve(&first.label);
        let folder_id = db.folders.get_or_create_folder(&language);
        let tags_ids = parsed
            .tags
            .iter()
            .map(|tag| db.tags.get_or_create_tag(tag))
            .collect();

        Ok(Some(Snippet {
            id: id::snippet_id(),
            is_deleted: false,
            is_favorites: false,
            folder_id,
            tags_ids,
            description: description.to_string(),
            name: parsed.name,
            content,
            created_at,
            updated_at,
        }))
    }
}
