//! Drives a full migration: page through gists, convert them, save the result

use anyhow::Result;
use futures::TryStreamExt;
use tracing::{error, info};

use crate::convert::GistConverter;
use crate::github::{GistApi, gist_pages};
use crate::models::{DatabaseSink, LanguageCatalog, SnippetDatabase};

/// Counts reported once a migration has been written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSummary {
    pub folders: usize,
    pub tags: usize,
    pub snippets: usize,
    /// Where the database went
    pub destination: String,
}

impl MigrationSummary {
    pub fn of(db: &SnippetDatabase, destination: String) -> Self {
        Self {
            folders: db.folders.len(),
            tags: db.tags.len(),
            snippets: db.snippets.len(),
            destination,
        }
    }
}

/// Converts every gist of `username`, in page order then in-page order.
///
/// A failing page request aborts the whole collection. A failing gist only
/// drops that gist.
pub async fn collect_snippets<A>(
    api: &A,
    catalog: &LanguageCatalog,
    username: &str,
) -> Result<SnippetDatabase>
where
    A: GistApi + ?Sized,
{
    let converter = GistConverter::new(api, catalog);
    let mut db = SnippetDatabase::new();

    let pages = gist_pages(api, username);
    futures::pin_mut!(pages);

    while let Some(page) = pages.try_next().await? {
        for raw in &page {
            if let Some(snippet) = converter.convert(raw, &mut db).await {
                db.snippets.push(snippet);
            }
        }
    }

    Ok(db)
}

/// Collects all snippets and hands them to `sink` in one piece.
/// Nothing is saved unless every page was fetched.
pub async fn run_migration<A, S>(
    api: &A,
    catalog: &LanguageCatalog,
    username: &str,
    sink: &S,
) -> Result<MigrationSummary>
where
    A: GistApi + ?Sized,
    S: DatabaseSink + ?Sized,
{
    let db = match collect_snippets(api, catalog, username).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to process snippets: {:#}", e);
            return Err(e);
        }
    };

    if let Err(e) = sink.save_database(&db) {
        error!("Failed to save snippets: {:#}", e);
        return Err(e);
    }

    let summary = MigrationSummary::of(&db, sink.destination());
    info!(
        "All snippets processed and saved to {}: {} folders, {} tags, {} snippets",
        summary.destination, summary.folders, summary.tags, summary.snippets
    );

    Ok(summary)
}
