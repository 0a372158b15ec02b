use serde::{Serialize, Serializer};

use crate::models::{Folder, FolderRegistry, Snippet, Tag, TagManager};

/// Everything accumulated during one migration run
#[derive(Debug, Default)]
pub struct SnippetDatabase {
    pub folders: FolderRegistry,
    pub tags: TagManager,
    pub snippets: Vec<Snippet>,
}

impl SnippetDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

/// On-disk shape of the database
#[derive(Serialize)]
struct DatabaseDocument<'a> {
    folders: &'a [Folder],
    tags: &'a [Tag],
    snippets: &'a [Snippet],
}

impl Serialize for SnippetDatabase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DatabaseDocument {
            folders: self.folders.folders(),
            tags: self.tags.tags(),
            snippets: &self.snippets,
        }
        .serialize(serializer)
    }
}
