pub mod folder;
pub mod id;
pub mod language;
pub mod snippet;
pub mod snippet_database;
pub mod storage;
pub mod tags;

pub use folder::{Folder, FolderRegistry};
pub use language::{LanguageCatalog, ProgrammingLanguage};
pub use snippet::{PLAIN_TEXT_LANGUAGE, Snippet, SnippetContent};
pub use snippet_database::SnippetDatabase;
pub use storage::{DatabaseSink, StorageManager};
pub use tags::{Tag, TagManager};

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
