use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::id::ShortIds;
use crate::models::language::ProgrammingLanguage;
use crate::models::now_millis;

/// A folder groups snippets that share an inferred language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    /// Display name of the language
    pub name: String,
    /// Extension of the language, e.g. `py`
    pub default_language: String,
    /// Folders are flat, this is always `None`
    pub parent_id: Option<String>,
    pub is_open: bool,
    pub is_system: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// 1-based position in discovery order
    pub index: usize,
}

impl Folder {
    pub fn new(id: String, language: &ProgrammingLanguage, index: usize) -> Self {
        let now = now_millis();
        Self {
            id,
            name: language.name.clone(),
            default_language: language.extension.clone(),
            parent_id: None,
            is_open: false,
            is_system: false,
            created_at: now,
            updated_at: now,
            index,
        }
    }
}

/// Folders created during a migration, one per language name
#[derive(Debug, Default)]
pub struct FolderRegistry {
    folders: Vec<Folder>,
    by_name: HashMap<String, usize>,
    ids: ShortIds,
}

impl FolderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of the folder for this language, creating it if needed
    pub fn get_or_create_folder(&mut self, language: &ProgrammingLanguage) -> String {
        if let Some(&idx) = self.by_name.get(&language.name) {
            return self.folders[idx].id.clone();
        }

        let folder = Folder::new(self.ids.next_id(), language, self.folders.len() + 1);
        let id = folder.id.clone();
        self.by_name.insert(folder.name.clone(), self.folders.len());
        self.folders.push(folder);

        id
    }

    pub fn get(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
