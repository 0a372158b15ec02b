use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::id::ShortIds;
use crate::models::now_millis;

/// Represents a tag that can be applied to snippets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Short alphanumeric identifier
    pub id: String,

    /// Name of the tag (without the # prefix)
    pub name: String,

    /// Milliseconds since the epoch
    pub created_at: i64,

    pub updated_at: i64,
}

impl Tag {
    pub fn new(id: String, name: String) -> Self {
        let now = now_millis();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Manages all tags seen during a migration, keyed by exact name
#[derive(Debug, Default)]
pub struct TagManager {
    /// Tags in creation order
    tags: Vec<Tag>,

    /// Maps tag names to their position in `tags`
    by_name: HashMap<String, usize>,

    ids: ShortIds,
}

impl TagManager {
    /// Creates a new tag manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of the tag with this name, creating the tag if needed.
    /// Names are matched exactly, so `Rust` and `rust` are different tags.
    pub fn get_or_create_tag(&mut self, name: &str) -> String {
        if let Some(&idx) = self.by_name.get(name) {
            return self.tags[idx].id.clone();
        }

        let tag = Tag::new(self.ids.next_id(), name.to_string());
        let id = tag.id.clone();
        self.by_name.insert(tag.name.clone(), self.tags.len());
        self.tags.push(tag);

        id
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Tag> {
        self.by_name.get(name).map(|&idx| &self.tags[idx])
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
