use serde::{Deserialize, Serialize};

/// Language recorded for files whose gist entry declares none
pub const PLAIN_TEXT_LANGUAGE: &str = "plain_text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub is_deleted: bool,
    pub is_favorites: bool,
    pub folder_id: String,
    pub tags_ids: Vec<String>,
    pub description: String,
    pub name: String,
    pub content: Vec<SnippetContent>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One file of a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetContent {
    /// Original filename
    pub label: String,
    pub language: String,
    pub value: String,
}

impl SnippetContent {
    /// Builds a content entry, lowercasing the declared language or
    /// falling back to plain text when there is none
    pub fn new(label: String, declared_language: Option<&str>, value: String) -> Self {
        let language = match declared_language {
            Some(lang) if !lang.is_empty() => lang.to_lowercase(),
            _ => PLAIN_TEXT_LANGUAGE.to_string(),
        };

        Self {
            label,
            language,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_language_is_lowercased() {
        let content = SnippetContent::new("a.py".into(), Some("Python"), "x".into());
        assert_eq!(content.language, "python");
    }

    #[test]
    fn declared_language_is_not_trimmed() {
        let content = SnippetContent::new("a.rs".into(), Some(" Rust "), "x".into());
        assert_eq!(content.language, " rust ");
    }

    #[test]
    fn missing_language_is_plain_text() {
        assert_eq!(
            SnippetContent::new("a".into(), None, String::new()).language,
            PLAIN_TEXT_LANGUAGE
        );
        assert_eq!(
            SnippetContent::new("a".into(), Some(""), String::new()).language,
            PLAIN_TEXT_LANGUAGE
        );
    }

    #[test]
    fn snippet_uses_camel_case_keys() {
        let snippet = Snippet {
            id: "0123".into(),
            is_deleted: false,
            is_favorites: false,
            folder_id: "f".into(),
            tags_ids: vec!["t".into()],
            description: "Hello #demo".into(),
            name: "Hello".into(),
            content: vec![],
            created_at: 10,
            updated_at: 20,
        };

        let json = serde_json::to_value(&snippet).unwrap();
        for key in [
            "isDeleted",
            "isFavorites",
            "folderId",
            "tagsIds",
            "createdAt",
            "updatedAt",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
