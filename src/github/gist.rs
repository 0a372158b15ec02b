use anyhow::{Context, Result};
use chrono::DateTime;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A gist as returned by the `/users/{user}/gists` listing.
/// Only the fields the migration reads are kept; everything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gist {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub files: GistFiles,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub raw_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Files of a gist in the order the API listed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GistFiles(pub Vec<(String, GistFile)>);

impl GistFiles {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GistFile)> {
        self.0.iter().map(|(name, file)| (name.as_str(), file))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for GistFiles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, file) in &self.0 {
            map.serialize_entry(name, file)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GistFiles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FilesVisitor;

        impl<'de> Visitor<'de> for FilesVisitor {
            type Value = GistFiles;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of filename to file")
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(GistFiles::default())
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(GistFiles::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_map(self)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut files = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, file)) = map.next_entry::<String, Option<GistFile>>()? {
                    files.push((name, file.unwrap_or_default()));
                }
                Ok(GistFiles(files))
            }
        }

        deserializer.deserialize_option(FilesVisitor)
    }
}

impl Gist {
    /// Decodes one entry of a listing page
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).context("Malformed gist record")
    }

    /// Id for log messages
    pub fn id_or_unknown(value: &Value) -> &str {
        value.get("id").and_then(Value::as_str).unwrap_or("<unknown>")
    }

    pub fn description(&self) -> Result<&str> {
        self.description
            .as_deref()
            .context("Gist has no description")
    }

    /// Creation time in milliseconds since the epoch
    pub fn created_at_millis(&self) -> Result<i64> {
        let raw = self
            .created_at
            .as_deref()
            .context("Gist has no creation timestamp")?;
        parse_millis(raw)
    }

    /// Last update in milliseconds since the epoch, `None` when the gist has none
    pub fn updated_at_millis(&self) -> Result<Option<i64>> {
        match self.updated_at.as_deref() {
            Some(raw) if !raw.is_empty() => parse_millis(raw).map(Some),
            _ => Ok(None),
        }
    }
}

fn parse_millis(raw: &str) -> Result<i64> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp_millis())
        .with_context(|| format!("Invalid timestamp '{raw}'"))
}
