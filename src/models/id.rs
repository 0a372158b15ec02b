use rand::Rng;
use rand::distributions::Alphanumeric;
use std::collections::HashSet;
use uuid::Uuid;

/// Length of tag and folder identifiers
pub const SHORT_ID_LEN: usize = 8;

/// Generates a random `[A-Za-z0-9]` string of the given length
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Long identifier for snippets: a v4 UUID without hyphens
pub fn snippet_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Hands out short identifiers that are never repeated within one registry
#[derive(Debug, Default)]
pub struct ShortIds {
    issued: HashSet<String>,
}

impl ShortIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        loop {
            let id = random_string(SHORT_ID_LEN);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
