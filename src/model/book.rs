use super::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub genre: String,

    /// ID of the author. Not checked against the authors collection.
    pub author_id: String,

    #[serde(default)]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub updated: DateTime<Utc>,
}

impl Book {
    pub fn new(id: String, name: String, genre: String, author_id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            genre,
            author_id,
            created: now,
            updated: now,
        }
    }

    pub fn is_by(&self, author_id: &str) -> bool {
        self.author_id == author_id
    }
}

impl Document for Book {
    const COLLECTION: &'static str = "books";

    fn id(&self) -> &str {
        &self.id
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }

    fn touch(&mut self) {
        self.updated = Utc::now();
    }
}
