use super::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub age: i32,

    #[serde(default)]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub updated: DateTime<Utc>,
}

impl Author {
    pub fn new(id: String, name: String, age: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            age,
            created: now,
            updated: now,
        }
    }
}

impl Document for Author {
    const COLLECTION: &'static str = "authors";

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
