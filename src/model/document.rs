use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// A record persisted in its own collection of the document store.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Directory name of the collection holding this record kind.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn created(&self) -> DateTime<Utc>;

    /// Refresh the modification timestamp.
    fn touch(&mut self);
}
