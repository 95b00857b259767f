mod init;
mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::storage::DocumentStore;
use std::path::Path;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub store: Arc<DocumentStore>,
}

impl CommandContext {
    /// Open the document store of the project rooted at `root`. The store
    /// lives as long as the context (and any schema built from it).
    pub fn new(config: BookshelfConfig, root: &Path) -> crate::error::Result<Self> {
        let store = Arc::new(DocumentStore::open(&config, root)?);
        Ok(Self { config, store })
    }
}
