//! File-based document store for the bookshelf.
//!
//! Documents are stored one per file, grouped by collection, under the
//! data directory (`.bookshelf/` by default).
//!
//! ## Layout
//!
//! ```text
//! .bookshelf/
//!   .id               sequential ID counter
//!   authors/<id>.yml
//!   books/<id>.yml
//!   notes/<id>.toml
//! ```
//!
//! ## Components
//!
//! - [`DocumentStore`]: collection-generic find/insert/remove/update primitives
//! - [`AuthorRepository`], [`BookRepository`], [`NoteRepository`]: typed
//!   access per entity, one store call per operation
//! - [`render_document`] / [`parse_document`]: YAML and TOML encoding

mod codec;
mod repository;
mod store;

pub use codec::{DocumentFormat, parse_document, render_document};
pub use repository::{AuthorRepository, BookRepository, NoteRepository};
pub use store::{DocumentStore, Removal};
