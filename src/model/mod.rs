//! Data models for the bookshelf.
//!
//! This module defines the persisted records:
//!
//! - [`Author`]: a writer, referenced by books
//! - [`Book`]: a book pointing at its author through `author_id`
//! - [`Note`]: a free-standing note
//!
//! Every record implements [`Document`], which ties it to a collection in
//! the document store.

mod author;
mod book;
mod document;
mod note;

pub use author::Author;
pub use book::Book;
pub use document::Document;
pub use note::Note;
