//! GraphQL schema and resolvers for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 4000
//!
//! # Execute a query from CLI
//! bookshelf query '{ authors { name books { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addAuthor(name: "Tolkien", age: 81) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`, `note`, `notes`
//! - **Mutations**: `addBook`, `addAuthor`, `addNote`, `removeBook`,
//!   `removeAuthor`, `removeNote`, `updateBook`, `updateAuthor`, `updateNote`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{bind, router, run_server};
pub use types::*;
