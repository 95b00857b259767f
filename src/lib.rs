//! # Bookshelf - a GraphQL API over a flat-file document store
//!
//! Bookshelf exposes books, authors and notes through a GraphQL schema.
//! Each record is a YAML or TOML document on disk; every resolver maps to a
//! single store operation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new project
//! bookshelf init
//!
//! # Add an author and a book
//! bookshelf mutate 'addAuthor(name: "Tolkien", age: 81) { id }'
//! bookshelf mutate 'addBook(name: "The Hobbit", genre: "Fantasy", authorId: "<id>") { id }'
//!
//! # Query across the relationship
//! bookshelf query '{ authors { name books { name } } }'
//!
//! # Serve over HTTP
//! bookshelf serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Author, Book, Note)
//! - [`storage`]: Document store and repositories
//! - [`validation`]: Document ID validation

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server exposing it.
pub mod graphql;

pub mod logging;

/// Data models: `Author`, `Book`, `Note`.
pub mod model;

/// File-based document store.
pub mod storage;

pub mod validation;
