use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::storage::{AuthorRepository, BookRepository, DocumentStore, NoteRepository};

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with one repository per collection, all sharing `store`.
pub fn build_schema(store: Arc<DocumentStore>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(AuthorRepository::new(store.clone()))
        .data(BookRepository::new(store.clone()))
        .data(NoteRepository::new(store))
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by ID
    async fn book(&self, ctx: &Context<'_>, id: Option<ID>) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let repo = ctx.data::<BookRepository>()?;
        Ok(repo.get(&id)?.map(Book::from))
    }

    /// List all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let repo = ctx.data::<BookRepository>()?;
        Ok(repo.list()?.into_iter().map(Book::from).collect())
    }

    /// Get a single author by ID
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let repo = ctx.data::<AuthorRepository>()?;
        Ok(repo.get(&id)?.map(Author::from))
    }

    /// List all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let repo = ctx.data::<AuthorRepository>()?;
        Ok(repo.list()?.into_iter().map(Author::from).collect())
    }

    /// Get a single note by ID
    async fn note(&self, ctx: &Context<'_>, id: Option<ID>) -> async_graphql::Result<Option<Note>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let repo = ctx.data::<NoteRepository>()?;
        Ok(repo.get(&id)?.map(Note::from))
    }

    /// List all notes
    async fn notes(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Note>> {
        let repo = ctx.data::<NoteRepository>()?;
        Ok(repo.list()?.into_iter().map(Note::from).collect())
    }
}

pub struct MutationRoot;

/// Remove and update mutations return the affected record rather than a
/// write acknowledgment: the first removed record, or the record as stored
/// after the update. Both are null when nothing matched.
#[Object]
impl MutationRoot {
    /// Create a new author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> async_graphql::Result<Author> {
        let repo = ctx.data::<AuthorRepository>()?;
        Ok(repo.create(name, age)?.into())
    }

    /// Create a new book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        author_id: ID,
    ) -> async_graphql::Result<Book> {
        let repo = ctx.data::<BookRepository>()?;
        Ok(repo.create(name, genre, author_id.0)?.into())
    }

    /// Create a new note
    async fn add_note(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: String,
    ) -> async_graphql::Result<Note> {
        let repo = ctx.data::<NoteRepository>()?;
        Ok(repo.create(title, description)?.into())
    }

    /// Remove every author with this exact name
    async fn remove_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let repo = ctx.data::<AuthorRepository>()?;
        let removal = repo.remove_by_name(&name)?;
        tracing::info!(name = %name, count = removal.deleted_count(), "Authors removed");
        Ok(removal.into_first().map(Author::from))
    }

    /// Remove every book with this exact name
    async fn remove_book(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Book>> {
        let repo = ctx.data::<BookRepository>()?;
        let removal = repo.remove_by_name(&name)?;
        tracing::info!(name = %name, count = removal.deleted_count(), "Books removed");
        Ok(removal.into_first().map(Book::from))
    }

    /// Remove every note with this exact title
    async fn remove_note(
        &self,
        ctx: &Context<'_>,
        title: String,
    ) -> async_graphql::Result<Option<Note>> {
        let repo = ctx.data::<NoteRepository>()?;
        let removal = repo.remove_by_title(&title)?;
        tracing::info!(title = %title, count = removal.deleted_count(), "Notes removed");
        Ok(removal.into_first().map(Note::from))
    }

    /// Rename the first author called `currentName` and set its age
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        current_name: String,
        new_name: String,
        age: i32,
    ) -> async_graphql::Result<Option<Author>> {
        let repo = ctx.data::<AuthorRepository>()?;
        let updated = repo.update_by_name(&current_name, new_name, age)?;
        Ok(updated.map(Author::from))
    }

    /// Rewrite the first book called `currentName`
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        current_name: String,
        new_name: String,
        genre: String,
        author_id: ID,
    ) -> async_graphql::Result<Option<Book>> {
        let repo = ctx.data::<BookRepository>()?;
        let updated = repo.update_by_name(&current_name, new_name, genre, author_id.0)?;
        Ok(updated.map(Book::from))
    }

    /// Rewrite the first note titled `currentTitle`
    async fn update_note(
        &self,
        ctx: &Context<'_>,
        current_title: String,
        new_title: String,
        description: String,
    ) -> async_graphql::Result<Option<Note>> {
        let repo = ctx.data::<NoteRepository>()?;
        let updated = repo.update_by_title(&current_title, new_title, description)?;
        Ok(updated.map(Note::from))
    }
}
