use crate::model;
use crate::storage::{AuthorRepository, BookRepository};
use async_graphql::{Context, ID, Object, Result};

/// A writer of books
pub struct Author {
    inner: model::Author,
}

impl From<model::Author> for Author {
    fn from(author: model::Author) -> Self {
        Self { inner: author }
    }
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn age(&self) -> i32 {
        self.inner.age
    }

    /// Books whose `authorId` points at this author
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let repo = ctx.data::<BookRepository>()?;
        let books = repo.find_by_author(&self.inner.id)?;
        Ok(books.into_iter().map(Book::from).collect())
    }
}

pub struct Book {
    inner: model::Book,
}

impl From<model::Book> for Book {
    fn from(book: model::Book) -> Self {
        Self { inner: book }
    }
}

#[Object]
impl Book {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn genre(&self) -> &str {
        &self.inner.genre
    }

    async fn author_id(&self) -> ID {
        ID(self.inner.author_id.clone())
    }

    /// The referenced author, or null once that author has been removed
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let repo = ctx.data::<AuthorRepository>()?;
        Ok(repo.get(&self.inner.author_id)?.map(Author::from))
    }
}

pub struct Note {
    inner: model::Note,
}

impl From<model::Note> for Note {
    fn from(note: model::Note) -> Self {
        Self { inner: note }
    }
}

#[Object]
impl Note {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn description(&self) -> &str {
        &self.inner.description
    }
}
