use super::store::{DocumentStore, Removal};
use crate::{
    error::Result,
    model::{Author, Book, Note},
};
use std::sync::Arc;

/// Author collection access.
#[derive(Clone)]
pub struct AuthorRepository {
    store: Arc<DocumentStore>,
}

impl AuthorRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, id: &str) -> Result<Option<Author>> {
        self.store.find_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<Author>> {
        self.store.find_all()
    }

    pub fn create(&self, name: String, age: i32) -> Result<Author> {
        let author = Author::new(self.store.generate_id()?, name, age);
        tracing::info!(id = %author.id, name = %author.name, "Creating author");
        self.store.insert(&author)?;
        Ok(author)
    }

    pub fn remove_by_name(&self, name: &str) -> Result<Removal<Author>> {
        tracing::info!(name = %name, "Removing authors");
        self.store.remove_where(|a: &Author| a.name == name)
    }

    pub fn update_by_name(
        &self,
        current_name: &str,
        new_name: String,
        age: i32,
    ) -> Result<Option<Author>> {
        tracing::info!(current_name = %current_name, new_name = %new_name, "Updating author");
        self.store
            .update_first_where(|a: &Author| a.name == current_name, |a| {
                a.name = new_name;
                a.age = age;
            })
    }
}

/// Book collection access.
#[derive(Clone)]
pub struct BookRepository {
    store: Arc<DocumentStore>,
}

impl BookRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, id: &str) -> Result<Option<Book>> {
        self.store.find_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<Book>> {
        self.store.find_all()
    }

    pub fn find_by_author(&self, author_id: &str) -> Result<Vec<Book>> {
        self.store.find_where(|b: &Book| b.is_by(author_id))
    }

    pub fn create(&self, name: String, genre: String, author_id: String) -> Result<Book> {
        let book = Book::new(self.store.generate_id()?, name, genre, author_id);
        tracing::info!(id = %book.id, name = %book.name, author_id = %book.author_id, "Creating book");
        self.store.insert(&book)?;
        Ok(book)
    }

    pub fn remove_by_name(&self, name: &str) -> Result<Removal<Book>> {
        tracing::info!(name = %name, "Removing books");
        self.store.remove_where(|b: &Book| b.name == name)
    }

    pub fn update_by_name(
        &self,
        current_name: &str,
        new_name: String,
        genre: String,
        author_id: String,
    ) -> Result<Option<Book>> {
        tracing::info!(current_name = %current_name, new_name = %new_name, "Updating book");
        self.store
            .update_first_where(|b: &Book| b.name == current_name, |b| {
                b.name = new_name;
                b.genre = genre;
                b.author_id = author_id;
            })
    }
}

/// Note collection access.
#[derive(Clone)]
pub struct NoteRepository {
    store: Arc<DocumentStore>,
}

impl NoteRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, id: &str) -> Result<Option<Note>> {
        self.store.find_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<Note>> {
        self.store.find_all()
    }

    pub fn create(&self, title: String, description: String) -> Result<Note> {
        let note = Note::new(self.store.generate_id()?, title, description);
        tracing::info!(id = %note.id, title = %note.title, "Creating note");
        self.store.insert(&note)?;
        Ok(note)
    }

    pub fn remove_by_title(&self, title: &str) -> Result<Removal<Note>> {
        tracing::info!(title = %title, "Removing notes");
        self.store.remove_where(|n: &Note| n.title == title)
    }

    pub fn update_by_title(
        &self,
        current_title: &str,
        new_title: String,
        description: String,
    ) -> Result<Option<Note>> {
        tracing::info!(current_title = %current_title, new_title = %new_title, "Updating note");
        self.store
            .update_first_where(|n: &Note| n.title == current_title, |n| {
                n.title = new_title;
                n.description = description;
            })
    }
}
