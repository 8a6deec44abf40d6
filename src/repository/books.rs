//! Book catalog repository over the books collection

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    store::{next_id, Collection, Identified, JsonStore},
};

impl Identified for Book {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone)]
pub struct BookCatalog {
    collection: Collection<Book>,
}

impl BookCatalog {
    pub fn new(store: &JsonStore) -> Self {
        Self {
            collection: store.collection("books"),
        }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.collection.load().await
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Book> {
        self.collection.load().await.into_iter().find(|b| b.id == id)
    }

    /// Add a new book to the catalog. New books start available.
    pub async fn insert(&self, create: CreateBook) -> AppResult<Book> {
        let _guard = self.collection.lock().await;
        let mut books = self.collection.load().await;

        let book = Book {
            id: next_id(&books),
            title: create.title,
            author: create.author,
            genre: create.genre,
            isbn: create.isbn,
            published_year: create.published_year,
            available: true,
        };

        books.push(book.clone());
        self.collection.save(&books).await?;
        Ok(book)
    }

    /// Update catalog fields of an existing book. The availability flag is
    /// not touched here; the lending engine owns it.
    pub async fn update(&self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        let _guard = self.collection.lock().await;
        let mut books = self.collection.load().await;

        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BookNotFound(id))?;

        if let Some(title) = changes.title {
            book.title = title;
        }
        if let Some(author) = changes.author {
            book.author = author;
        }
        if let Some(genre) = changes.genre {
            book.genre = genre;
        }
        if let Some(isbn) = changes.isbn {
            book.isbn = Some(isbn);
        }
        if let Some(year) = changes.published_year {
            book.published_year = Some(year);
        }

        let updated = book.clone();
        self.collection.save(&books).await?;
        Ok(updated)
    }

    pub async fn remove(&self, id: i32) -> AppResult<Book> {
        let _guard = self.collection.lock().await;
        let mut books = self.collection.load().await;

        let pos = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(AppError::BookNotFound(id))?;

        let removed = books.remove(pos);
        self.collection.save(&books).await?;
        Ok(removed)
    }

    /// Flip the availability flag. Callers go through the lending engine.
    pub async fn set_availability(&self, id: i32, available: bool) -> AppResult<Book> {
        let _guard = self.collection.lock().await;
        let mut books = self.collection.load().await;

        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BookNotFound(id))?;

        book.available = available;
        let updated = book.clone();
        self.collection.save(&books).await?;
        Ok(updated)
    }
}
