//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books, optionally filtered
    pub async fn list_books(&self, query: &BookQuery) -> Vec<Book> {
        let mut books = self.repository.books.list().await;

        if let Some(search) = &query.search {
            let needle = search.to_lowercase();
            books.retain(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
            });
        }
        if let Some(genre) = &query.genre {
            books.retain(|b| b.genre.eq_ignore_ascii_case(genre));
        }
        if let Some(available) = query.available {
            books.retain(|b| b.available == available);
        }

        books
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .await
            .ok_or(AppError::BookNotFound(id))
    }

    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        let created = self.repository.books.insert(book).await?;
        tracing::info!(book_id = created.id, title = %created.title, "book added to catalog");
        Ok(created)
    }

    pub async fn update_book(&self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        self.repository.books.update(id, changes).await
    }

    /// Remove a book from the catalog. Ledger records referencing the id
    /// keep their history; the id is never reused.
    pub async fn delete_book(&self, id: i32) -> AppResult<Book> {
        let removed = self.repository.books.remove(id).await?;
        tracing::info!(book_id = id, "book removed from catalog");
        Ok(removed)
    }
}
