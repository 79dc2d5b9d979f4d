//! Catalog management service

use std::sync::Arc;

use super::non_empty;
use crate::{
    error::{AppError, AppResult},
    models::{Book, NewBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }

    /// Add a book to the catalog. Duplicate ISBNs are accepted.
    pub async fn add_book(&self, book: NewBook) -> AppResult<Book> {
        if book.available_copies < 0 {
            return Err(AppError::Validation(
                "availableCopies cannot be negative".to_string(),
            ));
        }

        let book = self.books.insert(&book).await?;
        tracing::info!("Catalog: added book id={} isbn={:?}", book.id, book.isbn);
        Ok(book)
    }

    /// Remove a book by ISBN and return it
    pub async fn remove_book(&self, isbn: &str) -> AppResult<Book> {
        let book = self
            .books
            .delete_by_isbn(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))?;
        tracing::info!("Catalog: removed book id={} isbn={}", book.id, isbn);
        Ok(book)
    }

    pub async fn find_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.books
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    pub async fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let books = self.books.find_by_title(title).await?;
        non_empty(books, "No books match this title")
    }

    pub async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        let books = self.books.find_by_author(author).await?;
        non_empty(books, "No books by this author")
    }

    /// Every book in the catalog; an empty catalog is `NotFound`
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let books = self.books.list().await?;
        non_empty(books, "The catalog is empty")
    }
}
