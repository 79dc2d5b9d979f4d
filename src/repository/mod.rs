//! Repository layer for database operations
//!
//! Services only see the store traits below; the PostgreSQL implementations
//! are wired together by [`Repository`]. Read methods (`find_*`, `list*`)
//! never mutate, write methods say what they change.

pub mod books;
pub mod loans;
pub mod users;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::AppResult,
    models::{Book, Loan, NewBook, NewUser, User},
};

/// Catalog store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new catalog entry and return it with its assigned id
    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Delete the first entry carrying `isbn`, returning what was removed
    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// First entry carrying `isbn` (lowest id wins on duplicates)
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Entries whose title contains `fragment`, case-sensitive
    async fn find_by_title(&self, fragment: &str) -> AppResult<Vec<Book>>;

    /// Entries whose author equals `author` exactly
    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>>;

    async fn list(&self) -> AppResult<Vec<Book>>;
}

/// Patron store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: &NewUser) -> AppResult<User>;

    /// Delete the first patron with `email`, returning what was removed
    async fn delete_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Loan ledger. The write methods are atomic: either every row they touch
/// changes or none does.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Validate and record a checkout: one copy leaves the shelf and a loan
    /// due at `due_date` is created.
    async fn checkout(&self, user_id: i32, book_id: i32, due_date: DateTime<Utc>) -> AppResult<Loan>;

    /// Close the oldest loan on `book_id`, whoever holds it. When
    /// `restore_copy` is set the copy goes back on the shelf.
    async fn return_by_book(&self, book_id: i32, restore_copy: bool) -> AppResult<Loan>;

    /// Books currently borrowed by `user_id`
    async fn list_books_for_user(&self, user_id: i32) -> AppResult<Vec<Book>>;

    /// Patrons currently holding `book_id`
    async fn list_users_for_book(&self, book_id: i32) -> AppResult<Vec<User>>;
}

/// PostgreSQL-backed stores sharing one connection pool
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
    pub users: Arc<dyn UserStore>,
    pub loans: Arc<dyn LoanStore>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            users: Arc::new(users::UsersRepository::new(pool.clone())),
            loans: Arc::new(loans::LoansRepository::new(pool)),
        }
    }
}
