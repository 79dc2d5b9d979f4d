//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::AppResult,
    models::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, available_copies)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.available_copies)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            DELETE FROM books
            WHERE id = (SELECT id FROM books WHERE isbn = $1 ORDER BY id LIMIT 1)
            RETURNING *
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE isbn = $1 ORDER BY id LIMIT 1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_title(&self, fragment: &str) -> AppResult<Vec<Book>> {
        // strpos instead of LIKE: '%' and '_' in the fragment stay literal
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE strpos(title, $1) > 0 ORDER BY id",
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author = $1 ORDER BY id",
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
