//! Loans repository for database operations

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use super::LoanStore;
use crate::{
    error::{AppError, AppResult},
    models::{loan::ensure_checkout_allowed, Book, Loan, User},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanStore for LoansRepository {
    async fn checkout(&self, user_id: i32, book_id: i32, due_date: DateTime<Utc>) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        // Shared lock: a concurrent delete of the patron waits for this
        // checkout, or commits first and the patron is reported missing.
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 FOR SHARE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

        // Row lock: concurrent checkouts of the same book queue up here, so
        // the availability and duplicate checks below see committed state.
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1 FOR UPDATE")
            .bind(book_id)
            .fetch_optional(&mut *tx)
            .await?;

        let existing = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE user_id = $1 AND book_id = $2 ORDER BY id LIMIT 1",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await?;

        ensure_checkout_allowed(user.as_ref(), book.as_ref(), existing.as_ref())?;

        let updated = sqlx::query(
            "UPDATE books SET available_copies = available_copies - 1 WHERE id = $1 AND available_copies > 0",
        )
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::Unavailable);
        }

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (user_id, book_id, due_date)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .bind(due_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(loan)
    }

    async fn return_by_book(&self, book_id: i32, restore_copy: bool) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE book_id = $1 ORDER BY id LIMIT 1 FOR UPDATE",
        )
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotOnLoan)?;

        sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(loan.id)
            .execute(&mut *tx)
            .await?;

        if restore_copy {
            sqlx::query("UPDATE books SET available_copies = available_copies + 1 WHERE id = $1")
                .bind(book_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(loan)
    }

    async fn list_books_for_user(&self, user_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.*
            FROM loans l
            JOIN books b ON b.id = l.book_id
            WHERE l.user_id = $1
            ORDER BY l.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_users_for_book(&self, book_id: i32) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM loans l
            JOIN users u ON u.id = l.user_id
            WHERE l.book_id = $1
            ORDER BY l.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
