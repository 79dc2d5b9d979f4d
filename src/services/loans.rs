//! Loan management service

use chrono::Utc;
use std::sync::Arc;

use super::non_empty;
use crate::{
    config::LoanConfig,
    error::AppResult,
    models::{loan::due_date_from, Book, Loan, User},
    repository::LoanStore,
};

#[derive(Clone)]
pub struct LoansService {
    loans: Arc<dyn LoanStore>,
    config: LoanConfig,
}

impl LoansService {
    pub fn new(loans: Arc<dyn LoanStore>, config: LoanConfig) -> Self {
        Self { loans, config }
    }

    /// Lend one copy of a book to a patron
    pub async fn checkout(&self, user_id: i32, book_id: i32) -> AppResult<Loan> {
        let due_date = due_date_from(Utc::now(), self.config.duration_days);
        let loan = self.loans.checkout(user_id, book_id, due_date).await?;
        tracing::info!(
            "Loans: book {} checked out by user {}, due {}",
            book_id,
            user_id,
            loan.due_date
        );
        Ok(loan)
    }

    /// Close the loan on a book.
    ///
    /// The ledger is searched by book only, so with several copies out the
    /// oldest loan is the one closed regardless of who brings the book back.
    pub async fn return_book(&self, book_id: i32) -> AppResult<Loan> {
        let loan = self
            .loans
            .return_by_book(book_id, self.config.restore_copies_on_return)
            .await?;
        tracing::info!("Loans: book {} returned (loan {}, user {})", book_id, loan.id, loan.user_id);
        Ok(loan)
    }

    /// Books currently borrowed by a patron
    pub async fn books_for_user(&self, user_id: i32) -> AppResult<Vec<Book>> {
        let books = self.loans.list_books_for_user(user_id).await?;
        non_empty(books, "No books currently loaned by this user.")
    }

    /// Patrons currently holding a book
    pub async fn users_for_book(&self, book_id: i32) -> AppResult<Vec<User>> {
        let users = self.loans.list_users_for_book(book_id).await?;
        non_empty(users, "No users currently loaning this book.")
    }
}
