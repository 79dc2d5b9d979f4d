//! Business logic services

pub mod catalog;
pub mod loans;
pub mod users;

use std::sync::Arc;

use crate::{
    config::LoanConfig,
    error::{AppError, AppResult},
    repository::{BookStore, LoanStore, Repository, UserStore},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services on top of the PostgreSQL repository
    pub fn new(repository: Repository, loan_config: LoanConfig) -> Self {
        Self::from_stores(repository.books, repository.users, repository.loans, loan_config)
    }

    /// Create all services from explicit store handles
    pub fn from_stores(
        books: Arc<dyn BookStore>,
        users: Arc<dyn UserStore>,
        loans: Arc<dyn LoanStore>,
        loan_config: LoanConfig,
    ) -> Self {
        Self {
            catalog: catalog::CatalogService::new(books),
            users: users::UsersService::new(users),
            loans: loans::LoansService::new(loans, loan_config),
        }
    }
}

/// Listings never answer with an empty collection: nothing found is reported
/// as `NotFound` carrying `message`.
pub(crate) fn non_empty<T>(rows: Vec<T>, message: &str) -> AppResult<Vec<T>> {
    if rows.is_empty() {
        Err(AppError::NotFound(message.to_string()))
    } else {
        Ok(rows)
    }
}
