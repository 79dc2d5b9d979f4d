//! Patron management service

use std::sync::Arc;

use super::non_empty;
use crate::{
    error::{AppError, AppResult},
    models::{NewUser, User},
    repository::UserStore,
};

#[derive(Clone)]
pub struct UsersService {
    users: Arc<dyn UserStore>,
}

impl UsersService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn add_user(&self, user: NewUser) -> AppResult<User> {
        let user = self.users.insert(&user).await?;
        tracing::info!("Users: added user id={}", user.id);
        Ok(user)
    }

    /// Remove a patron by email. Their active loans go with them.
    pub async fn remove_user(&self, email: &str) -> AppResult<()> {
        let user = self
            .users
            .delete_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;
        tracing::info!("Users: removed user id={}", user.id);
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<User> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.users.list().await?;
        non_empty(users, "No users registered")
    }
}
