//! Loan model and the checkout rules

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{book::Book, user::User};
use crate::error::{AppError, AppResult};

/// Active loan as stored in the `loans` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(rename = "loanID")]
    pub id: i32,
    #[serde(rename = "userID")]
    pub user_id: i32,
    #[serde(rename = "bookID")]
    pub book_id: i32,
    pub due_date: DateTime<Utc>,
}

/// Due date for a loan starting at `start`
pub fn due_date_from(start: DateTime<Utc>, duration_days: i64) -> DateTime<Utc> {
    start + Duration::days(duration_days)
}

/// Decide whether a checkout may proceed.
///
/// `existing` is the active loan of the same user for the same book, if any.
/// Checks run in a fixed order so the caller always gets the most precise
/// reason: references first, then availability, then duplicates.
pub fn ensure_checkout_allowed(
    user: Option<&User>,
    book: Option<&Book>,
    existing: Option<&Loan>,
) -> AppResult<()> {
    let book = match (user, book) {
        (Some(_), Some(book)) => book,
        _ => return Err(AppError::InvalidReference),
    };

    if book.available_copies <= 0 {
        return Err(AppError::Unavailable);
    }

    if existing.is_some() {
        return Err(AppError::DuplicateLoan);
    }

    Ok(())
}
