//! Loan management endpoints (`/api/LoanManager`)

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, User},
};

/// Checkout request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[serde(rename = "userID", alias = "UserID", alias = "userId")]
    pub user_id: i32,
    #[serde(rename = "bookID", alias = "BookID", alias = "bookId")]
    pub book_id: i32,
}

/// Return request: the book being brought back. Only its id is read.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnBookRequest {
    #[serde(rename = "bookID", alias = "BookID", alias = "bookId")]
    pub book_id: i32,
}

/// Lend a book to a user
#[utoipa::path(
    post,
    path = "/api/LoanManager/CheckoutBook",
    tag = "loans",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Book checked out", body = String),
        (status = 400, description = "Unknown user or book, no copy left, or already borrowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<String> {
    state
        .services
        .loans
        .checkout(request.user_id, request.book_id)
        .await?;
    Ok("Book checked out successfully.".to_string())
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/api/LoanManager/ReturnBook",
    tag = "loans",
    request_body = ReturnBookRequest,
    responses(
        (status = 200, description = "Book returned", body = String),
        (status = 400, description = "Book is not on loan", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnBookRequest>,
) -> AppResult<String> {
    state.services.loans.return_book(request.book_id).await?;
    Ok("Book returned successfully.".to_string())
}

/// Books currently loaned to a user
#[utoipa::path(
    get,
    path = "/api/LoanManager/GetLoansByUser/{userId}",
    tag = "loans",
    params(("userId" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Books on loan to the user", body = Vec<Book>),
        (status = 404, description = "User has no loans")
    )
)]
pub async fn loans_by_user(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.loans.books_for_user(user_id).await?;
    Ok(Json(books))
}

/// Users currently holding a book
#[utoipa::path(
    get,
    path = "/api/LoanManager/GetLoansByBook/{bookId}",
    tag = "loans",
    params(("bookId" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Users holding the book", body = Vec<User>),
        (status = 404, description = "Book is not on loan")
    )
)]
pub async fn loans_by_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.loans.users_for_book(book_id).await?;
    Ok(Json(users))
}
