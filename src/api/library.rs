//! Catalog endpoints (`/api/Library`)

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, NewBook},
};

/// Add a book to the library
#[utoipa::path(
    post,
    path = "/api/Library/AddBook",
    tag = "library",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book added", body = Book,
            headers(("location" = String, description = "FindBookByISBN URL of the new book"))),
        (status = 400, description = "Invalid book")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<NewBook>,
) -> AppResult<(StatusCode, HeaderMap, Json<Book>)> {
    let book = state.services.catalog.add_book(book).await?;
    let headers = super::location("/api/Library/FindBookByISBN", book.isbn.as_deref());
    Ok((StatusCode::CREATED, headers, Json(book)))
}

/// Remove a book from the library by ISBN
#[utoipa::path(
    delete,
    path = "/api/Library/RemoveBook/{isbn}",
    tag = "library",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Removed book", body = Book),
        (status = 404, description = "No book with this ISBN")
    )
)]
pub async fn remove_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.remove_book(&isbn).await?;
    Ok(Json(book))
}

/// Find books whose title contains the given text
#[utoipa::path(
    get,
    path = "/api/Library/FindBookByTitle/{title}",
    tag = "library",
    params(("title" = String, Path, description = "Part of the title, case-sensitive")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 404, description = "No match")
    )
)]
pub async fn find_by_title(
    State(state): State<crate::AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.find_by_title(&title).await?;
    Ok(Json(books))
}

/// Find books by author
#[utoipa::path(
    get,
    path = "/api/Library/FindBookByAuthor/{author}",
    tag = "library",
    params(("author" = String, Path, description = "Exact author name")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 404, description = "No match")
    )
)]
pub async fn find_by_author(
    State(state): State<crate::AppState>,
    Path(author): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.find_by_author(&author).await?;
    Ok(Json(books))
}

/// Find a book by ISBN
#[utoipa::path(
    get,
    path = "/api/Library/FindBookByISBN/{isbn}",
    tag = "library",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "No book with this ISBN")
    )
)]
pub async fn find_by_isbn(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.find_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// Display all books in the library
#[utoipa::path(
    get,
    path = "/api/Library/DisplayInfo",
    tag = "library",
    responses(
        (status = 200, description = "Whole catalog", body = Vec<Book>),
        (status = 404, description = "Catalog is empty")
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}
