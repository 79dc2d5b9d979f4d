//! API handlers for the REST endpoints

pub mod health;
pub mod library;
pub mod loans;
pub mod openapi;
pub mod users;

use axum::{
    http::{header, HeaderMap, HeaderValue},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// `Location` header pointing at the lookup route of a created resource.
/// Nothing is set when the resource has no lookup key.
pub(crate) fn location(lookup_path: &str, key: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(key) = key {
        let target = format!("{}/{}", lookup_path, urlencoding::encode(key));
        if let Ok(value) = HeaderValue::from_str(&target) {
            headers.insert(header::LOCATION, value);
        }
    }
    headers
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let library_routes = Router::new()
        .route("/AddBook", post(library::add_book))
        .route("/RemoveBook/:isbn", delete(library::remove_book))
        .route("/FindBookByTitle/:title", get(library::find_by_title))
        .route("/FindBookByAuthor/:author", get(library::find_by_author))
        .route("/FindBookByISBN/:isbn", get(library::find_by_isbn))
        .route("/DisplayInfo", get(library::list_books));

    let user_routes = Router::new()
        .route("/AddUser", post(users::add_user))
        .route("/RemoveUser/:email", delete(users::remove_user))
        .route("/FindUserByEmail/:email", get(users::find_by_email))
        .route("/DisplayInfo", get(users::list_users));

    let loan_routes = Router::new()
        .route("/CheckoutBook", post(loans::checkout_book))
        .route("/ReturnBook", post(loans::return_book))
        .route("/GetLoansByUser/:user_id", get(loans::loans_by_user))
        .route("/GetLoansByBook/:book_id", get(loans::loans_by_book));

    let api = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/Library", library_routes)
        .nest("/api/UserManager", user_routes)
        .nest("/api/LoanManager", loan_routes)
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
