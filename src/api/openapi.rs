//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, library, loans, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circulation API",
        version = "1.0.0",
        description = "Library catalog, patron and loan REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Library
        library::add_book,
        library::remove_book,
        library::find_by_title,
        library::find_by_author,
        library::find_by_isbn,
        library::list_books,
        // Users
        users::add_user,
        users::remove_user,
        users::find_by_email,
        users::list_users,
        // Loans
        loans::checkout_book,
        loans::return_book,
        loans::loans_by_user,
        loans::loans_by_book,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::NewBook,
            crate::models::User,
            crate::models::NewUser,
            crate::models::Loan,
            loans::CheckoutRequest,
            loans::ReturnBookRequest,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "library", description = "Catalog management"),
        (name = "users", description = "Patron management"),
        (name = "loans", description = "Checkout and return")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
