//! Patron endpoints (`/api/UserManager`)

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::{
    error::AppResult,
    models::{NewUser, User},
};

/// Add a user
#[utoipa::path(
    post,
    path = "/api/UserManager/AddUser",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User added", body = User,
            headers(("location" = String, description = "FindUserByEmail URL of the new user")))
    )
)]
pub async fn add_user(
    State(state): State<crate::AppState>,
    Json(user): Json<NewUser>,
) -> AppResult<(StatusCode, HeaderMap, Json<User>)> {
    let user = state.services.users.add_user(user).await?;
    let headers = super::location("/api/UserManager/FindUserByEmail", Some(&user.email));
    Ok((StatusCode::CREATED, headers, Json(user)))
}

/// Remove a user by email
#[utoipa::path(
    delete,
    path = "/api/UserManager/RemoveUser/{email}",
    tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 204, description = "User removed"),
        (status = 404, description = "No user with this email")
    )
)]
pub async fn remove_user(
    State(state): State<crate::AppState>,
    Path(email): Path<String>,
) -> AppResult<StatusCode> {
    state.services.users.remove_user(&email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Find a user by email
#[utoipa::path(
    get,
    path = "/api/UserManager/FindUserByEmail/{email}",
    tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "No user with this email")
    )
)]
pub async fn find_by_email(
    State(state): State<crate::AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.services.users.find_by_email(&email).await?;
    Ok(Json(user))
}

/// Display all users
#[utoipa::path(
    get,
    path = "/api/UserManager/DisplayInfo",
    tag = "users",
    responses(
        (status = 200, description = "Every user", body = Vec<User>),
        (status = 404, description = "No users registered")
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users))
}
