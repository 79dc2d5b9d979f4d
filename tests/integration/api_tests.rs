//! API integration tests against a running server and database

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Add a book with a unique ISBN and return its JSON
async fn add_book(client: &Client, isbn: &str, copies: i32) -> Value {
    let response = client
        .post(format!("{}/api/Library/AddBook", BASE_URL))
        .json(&json!({
            "isbn": isbn,
            "title": "Meditations",
            "author": "Marcus Aurelius",
            "availableCopies": copies
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn add_user(client: &Client, email: &str) -> Value {
    let response = client
        .post(format!("{}/api/UserManager/AddUser", BASE_URL))
        .json(&json!({ "name": "Salar Ali", "email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn checkout(client: &Client, user_id: i64, book_id: i64) -> reqwest::Response {
    client
        .post(format!("{}/api/LoanManager/CheckoutBook", BASE_URL))
        .json(&json!({ "userID": user_id, "bookID": book_id }))
        .send()
        .await
        .expect("Failed to send request")
}

/// Current `availableCopies` of the book carrying `isbn`
async fn copies_on_shelf(client: &Client, isbn: &str) -> i64 {
    let response = client
        .get(format!("{}/api/Library/FindBookByISBN/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let book: Value = response.json().await.expect("Failed to parse response");
    book["availableCopies"].as_i64().expect("No copy count")
}

/// Number of books on loan to a user, 0 when the listing is 404
async fn books_on_loan(client: &Client, user_id: i64) -> usize {
    let response = client
        .get(format!("{}/api/LoanManager/GetLoansByUser/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    if response.status() == 404 {
        return 0;
    }
    assert_eq!(response.status(), 200);
    let books: Value = response.json().await.expect("Failed to parse response");
    books.as_array().map(Vec::len).unwrap_or_default()
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_add_then_find_by_isbn() {
    let client = Client::new();
    let isbn = unique("isbn");
    let added = add_book(&client, &isbn, 1).await;

    let response = client
        .get(format!("{}/api/Library/FindBookByISBN/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let found: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(found, added);
}

#[tokio::test]
#[ignore]
async fn test_checkout_exhausts_copies() {
    let client = Client::new();
    let isbn = unique("isbn");
    let book = add_book(&client, &isbn, 1).await;
    let user = add_user(&client, &unique("reader")).await;
    let other = add_user(&client, &unique("reader")).await;
    let book_id = book["bookID"].as_i64().expect("No book ID");
    let user_id = user["userID"].as_i64().unwrap();

    assert_eq!(books_on_loan(&client, user_id).await, 0);

    let response = checkout(&client, user_id, book_id).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Book checked out successfully.");
    assert_eq!(copies_on_shelf(&client, &isbn).await, 0);
    assert_eq!(books_on_loan(&client, user_id).await, 1);

    let response = checkout(&client, other["userID"].as_i64().unwrap(), book_id).await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book is not available for loan.");
    assert_eq!(copies_on_shelf(&client, &isbn).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_second_checkout_of_same_pair_is_rejected() {
    let client = Client::new();
    let book = add_book(&client, &unique("isbn"), 2).await;
    let user = add_user(&client, &unique("reader")).await;
    let book_id = book["bookID"].as_i64().unwrap();
    let user_id = user["userID"].as_i64().unwrap();

    assert_eq!(checkout(&client, user_id, book_id).await.status(), 200);

    let response = checkout(&client, user_id, book_id).await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User has already borrowed the book.");
}

#[tokio::test]
#[ignore]
async fn test_checkout_unknown_ids() {
    let client = Client::new();

    let response = checkout(&client, -1, -1).await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid user or book ID.");
}

#[tokio::test]
#[ignore]
async fn test_return_round_trip() {
    let client = Client::new();
    let isbn = unique("isbn");
    let book = add_book(&client, &isbn, 1).await;
    let user = add_user(&client, &unique("reader")).await;
    let book_id = book["bookID"].as_i64().unwrap();
    let user_id = user["userID"].as_i64().unwrap();

    assert_eq!(checkout(&client, user_id, book_id).await.status(), 200);
    assert_eq!(copies_on_shelf(&client, &isbn).await, 0);
    assert_eq!(books_on_loan(&client, user_id).await, 1);

    let response = client
        .get(format!("{}/api/LoanManager/GetLoansByBook/{}", BASE_URL, book_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let holders: Value = response.json().await.unwrap();
    assert_eq!(holders.as_array().map(Vec::len), Some(1));

    let response = client
        .post(format!("{}/api/LoanManager/ReturnBook", BASE_URL))
        .json(&book)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Book returned successfully.");

    // Default configuration leaves the copy count where checkout put it
    assert_eq!(copies_on_shelf(&client, &isbn).await, 0);
    assert_eq!(books_on_loan(&client, user_id).await, 0);

    let response = client
        .post(format!("{}/api/LoanManager/ReturnBook", BASE_URL))
        .json(&book)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_remove_user_then_lookup() {
    let client = Client::new();
    let email = unique("leaving");
    add_user(&client, &email).await;

    let response = client
        .delete(format!("{}/api/UserManager/RemoveUser/{}", BASE_URL, email))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/api/UserManager/FindUserByEmail/{}", BASE_URL, email))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
