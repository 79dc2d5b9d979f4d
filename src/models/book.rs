//! Book (catalog entry) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Catalog entry as stored in the `books` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "bookID", alias = "BookID")]
    pub id: i32,
    #[serde(alias = "Title")]
    pub title: Option<String>,
    #[serde(alias = "Author")]
    pub author: Option<String>,
    /// External code, looked up as if unique but never enforced
    #[serde(alias = "ISBN")]
    pub isbn: Option<String>,
    /// Copies currently on the shelf (never negative)
    #[serde(alias = "AvailableCopies")]
    pub available_copies: i32,
}

/// Add book request. Any `bookID` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBook {
    #[serde(alias = "Title")]
    pub title: Option<String>,
    #[serde(alias = "Author")]
    pub author: Option<String>,
    #[serde(alias = "ISBN")]
    pub isbn: Option<String>,
    #[serde(alias = "AvailableCopies")]
    pub available_copies: i32,
}

impl NewBook {
    /// Attach a store-assigned identifier
    pub fn with_id(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            available_copies: self.available_copies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_json_field_names() {
        let book = Book {
            id: 3,
            title: Some("Meditations".to_string()),
            author: Some("Marcus Aurelius".to_string()),
            isbn: Some("1234567890".to_string()),
            available_copies: 1,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["bookID"], 3);
        assert_eq!(json["isbn"], "1234567890");
        assert_eq!(json["availableCopies"], 1);
    }

    #[test]
    fn test_new_book_accepts_pascal_case_and_ignores_id() {
        let new: NewBook = serde_json::from_str(
            r#"{"BookID": 99, "Title": "Meditations", "ISBN": "1234567890", "AvailableCopies": 2}"#,
        )
        .unwrap();
        assert_eq!(new.title.as_deref(), Some("Meditations"));
        assert_eq!(new.author, None);
        assert_eq!(new.available_copies, 2);
        assert_eq!(new.with_id(5).id, 5);
    }
}
