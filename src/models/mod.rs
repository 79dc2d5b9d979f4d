//! Data models for the circulation server

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use loan::Loan;
pub use user::{NewUser, User};
