//! Account management module
//!
//! PostgreSQL-based storage for user accounts (INN + balance).

pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use models::Account;
pub use repository::AccountRepository;
pub use validation::{Inn, ValidationError};

// Re-export Database from top-level db module
pub use crate::db::Database;
