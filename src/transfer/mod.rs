//! Money transfer module
//!
//! Debits a source account and splits the amount across recipient accounts
//! identified by INN, inside one PostgreSQL transaction with the source row
//! locked `FOR UPDATE`.

pub mod error;
pub mod service;
pub mod types;
pub mod validate;

pub use error::TransferError;
pub use service::TransferService;
pub use types::TransferRequest;
pub use validate::FieldErrors;
