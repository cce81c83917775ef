//! inn-transfer - INN money transfer service
//!
//! One HTTP endpoint that debits a source account and splits the amount
//! across recipient accounts identified by INN (tax id), atomically, inside
//! a single PostgreSQL transaction with the source row locked.
//!
//! # Modules
//!
//! - [`account`] - Account model, INN validation, repository
//! - [`transfer`] - Request validation and the transfer executor
//! - [`user_auth`] - JWT auth (register/login/middleware)
//! - [`gateway`] - Axum router, handlers, response types
//! - [`config`] - YAML application config
//! - [`db`] - PostgreSQL connection pool
//! - [`logging`] - tracing setup

pub mod account;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod transfer;
pub mod user_auth;

// Convenient re-exports at crate root
pub use account::{Account, AccountRepository, Inn};
pub use db::Database;
pub use transfer::{TransferError, TransferRequest, TransferService};
