pub mod account;
pub mod health;
pub mod transfer;

pub use account::AccountResponse;
pub use health::HealthResponse;
