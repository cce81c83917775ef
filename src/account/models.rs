//! Data models for user account management

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// User account
///
/// The INN (tax id) uniquely identifies exactly one account. Balance is a
/// fixed-point decimal with 2 decimal places by convention; it is mutated
/// only by the transfer operation and at account creation.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub inn: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}
