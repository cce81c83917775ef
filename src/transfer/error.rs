use thiserror::Error;

/// Transfer failure taxonomy
///
/// Every variant except `Database` is a client-input error; its display
/// string is surfaced verbatim to the caller as `{"error": "..."}` with
/// status 400. `Database` maps to 500. Nothing here is retried; each
/// failure rolls back that request's transaction and nothing else.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("You cannot debit and credit money to the same account. Please enter a valid INN.")]
    SelfTransfer,

    #[error("This user has Insufficient funds")]
    InsufficientFunds,

    #[error("Invalid INN(s)")]
    InvalidRecipients,

    #[error("Invalid user ID")]
    InvalidSourceAccount,
}

impl TransferError {
    /// True for errors caused by client input (mapped to HTTP 400)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TransferError::Database(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            TransferError::SelfTransfer.to_string(),
            "You cannot debit and credit money to the same account. Please enter a valid INN."
        );
        assert_eq!(
            TransferError::InsufficientFunds.to_string(),
            "This user has Insufficient funds"
        );
        assert_eq!(TransferError::InvalidRecipients.to_string(), "Invalid INN(s)");
        assert_eq!(
            TransferError::InvalidSourceAccount.to_string(),
            "Invalid user ID"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(TransferError::SelfTransfer.is_client_error());
        assert!(TransferError::InsufficientFunds.is_client_error());
        assert!(!TransferError::Database(sqlx::Error::PoolClosed).is_client_error());
    }
}
