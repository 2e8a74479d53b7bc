use crate::errors::{PaymentError, RepositoryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Payment {0} is already cancelled")]
    AlreadyCancelled(String),

    #[error("Transaction {0} is not a payment and cannot be cancelled")]
    NotCancellable(String),

    #[error("Cancel price {actual} does not match the payment price {expected}")]
    CancelAmountMismatch { expected: i64, actual: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
