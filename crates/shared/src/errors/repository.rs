use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Conflicting write: {0}")]
    Conflict(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
