mod cipher;
mod errors;
mod payment;
mod repository;
mod service;
mod validate;

pub use self::cipher::CipherError;
pub use self::errors::ErrorResponse;
pub use self::payment::PaymentError;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
