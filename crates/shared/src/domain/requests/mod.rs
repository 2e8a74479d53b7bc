mod cancel;
mod payment;
mod validation;

pub use self::cancel::CancelRequest;
pub use self::payment::PaymentRequest;
pub use self::validation::{validate_cancel, validate_payment};
