mod api;
mod payment;

pub use self::api::ApiResponse;
pub use self::payment::{PaymentDetailResponse, PaymentResponse};
