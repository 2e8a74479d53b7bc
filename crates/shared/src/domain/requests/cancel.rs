use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::requests::payment::VAT_RE;

/// Cancellation of a previous payment, addressed by its management number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CancelRequest {
    #[validate(length(equal = 20, message = "Id must be a 20 character management number"))]
    pub id: Option<String>,

    #[validate(range(
        min = 100,
        max = 1_000_000_000,
        message = "Cancel price must be between 100 and 1000000000"
    ))]
    pub cancel_price: Option<i64>,

    #[validate(regex(path = *VAT_RE, message = "VAT must be up to 10 digits"))]
    pub vat: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_must_be_a_full_management_number() {
        let req = CancelRequest {
            id: Some("short".into()),
            cancel_price: Some(1_000),
            vat: None,
        };

        assert!(req.validate().unwrap_err().field_errors().contains_key("id"));
    }

    #[test]
    fn negative_vat_fails_the_format_check() {
        let req = CancelRequest {
            id: Some("YTk3ZDE2NTAtZjJiNC00".into()),
            cancel_price: Some(1_000),
            vat: Some("-5".into()),
        };

        assert!(req.validate().unwrap_err().field_errors().contains_key("vat"));
    }
}
