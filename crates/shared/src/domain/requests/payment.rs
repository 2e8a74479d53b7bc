use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid digits regex"));

static EXPIRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])\d{2}$").expect("valid expiration regex"));

static CVC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("valid cvc regex"));

static INSTALLMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}$").expect("valid installment regex"));

pub(crate) static VAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,10}$").expect("valid vat regex"));

/// A new card payment as received from the entry point. Every field is
/// optional on the wire; `validate_payment` decides what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PaymentRequest {
    #[validate(
        length(min = 10, max = 16, message = "Card number must be 10 to 16 digits"),
        regex(path = *DIGITS_RE, message = "Card number must contain digits only")
    )]
    pub card_number: Option<String>,

    #[validate(regex(path = *EXPIRATION_RE, message = "Expiration date must be MMYY"))]
    pub expiration_date: Option<String>,

    #[validate(regex(path = *CVC_RE, message = "CVC must be 3 digits"))]
    pub cvc: Option<String>,

    #[validate(regex(path = *INSTALLMENT_RE, message = "Installment months must be 2 digits"))]
    pub installment_months: Option<String>,

    #[validate(range(
        min = 100,
        max = 1_000_000_000,
        message = "Payment price must be between 100 and 1000000000"
    ))]
    pub payment_price: Option<i64>,

    #[validate(regex(path = *VAT_RE, message = "VAT must be up to 10 digits"))]
    pub vat: Option<String>,
}
