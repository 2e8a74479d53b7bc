use std::num::ParseIntError;

use thiserror::Error;

use crate::errors::CipherError;

/// Failures raised by the payment core: request validation, card data
/// framing and fixed-width record encoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("The {0} field is required.")]
    MissingField(&'static str),

    #[error("The {field} ({vat}) is bigger than the {price_field} ({price}).")]
    InconsistentAmount {
        field: &'static str,
        vat: i64,
        price_field: &'static str,
        price: i64,
    },

    #[error("Failed to parse {field} value {value:?}: {source}")]
    ParseFailure {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("The {field} is {actual} characters long, the record allows at most {max}")]
    OversizedField {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("The {field} must be exactly {expected} characters, got {actual}")]
    InvalidFieldWidth {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("The {0} must not be negative")]
    NegativeAmount(&'static str),

    #[error("The {0} contains non-ASCII characters")]
    NonAsciiField(&'static str),

    #[error("The {0} must not contain the '|' delimiter")]
    DelimiterInField(&'static str),

    #[error("Stored card data is malformed")]
    MalformedCardData,

    #[error("Malformed wire record: {0}")]
    MalformedRecord(String),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}
