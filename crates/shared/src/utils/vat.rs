use crate::errors::PaymentError;

const VAT_DIVISOR: f64 = 11.0;

/// Parses a numeric string field, keeping the field name for the error.
pub fn parse_amount(field: &'static str, value: &str) -> Result<i64, PaymentError> {
    value
        .parse::<i64>()
        .map_err(|source| PaymentError::ParseFailure {
            field,
            value: value.to_string(),
            source,
        })
}

/// Returns the vat for `price`: the supplied value verbatim, or
/// `price / 11` rounded to the nearest integer when none was given.
pub fn compute_vat(price: i64, vat: Option<&str>) -> Result<i64, PaymentError> {
    match vat {
        Some(vat) => parse_amount("vat", vat),
        None => Ok((price as f64 / VAT_DIVISOR).round() as i64),
    }
}
