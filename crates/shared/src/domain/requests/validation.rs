use crate::{
    domain::requests::{CancelRequest, PaymentRequest},
    errors::PaymentError,
    utils::parse_amount,
};

fn require_text(value: &Option<String>, field: &'static str) -> Result<(), PaymentError> {
    // absent and empty are the same thing to the switch
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(PaymentError::MissingField(field)),
    }
}

fn require_price(value: Option<i64>, field: &'static str) -> Result<i64, PaymentError> {
    value.ok_or(PaymentError::MissingField(field))
}

fn check_vat(
    vat: Option<&str>,
    price: i64,
    price_field: &'static str,
) -> Result<(), PaymentError> {
    let Some(vat) = vat else {
        return Ok(());
    };

    let vat = parse_amount("vat", vat)?;
    if vat > price {
        return Err(PaymentError::InconsistentAmount {
            field: "vat",
            vat,
            price_field,
            price,
        });
    }

    Ok(())
}

/// Checks a payment request field by field, stopping at the first problem.
pub fn validate_payment(req: &PaymentRequest) -> Result<(), PaymentError> {
    require_text(&req.card_number, "card_number")?;
    require_text(&req.expiration_date, "expiration_date")?;
    require_text(&req.cvc, "cvc")?;
    require_text(&req.installment_months, "installment_months")?;
    let price = require_price(req.payment_price, "payment_price")?;

    check_vat(req.vat.as_deref(), price, "payment_price")
}

/// Checks a cancellation request field by field, stopping at the first problem.
pub fn validate_cancel(req: &CancelRequest) -> Result<(), PaymentError> {
    require_text(&req.id, "id")?;
    let price = require_price(req.cancel_price, "cancel_price")?;

    check_vat(req.vat.as_deref(), price, "cancel_price")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn payment() -> PaymentRequest {
        PaymentRequest {
            card_number: Some("4111111111111111".into()),
            expiration_date: Some("1226".into()),
            cvc: Some("123".into()),
            installment_months: Some("00".into()),
            payment_price: Some(110_000),
            vat: None,
        }
    }

    fn cancel() -> CancelRequest {
        CancelRequest {
            id: Some("YTk3ZDE2NTAtZjJiNC00".into()),
            cancel_price: Some(110_000),
            vat: None,
        }
    }

    #[test]
    fn accepts_a_complete_payment() {
        assert_eq!(validate_payment(&payment()), Ok(()));
    }

    #[rstest]
    #[case::card_number("card_number")]
    #[case::expiration_date("expiration_date")]
    #[case::cvc("cvc")]
    #[case::installment_months("installment_months")]
    fn missing_text_field_is_named(#[case] field: &'static str) {
        for value in [None, Some(String::new())] {
            let mut req = payment();
            match field {
                "card_number" => req.card_number = value,
                "expiration_date" => req.expiration_date = value,
                "cvc" => req.cvc = value,
                _ => req.installment_months = value,
            }

            assert_eq!(
                validate_payment(&req),
                Err(PaymentError::MissingField(field))
            );
        }
    }

    #[test]
    fn missing_payment_price_is_named() {
        let req = PaymentRequest {
            payment_price: None,
            ..payment()
        };

        assert_eq!(
            validate_payment(&req),
            Err(PaymentError::MissingField("payment_price"))
        );
    }

    #[test]
    fn first_missing_field_wins() {
        let req = PaymentRequest {
            cvc: None,
            payment_price: None,
            ..payment()
        };

        assert_eq!(
            validate_payment(&req),
            Err(PaymentError::MissingField("cvc"))
        );
    }

    #[test]
    fn vat_above_payment_price_is_inconsistent() {
        let req = PaymentRequest {
            payment_price: Some(1_000),
            vat: Some("1001".into()),
            ..payment()
        };

        assert_eq!(
            validate_payment(&req),
            Err(PaymentError::InconsistentAmount {
                field: "vat",
                vat: 1_001,
                price_field: "payment_price",
                price: 1_000,
            })
        );
    }

    #[test]
    fn vat_equal_to_price_is_accepted() {
        let req = PaymentRequest {
            payment_price: Some(1_000),
            vat: Some("1000".into()),
            ..payment()
        };

        assert_eq!(validate_payment(&req), Ok(()));
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("12.5")]
    fn unparsable_vat_surfaces(#[case] vat: &str) {
        let req = PaymentRequest {
            vat: Some(vat.into()),
            ..payment()
        };

        assert!(matches!(
            validate_payment(&req),
            Err(PaymentError::ParseFailure { field: "vat", .. })
        ));
    }

    #[test]
    fn accepts_a_complete_cancel() {
        assert_eq!(validate_cancel(&cancel()), Ok(()));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    fn missing_cancel_id_is_named(#[case] id: Option<String>) {
        let req = CancelRequest { id, ..cancel() };

        assert_eq!(validate_cancel(&req), Err(PaymentError::MissingField("id")));
    }

    #[test]
    fn missing_cancel_price_is_named() {
        let req = CancelRequest {
            cancel_price: None,
            ..cancel()
        };

        assert_eq!(
            validate_cancel(&req),
            Err(PaymentError::MissingField("cancel_price"))
        );
    }

    #[test]
    fn vat_above_cancel_price_is_inconsistent() {
        let req = CancelRequest {
            cancel_price: Some(500),
            vat: Some("501".into()),
            ..cancel()
        };

        assert!(matches!(
            validate_cancel(&req),
            Err(PaymentError::InconsistentAmount {
                field: "vat",
                price_field: "cancel_price",
                ..
            })
        ));
    }
}
