use crate::{
    codec::{
        card_data::CardData,
        layout::{
            AMOUNT, CARD_DATA, CARD_NUMBER, CVC, EXPIRATION_DATE, INSTALLMENT_MONTHS,
            MANAGEMENT_NUMBER, MESSAGE_TYPE, ORIGIN_MANAGEMENT_NUMBER, VAT,
        },
        wire::{MessageType, WireRecord},
        writer::{Align, RecordWriter},
    },
    domain::requests::PaymentRequest,
    errors::PaymentError,
    model::payment::PaymentModel,
};

struct RecordBody<'a> {
    management_number: &'a str,
    card_number: &'a str,
    installment_months: &'a str,
    expiration_date: &'a str,
    cvc: &'a str,
    amount: i64,
    vat: i64,
    origin_management_number: Option<&'a str>,
    card_data: &'a str,
}

fn encode(message_type: MessageType, body: RecordBody<'_>) -> Result<WireRecord, PaymentError> {
    if body.amount < 0 {
        return Err(PaymentError::NegativeAmount("amount"));
    }
    if body.vat < 0 {
        return Err(PaymentError::NegativeAmount("vat"));
    }

    let mut writer = RecordWriter::new();
    writer
        .exact(MESSAGE_TYPE, message_type.tag())?
        .exact(MANAGEMENT_NUMBER, body.management_number)?
        .padded(CARD_NUMBER, body.card_number, Align::Left, ' ')?
        .exact(INSTALLMENT_MONTHS, body.installment_months)?
        .exact(EXPIRATION_DATE, body.expiration_date)?
        .exact(CVC, body.cvc)?
        .padded(AMOUNT, &body.amount.to_string(), Align::Right, ' ')?
        .padded(VAT, &body.vat.to_string(), Align::Right, '0')?;

    match body.origin_management_number {
        Some(origin) => writer.exact(ORIGIN_MANAGEMENT_NUMBER, origin)?,
        None => writer.blank(ORIGIN_MANAGEMENT_NUMBER),
    };

    writer.padded(CARD_DATA, body.card_data, Align::Left, ' ')?;
    writer.finish()
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, PaymentError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PaymentError::MissingField(field)),
    }
}

/// Builds the PAYMENT record for a validated request.
pub fn encode_payment_record(
    req: &PaymentRequest,
    management_number: &str,
    vat: i64,
    encrypted_card_data: &str,
) -> Result<WireRecord, PaymentError> {
    encode(
        MessageType::Payment,
        RecordBody {
            management_number,
            card_number: required(&req.card_number, "card_number")?,
            installment_months: required(&req.installment_months, "installment_months")?,
            expiration_date: required(&req.expiration_date, "expiration_date")?,
            cvc: required(&req.cvc, "cvc")?,
            amount: req
                .payment_price
                .ok_or(PaymentError::MissingField("payment_price"))?,
            vat,
            origin_management_number: None,
            card_data: encrypted_card_data,
        },
    )
}

/// Builds the CANCEL record for a stored payment. Installment months,
/// amount, vat and the encrypted card blob all come from the original
/// payment, which is also referenced as the origin management number.
pub fn encode_cancel_record(
    payment: &PaymentModel,
    management_number: &str,
    card: &CardData,
) -> Result<WireRecord, PaymentError> {
    encode(
        MessageType::Cancel,
        RecordBody {
            management_number,
            card_number: &card.card_number,
            installment_months: &payment.installment_months,
            expiration_date: &card.expiration_date,
            cvc: &card.cvc,
            amount: payment.price,
            vat: payment.vat,
            origin_management_number: Some(payment.id.as_str()),
            card_data: &payment.card_data,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::layout::{RECORD_LENGTH, TRAILER};

    const MANAGEMENT_NUMBER_A: &str = "YTk3ZDE2NTAtZjJiNC00";
    const MANAGEMENT_NUMBER_B: &str = "ZGQ1MGY0ZTItNTk4Yy00";

    fn payment_request() -> PaymentRequest {
        PaymentRequest {
            card_number: Some("4111111111111111".into()),
            expiration_date: Some("1226".into()),
            cvc: Some("123".into()),
            installment_months: Some("00".into()),
            payment_price: Some(110_000),
            vat: None,
        }
    }

    fn stored_payment() -> PaymentModel {
        PaymentModel {
            id: MANAGEMENT_NUMBER_A.into(),
            kind: "PAYMENT".into(),
            status: "PAID".into(),
            installment_months: "03".into(),
            price: 110_000,
            vat: 10_000,
            card_data: "Q0lQSEVSVEVYVA==".into(),
            origin_id: None,
            encrypted_record: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn payment_record_layout() {
        let record = encode_payment_record(
            &payment_request(),
            MANAGEMENT_NUMBER_A,
            10_000,
            "Q0lQSEVSVEVYVA==",
        )
        .unwrap();

        assert_eq!(record.len(), RECORD_LENGTH);
        assert_eq!(record.field(MESSAGE_TYPE), " 446PAYMENT   ");
        assert_eq!(&record.as_str()[14..34], MANAGEMENT_NUMBER_A);
        assert_eq!(record.field(CARD_NUMBER), "4111111111111111    ");
        assert_eq!(record.field(INSTALLMENT_MONTHS), "00");
        assert_eq!(record.field(EXPIRATION_DATE), "1226");
        assert_eq!(record.field(CVC), "123");
        assert_eq!(record.field(AMOUNT), "    110000");
        assert_eq!(record.field(VAT), "0000010000");
        assert_eq!(record.field(ORIGIN_MANAGEMENT_NUMBER), " ".repeat(20));
        assert!(record.field(CARD_DATA).starts_with("Q0lQSEVSVEVYVA==  "));
        assert_eq!(record.field(TRAILER), " ".repeat(47));
    }

    #[test]
    fn payment_record_decodes_to_its_inputs() {
        let record = encode_payment_record(
            &payment_request(),
            MANAGEMENT_NUMBER_A,
            10_000,
            "Q0lQSEVSVEVYVA==",
        )
        .unwrap();

        let fields = record.decode().unwrap();

        assert_eq!(fields.message_type, MessageType::Payment);
        assert_eq!(fields.card_number, "4111111111111111");
        assert_eq!(fields.amount, 110_000);
        assert_eq!(fields.vat, 10_000);
        assert_eq!(fields.origin_management_number, None);
        assert_eq!(fields.card_data, "Q0lQSEVSVEVYVA==");
    }

    #[test]
    fn cancel_record_carries_the_original_payment() {
        let payment = stored_payment();
        let card = CardData::new("4111111111111111", "1226", "123");

        let record = encode_cancel_record(&payment, MANAGEMENT_NUMBER_B, &card).unwrap();

        assert_eq!(record.len(), RECORD_LENGTH);
        assert_eq!(record.field(MESSAGE_TYPE), " 446CANCEL    ");
        assert_eq!(record.field(MANAGEMENT_NUMBER), MANAGEMENT_NUMBER_B);
        assert_eq!(record.field(INSTALLMENT_MONTHS), "03");
        assert_eq!(record.field(VAT), "0000010000");
        assert_eq!(record.field(ORIGIN_MANAGEMENT_NUMBER), MANAGEMENT_NUMBER_A);

        let fields = record.decode().unwrap();
        assert_eq!(fields.card_data, payment.card_data);
        assert_eq!(fields.amount, payment.price);
        assert_eq!(fields.expiration_date, "1226");
    }

    #[test]
    fn shortest_card_number_is_space_padded() {
        let req = PaymentRequest {
            card_number: Some("1234567890".into()),
            ..payment_request()
        };

        let record = encode_payment_record(&req, MANAGEMENT_NUMBER_A, 0, "x").unwrap();

        assert_eq!(record.field(CARD_NUMBER), "1234567890          ");
        assert_eq!(record.field(VAT), "0000000000");
    }

    #[test]
    fn oversized_ciphertext_is_rejected() {
        let ciphertext = "A".repeat(301);

        let err =
            encode_payment_record(&payment_request(), MANAGEMENT_NUMBER_A, 10_000, &ciphertext)
                .unwrap_err();

        assert_eq!(
            err,
            PaymentError::OversizedField {
                field: "card_data",
                max: 300,
                actual: 301,
            }
        );
    }

    #[test]
    fn ciphertext_of_exactly_three_hundred_fits() {
        let ciphertext = "A".repeat(300);

        let record =
            encode_payment_record(&payment_request(), MANAGEMENT_NUMBER_A, 10_000, &ciphertext)
                .unwrap();

        assert_eq!(record.field(CARD_DATA), ciphertext);
        assert_eq!(record.len(), RECORD_LENGTH);
    }

    #[test]
    fn oversized_card_number_is_rejected() {
        let req = PaymentRequest {
            card_number: Some("1".repeat(21)),
            ..payment_request()
        };

        let err = encode_payment_record(&req, MANAGEMENT_NUMBER_A, 10_000, "x").unwrap_err();

        assert!(matches!(
            err,
            PaymentError::OversizedField {
                field: "card_number",
                ..
            }
        ));
    }

    #[test]
    fn oversized_amount_is_rejected() {
        let req = PaymentRequest {
            payment_price: Some(12_345_678_901),
            ..payment_request()
        };

        let err = encode_payment_record(&req, MANAGEMENT_NUMBER_A, 10_000, "x").unwrap_err();

        assert!(matches!(err, PaymentError::OversizedField { field: "amount", .. }));
    }

    #[test]
    fn short_management_number_is_rejected() {
        let err = encode_payment_record(&payment_request(), "abc", 10_000, "x").unwrap_err();

        assert!(matches!(
            err,
            PaymentError::InvalidFieldWidth {
                field: "management_number",
                ..
            }
        ));
    }

    #[test]
    fn negative_vat_is_rejected() {
        let err = encode_payment_record(&payment_request(), MANAGEMENT_NUMBER_A, -1, "x")
            .unwrap_err();

        assert_eq!(err, PaymentError::NegativeAmount("vat"));
    }

    #[test]
    fn missing_request_field_is_rejected() {
        let req = PaymentRequest {
            cvc: Some(String::new()),
            ..payment_request()
        };

        let err = encode_payment_record(&req, MANAGEMENT_NUMBER_A, 10_000, "x").unwrap_err();

        assert_eq!(err, PaymentError::MissingField("cvc"));
    }
}
