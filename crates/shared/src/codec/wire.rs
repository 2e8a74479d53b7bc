use crate::{
    codec::layout::{
        AMOUNT, CARD_DATA, CARD_NUMBER, CVC, EXPIRATION_DATE, Field, INSTALLMENT_MONTHS,
        MANAGEMENT_NUMBER, MESSAGE_TYPE, ORIGIN_MANAGEMENT_NUMBER, RECORD_LENGTH, VAT,
    },
    errors::PaymentError,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Payment,
    Cancel,
}

impl MessageType {
    /// The 14 character header, "446" being the length of what follows
    /// the 4 character preamble.
    pub const fn tag(&self) -> &'static str {
        match self {
            MessageType::Payment => " 446PAYMENT   ",
            MessageType::Cancel => " 446CANCEL    ",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        [MessageType::Payment, MessageType::Cancel]
            .into_iter()
            .find(|t| t.tag() == tag)
    }
}

/// A complete 450 character record, ready for the switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRecord(String);

impl WireRecord {
    pub(crate) fn from_encoded(raw: String) -> Self {
        debug_assert_eq!(raw.len(), RECORD_LENGTH);
        Self(raw)
    }

    /// Accepts a record received from elsewhere after checking its length,
    /// character set and message type.
    pub fn parse(raw: &str) -> Result<Self, PaymentError> {
        if !raw.is_ascii() {
            return Err(PaymentError::MalformedRecord(
                "record contains non-ASCII characters".into(),
            ));
        }
        if raw.len() != RECORD_LENGTH {
            return Err(PaymentError::MalformedRecord(format!(
                "expected {RECORD_LENGTH} characters, got {}",
                raw.len()
            )));
        }
        if MessageType::from_tag(&raw[MESSAGE_TYPE.range()]).is_none() {
            return Err(PaymentError::MalformedRecord(format!(
                "unknown message type {:?}",
                &raw[MESSAGE_TYPE.range()]
            )));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw, still padded content of one field.
    pub fn field(&self, field: Field) -> &str {
        &self.0[field.range()]
    }

    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::from_tag(self.field(MESSAGE_TYPE))
    }

    /// Splits the record back into its values with the padding removed.
    pub fn decode(&self) -> Result<RecordFields<'_>, PaymentError> {
        let message_type = self.message_type().ok_or_else(|| {
            PaymentError::MalformedRecord("unknown message type".into())
        })?;

        let origin = self.field(ORIGIN_MANAGEMENT_NUMBER);

        Ok(RecordFields {
            message_type,
            management_number: self.field(MANAGEMENT_NUMBER),
            card_number: self.field(CARD_NUMBER).trim_end_matches(' '),
            installment_months: self.field(INSTALLMENT_MONTHS),
            expiration_date: self.field(EXPIRATION_DATE),
            cvc: self.field(CVC),
            amount: parse_numeric(AMOUNT, self.field(AMOUNT).trim_start_matches(' '))?,
            vat: parse_numeric(VAT, self.field(VAT))?,
            origin_management_number: (!origin.trim().is_empty()).then_some(origin),
            card_data: self.field(CARD_DATA).trim_end_matches(' '),
        })
    }
}

fn parse_numeric(field: Field, value: &str) -> Result<i64, PaymentError> {
    value
        .parse::<i64>()
        .map_err(|source| PaymentError::ParseFailure {
            field: field.name,
            value: value.to_string(),
            source,
        })
}

impl fmt::Display for WireRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WireRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<WireRecord> for String {
    fn from(record: WireRecord) -> Self {
        record.0
    }
}

/// The values carried by a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields<'a> {
    pub message_type: MessageType,
    pub management_number: &'a str,
    pub card_number: &'a str,
    pub installment_months: &'a str,
    pub expiration_date: &'a str,
    pub cvc: &'a str,
    pub amount: i64,
    pub vat: i64,
    pub origin_management_number: Option<&'a str>,
    pub card_data: &'a str,
}
