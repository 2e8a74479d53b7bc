use crate::{codec::CardData, model::payment::PaymentModel, utils::mask};
use serde::{Deserialize, Serialize};

/// Result of a payment or cancellation. The card number is always masked
/// and the wire record, which holds the card in clear, is never included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: String,
    pub kind: String,
    pub status: String,
    pub card_number: String,
    pub installment_months: String,
    pub price: i64,
    pub vat: i64,
    pub origin_id: Option<String>,
}

impl PaymentResponse {
    pub fn new(model: PaymentModel, card: &CardData) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
            status: model.status,
            card_number: mask(&card.card_number).into_owned(),
            installment_months: model.installment_months,
            price: model.price,
            vat: model.vat,
            origin_id: model.origin_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetailResponse {
    pub id: String,
    pub kind: String,
    pub status: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvc: String,
    pub installment_months: String,
    pub price: i64,
    pub vat: i64,
    pub origin_id: Option<String>,
    pub created_at: Option<String>,
}

impl PaymentDetailResponse {
    pub fn new(model: PaymentModel, card: CardData) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
            status: model.status,
            card_number: mask(&card.card_number).into_owned(),
            expiration_date: card.expiration_date,
            cvc: card.cvc,
            installment_months: model.installment_months,
            price: model.price,
            vat: model.vat,
            origin_id: model.origin_id,
            created_at: model.created_at.map(|dt| dt.to_string()),
        }
    }
}
