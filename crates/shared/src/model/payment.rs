use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// A row of the `payments` table. Payments and cancellations share the
/// table; a cancellation points at its payment through `origin_id`.
/// The wire record carries the card in clear, so it is only ever stored
/// encrypted with the card cipher.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaymentModel {
    pub id: String,
    pub kind: String,
    pub status: String,
    pub installment_months: String,
    pub price: i64,
    pub vat: i64,
    pub card_data: String,
    pub origin_id: Option<String>,
    pub encrypted_record: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl PaymentModel {
    pub fn kind(&self) -> Option<PaymentKind> {
        self.kind.parse().ok()
    }

    pub fn status(&self) -> Option<PaymentStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentKind {
    Payment,
    Cancel,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Payment => "PAYMENT",
            PaymentKind::Cancel => "CANCEL",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAYMENT" => Ok(PaymentKind::Payment),
            "CANCEL" => Ok(PaymentKind::Cancel),
            other => Err(format!("unknown payment kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Paid,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAID" => Ok(PaymentStatus::Paid),
            "CANCELLED" => Ok(PaymentStatus::Cancelled),
            other => Err(format!("unknown payment status: {other}")),
        }
    }
}
