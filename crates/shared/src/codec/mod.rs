//! The legacy switch message format: card data framing and the 450
//! character fixed-width payment and cancellation records.

mod card_data;
mod layout;
mod record;
mod wire;
mod writer;

pub use self::card_data::{CARD_DATA_DELIMITER, CardData, decrypt_card_data, encrypt_card_data};
pub use self::layout::{
    AMOUNT, CARD_DATA, CARD_NUMBER, CVC, EXPIRATION_DATE, FIELDS, Field, INSTALLMENT_MONTHS,
    MANAGEMENT_NUMBER, MESSAGE_TYPE, ORIGIN_MANAGEMENT_NUMBER, RECORD_LENGTH, TRAILER, VAT,
};
pub use self::record::{encode_cancel_record, encode_payment_record};
pub use self::wire::{MessageType, RecordFields, WireRecord};
pub use self::writer::{Align, RecordWriter};
