use std::ops::Range;

pub const RECORD_LENGTH: usize = 450;

/// A fixed position in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Field {
    const fn after(previous: Field, name: &'static str, width: usize) -> Field {
        Field {
            name,
            offset: previous.offset + previous.width,
            width,
        }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

pub const MESSAGE_TYPE: Field = Field {
    name: "message_type",
    offset: 0,
    width: 14,
};
pub const MANAGEMENT_NUMBER: Field = Field::after(MESSAGE_TYPE, "management_number", 20);
pub const CARD_NUMBER: Field = Field::after(MANAGEMENT_NUMBER, "card_number", 20);
pub const INSTALLMENT_MONTHS: Field = Field::after(CARD_NUMBER, "installment_months", 2);
pub const EXPIRATION_DATE: Field = Field::after(INSTALLMENT_MONTHS, "expiration_date", 4);
pub const CVC: Field = Field::after(EXPIRATION_DATE, "cvc", 3);
pub const AMOUNT: Field = Field::after(CVC, "amount", 10);
pub const VAT: Field = Field::after(AMOUNT, "vat", 10);
pub const ORIGIN_MANAGEMENT_NUMBER: Field =
    Field::after(VAT, "origin_management_number", 20);
pub const CARD_DATA: Field = Field::after(ORIGIN_MANAGEMENT_NUMBER, "card_data", 300);
pub const TRAILER: Field = Field::after(CARD_DATA, "trailer", RECORD_LENGTH - CARD_DATA.end());

pub const FIELDS: [Field; 11] = [
    MESSAGE_TYPE,
    MANAGEMENT_NUMBER,
    CARD_NUMBER,
    INSTALLMENT_MONTHS,
    EXPIRATION_DATE,
    CVC,
    AMOUNT,
    VAT,
    ORIGIN_MANAGEMENT_NUMBER,
    CARD_DATA,
    TRAILER,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_tile_the_record_without_gaps() {
        let mut offset = 0;
        for field in FIELDS {
            assert_eq!(field.offset, offset, "{} starts at the wrong offset", field.name);
            offset = field.end();
        }
        assert_eq!(offset, RECORD_LENGTH);
    }

    #[test]
    fn known_offsets() {
        assert_eq!(MANAGEMENT_NUMBER.range(), 14..34);
        assert_eq!(CARD_NUMBER.range(), 34..54);
        assert_eq!(AMOUNT.range(), 63..73);
        assert_eq!(VAT.range(), 73..83);
        assert_eq!(ORIGIN_MANAGEMENT_NUMBER.range(), 83..103);
        assert_eq!(CARD_DATA.range(), 103..403);
        assert_eq!(TRAILER.width, 47);
    }
}
