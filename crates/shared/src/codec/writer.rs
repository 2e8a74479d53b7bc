use crate::{
    codec::{
        layout::{Field, RECORD_LENGTH, TRAILER},
        wire::WireRecord,
    },
    errors::PaymentError,
};

/// Where a value sits inside its field when it is shorter than the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Value first, padding after.
    Left,
    /// Padding first, value after.
    Right,
}

/// Accumulates a record field by field. Every write checks the value
/// against the field width, so an oversized value is rejected instead of
/// shifting the fields behind it.
pub struct RecordWriter {
    buf: String,
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(RECORD_LENGTH),
        }
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Writes a value that must fill the field exactly.
    pub fn exact(&mut self, field: Field, value: &str) -> Result<&mut Self, PaymentError> {
        self.check(field, value)?;
        if value.len() != field.width {
            return Err(PaymentError::InvalidFieldWidth {
                field: field.name,
                expected: field.width,
                actual: value.len(),
            });
        }

        self.buf.push_str(value);
        Ok(self)
    }

    /// Writes a value of at most `field.width` characters, filling the rest
    /// of the field with `pad`.
    pub fn padded(
        &mut self,
        field: Field,
        value: &str,
        align: Align,
        pad: char,
    ) -> Result<&mut Self, PaymentError> {
        self.check(field, value)?;
        if value.len() > field.width {
            return Err(PaymentError::OversizedField {
                field: field.name,
                max: field.width,
                actual: value.len(),
            });
        }

        let padding = field.width - value.len();
        match align {
            Align::Left => {
                self.buf.push_str(value);
                self.fill(pad, padding);
            }
            Align::Right => {
                self.fill(pad, padding);
                self.buf.push_str(value);
            }
        }

        Ok(self)
    }

    /// Fills the whole field with spaces.
    pub fn blank(&mut self, field: Field) -> &mut Self {
        debug_assert_eq!(self.buf.len(), field.offset, "{} written out of order", field.name);
        self.fill(' ', field.width);
        self
    }

    /// Pads the record with spaces up to its full length.
    pub fn finish(mut self) -> Result<WireRecord, PaymentError> {
        if self.buf.len() > RECORD_LENGTH {
            return Err(PaymentError::OversizedField {
                field: "record",
                max: RECORD_LENGTH,
                actual: self.buf.len(),
            });
        }

        let remaining = RECORD_LENGTH - self.buf.len();
        debug_assert!(remaining >= TRAILER.width, "record body overran the trailer");
        self.fill(' ', remaining);

        Ok(WireRecord::from_encoded(self.buf))
    }

    fn check(&self, field: Field, value: &str) -> Result<(), PaymentError> {
        debug_assert_eq!(self.buf.len(), field.offset, "{} written out of order", field.name);
        if !value.is_ascii() {
            return Err(PaymentError::NonAsciiField(field.name));
        }
        Ok(())
    }

    fn fill(&mut self, pad: char, count: usize) {
        self.buf.extend(std::iter::repeat_n(pad, count));
    }
}
