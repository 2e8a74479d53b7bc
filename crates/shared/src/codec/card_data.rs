use crate::{abstract_trait::cipher::CardCipherTrait, errors::PaymentError, utils::Masked};
use std::fmt;

pub const CARD_DATA_DELIMITER: char = '|';

/// The card triple carried encrypted in every record.
#[derive(Clone, PartialEq, Eq)]
pub struct CardData {
    pub card_number: String,
    pub expiration_date: String,
    pub cvc: String,
}

impl CardData {
    pub fn new(
        card_number: impl Into<String>,
        expiration_date: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration_date: expiration_date.into(),
            cvc: cvc.into(),
        }
    }

    /// Joins the three values as `card|expiry|cvc`.
    pub fn to_plaintext(&self) -> Result<String, PaymentError> {
        for (field, value) in [
            ("card_number", &self.card_number),
            ("expiration_date", &self.expiration_date),
            ("cvc", &self.cvc),
        ] {
            if value.contains(CARD_DATA_DELIMITER) {
                return Err(PaymentError::DelimiterInField(field));
            }
        }

        Ok(format!(
            "{}{CARD_DATA_DELIMITER}{}{CARD_DATA_DELIMITER}{}",
            self.card_number, self.expiration_date, self.cvc
        ))
    }

    pub fn from_plaintext(plaintext: &str) -> Result<Self, PaymentError> {
        let mut parts = plaintext.split(CARD_DATA_DELIMITER);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(card_number), Some(expiration_date), Some(cvc), None) => {
                Ok(Self::new(card_number, expiration_date, cvc))
            }
            _ => Err(PaymentError::MalformedCardData),
        }
    }
}

impl fmt::Debug for CardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardData")
            .field("card_number", &Masked(&self.card_number))
            .field("expiration_date", &"****")
            .field("cvc", &"***")
            .finish()
    }
}

/// Frames the card values and encrypts them with `password`. The
/// ciphertext is returned as produced by the cipher.
pub fn encrypt_card_data(
    card_number: &str,
    expiration_date: &str,
    cvc: &str,
    password: &str,
    cipher: &dyn CardCipherTrait,
) -> Result<String, PaymentError> {
    let plaintext = CardData::new(card_number, expiration_date, cvc).to_plaintext()?;
    Ok(cipher.encrypt(&plaintext, password)?)
}

/// Reverses [`encrypt_card_data`] for a stored blob.
pub fn decrypt_card_data(
    ciphertext: &str,
    password: &str,
    cipher: &dyn CardCipherTrait,
) -> Result<CardData, PaymentError> {
    let plaintext = cipher.decrypt(ciphertext, password)?;
    CardData::from_plaintext(&plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CipherError;
    use std::sync::Mutex;

    /// Records what it was asked to encrypt and tags the text with the key.
    #[derive(Default)]
    struct RecordingCipher {
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CardCipherTrait for RecordingCipher {
        fn encrypt(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
            self.seen
                .lock()
                .unwrap()
                .push((plaintext.to_string(), key.to_string()));
            Ok(format!("{key}:{plaintext}"))
        }

        fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, CipherError> {
            ciphertext
                .strip_prefix(&format!("{key}:"))
                .map(str::to_string)
                .ok_or_else(|| CipherError::Decrypt("wrong key".into()))
        }
    }

    #[test]
    fn frames_the_triple_with_pipes() {
        let cipher = RecordingCipher::default();

        let ciphertext =
            encrypt_card_data("4111111111111111", "1226", "123", "secret", &cipher).unwrap();

        assert_eq!(ciphertext, "secret:4111111111111111|1226|123");
        assert_eq!(
            cipher.seen.lock().unwrap().as_slice(),
            &[("4111111111111111|1226|123".to_string(), "secret".to_string())]
        );
    }

    #[test]
    fn delimiter_inside_a_value_is_refused() {
        let cipher = RecordingCipher::default();

        let err = encrypt_card_data("4111|1111", "1226", "123", "secret", &cipher).unwrap_err();

        assert_eq!(err, PaymentError::DelimiterInField("card_number"));
        assert!(cipher.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn decrypts_back_to_the_triple() {
        let cipher = RecordingCipher::default();

        let card = decrypt_card_data("secret:4111111111111111|1226|123", "secret", &cipher)
            .unwrap();

        assert_eq!(card, CardData::new("4111111111111111", "1226", "123"));
    }

    #[test]
    fn cipher_failures_propagate() {
        let cipher = RecordingCipher::default();

        let err = decrypt_card_data("other:4111111111111111|1226|123", "secret", &cipher)
            .unwrap_err();

        assert_eq!(
            err,
            PaymentError::Cipher(CipherError::Decrypt("wrong key".into()))
        );
    }

    #[test]
    fn plaintext_needs_exactly_three_parts() {
        assert_eq!(
            CardData::from_plaintext("4111111111111111|1226"),
            Err(PaymentError::MalformedCardData)
        );
        assert_eq!(
            CardData::from_plaintext("4111111111111111|1226|123|x"),
            Err(PaymentError::MalformedCardData)
        );
    }

    #[test]
    fn debug_output_hides_card_values() {
        let rendered = format!("{:?}", CardData::new("4111111111111111", "1226", "123"));

        assert!(rendered.contains("411111*******111"));
        assert!(!rendered.contains("1226"));
        assert!(!rendered.contains("4111111111111111"));
    }
}
