use crate::errors::CipherError;
use std::sync::Arc;

pub type DynCardCipher = Arc<dyn CardCipherTrait + Send + Sync>;

/// Keyed symmetric encryption of the framed card data. Implementations must
/// keep ciphertext for a card triple within 300 characters so it fits the
/// record's card data field.
pub trait CardCipherTrait {
    fn encrypt(&self, plaintext: &str, key: &str) -> Result<String, CipherError>;
    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, CipherError>;
}
