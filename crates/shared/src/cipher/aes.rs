use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::{abstract_trait::cipher::CardCipherTrait, errors::CipherError};

const NONCE_LENGTH: usize = 12;

/// AES-256-GCM over the framed card data. The key is the SHA-256 digest of
/// the password; output is base64 of `nonce || ciphertext || tag`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AesGcmCardCipher;

impl AesGcmCardCipher {
    pub fn new() -> Self {
        Self
    }

    fn cipher(key: &str) -> Result<Aes256Gcm, CipherError> {
        let digest = Sha256::digest(key.as_bytes());
        Aes256Gcm::new_from_slice(&digest).map_err(|e| CipherError::Encrypt(e.to_string()))
    }
}

impl CardCipherTrait for AesGcmCardCipher {
    fn encrypt(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
        let cipher = Self::cipher(key)?;

        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| CipherError::Encrypt(e.to_string()))?;

        let mut framed = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        framed.extend_from_slice(&nonce_bytes);
        framed.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(framed))
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, CipherError> {
        let framed = STANDARD
            .decode(ciphertext)
            .map_err(|e| CipherError::Encoding(e.to_string()))?;

        if framed.len() <= NONCE_LENGTH {
            return Err(CipherError::Decrypt("ciphertext too short".into()));
        }

        let (nonce_bytes, body) = framed.split_at(NONCE_LENGTH);
        let plaintext = Self::cipher(key)?
            .decrypt(Nonce::from_slice(nonce_bytes), body)
            .map_err(|e| CipherError::Decrypt(e.to_string()))?;

        String::from_utf8(plaintext).map_err(|e| CipherError::Decrypt(e.to_string()))
    }
}
