use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("Encryption failed: {0}")]
    Encrypt(String),

    #[error("Decryption failed: {0}")]
    Decrypt(String),

    #[error("Ciphertext is not valid base64: {0}")]
    Encoding(String),
}
