mod aes;

pub use self::aes::AesGcmCardCipher;
