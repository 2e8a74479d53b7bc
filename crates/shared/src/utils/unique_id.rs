use base64::{Engine, engine::general_purpose::URL_SAFE};
use uuid::Uuid;

pub const UNIQUE_ID_LENGTH: usize = 20;

/// Generates a 20 character management number.
///
/// A random v4 UUID is rendered in its hyphenated form, the text is
/// base64url encoded and the first 20 characters are kept. Only the first
/// 15 characters of the UUID text survive the cut: 8 hex digits, a hyphen,
/// 4 hex digits, a hyphen and the version nibble `4`. The token therefore
/// carries 48 random bits, unique enough for switch traffic but not a
/// cryptographic identifier.
pub fn generate_unique_id() -> String {
    let uuid = Uuid::new_v4().to_string();
    let mut encoded = URL_SAFE.encode(uuid.as_bytes());
    encoded.truncate(UNIQUE_ID_LENGTH);
    encoded
}
