use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub(crate) enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}

pub(crate) fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub(crate) fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))?;
    Ok(decoded)
}

/// Serde adapter for binary fields that are stored as base64url strings.
///
/// The domain model keeps credential IDs, public keys and AAGUIDs as raw
/// byte buffers; the persistence format is JSON, so the encoding happens
/// here and nowhere else. The bytes are opaque: they are never trimmed,
/// normalized or treated as UTF-8.
pub(crate) mod base64url {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::base64url_encode(bytes))
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        super::base64url_decode(&encoded).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64url_roundtrip() {
        let input = vec![0x01, 0x02, 0xFF, 0x00, 0x7F];
        let encoded = base64url_encode(&input);
        let decoded = base64url_decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_base64url_encode_is_unpadded_url_safe() {
        // 0xFB 0xEF would produce '+' and '/' in the standard alphabet
        let encoded = base64url_encode(&[0xFB, 0xEF, 0xBE]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_base64url_decode_rejects_invalid_input() {
        let result = base64url_decode("not base64url!");
        match result {
            Err(UtilError::Format(msg)) => {
                assert!(msg.contains("Failed to decode"));
            }
            _ => panic!("Expected Format error, got {result:?}"),
        }
    }

    #[test]
    fn test_base64url_decode_empty_is_empty() {
        assert_eq!(base64url_decode("").unwrap(), Vec::<u8>::new());
    }
}
