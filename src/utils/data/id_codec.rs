//! Reversible ID obfuscation for URLs
//!
//! IDs are encoded as base64 of their decimal digits, so `42` becomes
//! `"NDI="`. Decoding is lossy: anything that is not base64 of a decimal
//! number yields `None`.

use crate::config::{IdAlphabet, IdCodecConfig};
use crate::utils::error::{PolicyError, Result};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

#[derive(Debug, Clone, Copy, Default)]
pub struct IdCodec {
    alphabet: IdAlphabet,
}

impl IdCodec {
    pub fn new(config: &IdCodecConfig) -> Self {
        Self {
            alphabet: config.alphabet,
        }
    }

    pub fn encode(&self, id: u64) -> String {
        let digits = id.to_string();
        match self.alphabet {
            IdAlphabet::Standard => STANDARD.encode(digits),
            IdAlphabet::UrlSafe => URL_SAFE_NO_PAD.encode(digits),
        }
    }

    pub fn decode(&self, encoded: &str) -> Option<u64> {
        self.decode_or_err(encoded).ok()
    }

    pub fn decode_or_err(&self, encoded: &str) -> Result<u64> {
        let bytes = match self.alphabet {
            IdAlphabet::Standard => STANDARD.decode(encoded),
            IdAlphabet::UrlSafe => URL_SAFE_NO_PAD.decode(encoded),
        }
        .map_err(|e| PolicyError::decode(format!("Invalid base64 string: {}", e)))?;

        let digits = std::str::from_utf8(&bytes)
            .map_err(|e| PolicyError::decode(format!("Invalid UTF-8 in decoded base64: {}", e)))?;

        // `u64::from_str` accepts a leading '+', which `encode` never produces
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PolicyError::decode(format!("Not a numeric ID: {:?}", digits)));
        }
        // "007" would decode to 7, which encodes back to a different string
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(PolicyError::decode(format!("Non-canonical ID: {:?}", digits)));
        }

        digits
            .parse()
            .map_err(|e| PolicyError::decode(format!("ID out of range: {}", e)))
    }
}
