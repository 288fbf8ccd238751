//! 256-bit hashes as they appear in transactions (`CheckID`, `Channel`,
//! `InvoiceID`, `AccountTxnID`).

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use super::wire::WireValue;
use crate::config::HASH256_HEX_LENGTH;
use crate::error::DeserializationError;

/// Errors from parsing a [`Hash256`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("expected {HASH256_HEX_LENGTH} hex characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// A 256-bit hash, kept in the exact hex spelling it was given so that a
/// decoded transaction re-encodes to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hash256(String);

impl Hash256 {
    /// Parses a 64-character hex string (either case).
    pub fn new(hex_str: impl Into<String>) -> Result<Self, HashError> {
        let hex_str = hex_str.into();
        if hex_str.len() != HASH256_HEX_LENGTH {
            return Err(HashError::InvalidLength(hex_str.len()));
        }
        hex::decode(&hex_str).map_err(|e| HashError::InvalidHex(e.to_string()))?;
        Ok(Self(hex_str))
    }

    /// Builds a hash from raw bytes, rendered as uppercase hex.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(hex::encode_upper(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the hash to raw bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        // Length and alphabet were checked at construction.
        if let Ok(bytes) = hex::decode(&self.0) {
            out.copy_from_slice(&bytes);
        }
        out
    }
}

impl FromStr for Hash256 {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl WireValue for Hash256 {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone())
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let text = value
            .as_str()
            .ok_or_else(|| DeserializationError::invalid(field, value, "expected a hex string"))?;
        Hash256::new(text).map_err(|e| DeserializationError::invalid(field, value, e.to_string()))
    }
}
