//! Errors surfaced by the signing and submission glue.

use serde_json::Value;
use thiserror::Error;

use crate::transaction::ValidationErrors;

/// A ledger RPC call that came back with an `error` result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Request failed, {error}: {error_message}")]
pub struct RequestFailure {
    /// The ledger's error code, e.g. `invalidTransaction`.
    pub error: String,
    /// Taken from `error_message`, else `error_exception`.
    pub error_message: String,
}

impl RequestFailure {
    /// Extracts a failure from an RPC result, or `None` if the result carries
    /// no `error` key.
    pub fn from_result(result: &Value) -> Option<Self> {
        let error = result.get("error")?;
        let error = match error.as_str() {
            Some(code) => code.to_string(),
            None => error.to_string(),
        };
        let error_message = ["error_message", "error_exception"]
            .iter()
            .find_map(|key| result.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();
        Some(Self {
            error,
            error_message,
        })
    }
}

/// Everything that can go wrong between a built transaction and a ledger
/// response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transaction failed validation and was never sent anywhere.
    #[error("transaction is invalid: {0}")]
    Validation(#[from] ValidationErrors),

    /// The ledger rejected the request.
    #[error(transparent)]
    Request(#[from] RequestFailure),

    /// The external signer failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The transport failed before a result came back.
    #[error("transport error: {0}")]
    Transport(String),
}
