//! Construction and deserialization errors.
//!
//! Both are fatal to the call that produced them and both carry the
//! offending field so callers can branch on it. Validation problems are a
//! different animal: they are an expected outcome and live in
//! [`crate::transaction::ValidationErrors`].

use serde_json::Value;
use thiserror::Error;

use crate::transaction::types::TransactionType;

/// Errors raised while building a transaction from named fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// A field name that the transaction type does not declare.
    #[error("{transaction_type} has no field named `{field}`")]
    UnknownField {
        transaction_type: TransactionType,
        field: String,
    },

    /// A flag name that is not in the transaction type's flag registry.
    #[error("unknown flag `{flag}` for {transaction_type}")]
    UnknownFlag {
        transaction_type: TransactionType,
        flag: String,
    },

    /// A value that does not have the field's semantic type.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConstructionError {
    /// Re-keys a reader failure as a construction failure for `transaction_type`.
    pub(crate) fn from_field_error(
        transaction_type: TransactionType,
        err: DeserializationError,
    ) -> Self {
        match err {
            DeserializationError::UnknownField { field } => ConstructionError::UnknownField {
                transaction_type,
                field,
            },
            DeserializationError::UnknownFlag { flag } => ConstructionError::UnknownFlag {
                transaction_type,
                flag,
            },
            DeserializationError::InvalidValue { field, reason, .. } => {
                ConstructionError::InvalidValue { field, reason }
            }
            other => ConstructionError::InvalidValue {
                field: String::new(),
                reason: other.to_string(),
            },
        }
    }
}

/// Errors raised while mapping wire JSON onto a transaction variant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeserializationError {
    /// The input was not a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: String },

    /// The `TransactionType` key is absent.
    #[error("missing `TransactionType` field")]
    MissingTransactionType,

    /// The `TransactionType` value names no known variant.
    #[error("unknown transaction type `{0}`")]
    UnknownTransactionType(String),

    /// A key outside the closed schema of the variant (or sub-record).
    #[error("unknown field `{field}`")]
    UnknownField { field: String },

    /// A flag name that no registry recognizes. Only named-field
    /// construction accepts flag names, so the wire codec never raises it.
    #[error("unknown flag `{flag}`")]
    UnknownFlag { flag: String },

    /// A known key holding a value of the wrong shape.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: String,
        value: Value,
        reason: String,
    },
}

impl DeserializationError {
    pub(crate) fn invalid(field: &str, value: &Value, reason: impl Into<String>) -> Self {
        DeserializationError::InvalidValue {
            field: field.to_string(),
            value: value.clone(),
            reason: reason.into(),
        }
    }

    /// The field the error is keyed by, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            DeserializationError::UnknownField { field }
            | DeserializationError::InvalidValue { field, .. } => Some(field),
            DeserializationError::MissingTransactionType
            | DeserializationError::UnknownTransactionType(_) => Some("TransactionType"),
            _ => None,
        }
    }
}
