//! Payment paths.

use serde_json::{Map, Value};

use super::wire::{expect_object, put, FieldReader, WireValue};
use crate::error::DeserializationError;

/// One hop of a payment path. Unlike the rest of the wire format, path steps
/// use lowercase keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub account: Option<String>,
    pub currency: Option<String>,
    pub issuer: Option<String>,
}

impl PathStep {
    /// A rippling step through `account`.
    pub fn account(account: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
            ..Self::default()
        }
    }

    /// A currency-conversion step, optionally pinned to an issuer.
    pub fn currency(currency: impl Into<String>, issuer: Option<String>) -> Self {
        Self {
            currency: Some(currency.into()),
            issuer,
            ..Self::default()
        }
    }

    /// A step naming nothing. Representable, but never valid on the wire.
    pub fn is_empty(&self) -> bool {
        self.account.is_none() && self.currency.is_none() && self.issuer.is_none()
    }
}

/// A sequence of steps from source to destination.
pub type Path = Vec<PathStep>;

impl WireValue for PathStep {
    fn to_wire(&self) -> Value {
        let mut map = Map::new();
        put(&mut map, "account", self.account.as_ref());
        put(&mut map, "currency", self.currency.as_ref());
        put(&mut map, "issuer", self.issuer.as_ref());
        Value::Object(map)
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let object = expect_object(field, value)?;
        let mut reader = FieldReader::nested(object, field);
        let step = Self {
            account: reader.take("account", "account")?,
            currency: reader.take("currency", "currency")?,
            issuer: reader.take("issuer", "issuer")?,
        };
        reader.finish()?;
        if step.is_empty() {
            return Err(DeserializationError::invalid(field, value, "empty path step"));
        }
        Ok(step)
    }
}
