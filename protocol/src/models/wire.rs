//! JSON wire codec primitives.
//!
//! [`WireValue`] maps one field value to and from its canonical JSON shape.
//! [`FieldReader`] walks a JSON object, hands out fields by name and, once
//! the model has taken everything it knows about, reports whatever is left
//! as an unknown field. The schema is closed at every level: unknown keys
//! fail, they are never dropped.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::DeserializationError;
use crate::transaction::types::TransactionType;

/// A value with a canonical JSON representation.
pub trait WireValue: Sized {
    /// Renders the value in its canonical wire form.
    fn to_wire(&self) -> Value;

    /// Parses the wire form. `field` is the key (or key path) the value was
    /// found under, used to label errors.
    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError>;
}

impl WireValue for String {
    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DeserializationError::invalid(field, value, "expected a string"))
    }
}

macro_rules! impl_wire_uint {
    ($($ty:ty),*) => {
        $(
            impl WireValue for $ty {
                fn to_wire(&self) -> Value {
                    Value::from(*self)
                }

                fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
                    value
                        .as_u64()
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| {
                            DeserializationError::invalid(
                                field,
                                value,
                                concat!("expected an unsigned integer that fits in ", stringify!($ty)),
                            )
                        })
                }
            }
        )*
    };
}

impl_wire_uint!(u8, u16, u32);

impl<T: WireValue> WireValue for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let items = value
            .as_array()
            .ok_or_else(|| DeserializationError::invalid(field, value, "expected an array"))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire(&format!("{}[{}]", field, index), item))
            .collect()
    }
}

/// Borrows `value` as an object or fails with a field-keyed error.
pub(crate) fn expect_object<'v>(
    field: &str,
    value: &'v Value,
) -> Result<&'v Map<String, Value>, DeserializationError> {
    value
        .as_object()
        .ok_or_else(|| DeserializationError::invalid(field, value, "expected an object"))
}

/// Unwraps the single-key wrapper objects the ledger uses for array
/// elements, e.g. `{"Memo": {...}}`.
pub(crate) fn unwrap_wrapper<'v>(
    field: &str,
    value: &'v Value,
    wrapper: &str,
) -> Result<&'v Map<String, Value>, DeserializationError> {
    let outer = expect_object(field, value)?;
    if let Some(extra) = outer.keys().find(|key| key.as_str() != wrapper) {
        return Err(DeserializationError::UnknownField {
            field: format!("{}.{}", field, extra),
        });
    }
    let inner = outer.get(wrapper).ok_or_else(|| {
        DeserializationError::invalid(field, value, format!("expected a `{}` wrapper", wrapper))
    })?;
    expect_object(&format!("{}.{}", field, wrapper), inner)
}

/// Builds the single-key wrapper object the ledger uses for array elements.
pub(crate) fn wrap(wrapper: &str, inner: Map<String, Value>) -> Value {
    let mut outer = Map::new();
    outer.insert(wrapper.to_string(), Value::Object(inner));
    Value::Object(outer)
}

/// Inserts `value` under `key` when present. Absent fields never reach the
/// wire, not even as `null`.
pub(crate) fn put<T: WireValue>(map: &mut Map<String, Value>, key: &str, value: Option<&T>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.to_wire());
    }
}

/// Which key convention a [`FieldReader`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Naming {
    /// The crate's snake_case field names (named-field construction).
    Internal,
    /// The ledger's canonical keys (`Account`, `SendMax`, ...).
    Wire,
}

/// Consumes fields out of a JSON object and flags leftovers.
pub(crate) struct FieldReader<'a> {
    remaining: BTreeMap<&'a str, &'a Value>,
    naming: Naming,
    prefix: Option<String>,
    resolve_flag: fn(&str) -> Option<u32>,
}

impl<'a> FieldReader<'a> {
    /// A reader over a top-level transaction object.
    pub fn new(
        map: &'a Map<String, Value>,
        naming: Naming,
        resolve_flag: fn(&str) -> Option<u32>,
    ) -> Self {
        Self {
            remaining: map.iter().map(|(key, value)| (key.as_str(), value)).collect(),
            naming,
            prefix: None,
            resolve_flag,
        }
    }

    /// A reader over a nested wire object whose errors are reported under
    /// `prefix` (e.g. `Memos[0].Memo`).
    pub fn nested(map: &'a Map<String, Value>, prefix: &str) -> Self {
        Self {
            remaining: map.iter().map(|(key, value)| (key.as_str(), value)).collect(),
            naming: Naming::Wire,
            prefix: Some(prefix.to_string()),
            resolve_flag: |_| None,
        }
    }

    fn key(&self, name: &'static str, wire_name: &'static str) -> &'static str {
        match self.naming {
            Naming::Internal => name,
            Naming::Wire => wire_name,
        }
    }

    fn label(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.to_string(),
        }
    }

    /// Takes an optional field. Named construction treats `null` as absent;
    /// on the wire `null` is malformed.
    pub fn take<T: WireValue>(
        &mut self,
        name: &'static str,
        wire_name: &'static str,
    ) -> Result<Option<T>, DeserializationError> {
        let key = self.key(name, wire_name);
        match self.remaining.remove(key) {
            None => Ok(None),
            Some(Value::Null) if self.naming == Naming::Internal => Ok(None),
            Some(value) => T::from_wire(&self.label(key), value).map(Some),
        }
    }

    /// Takes a field that must be present (used by sub-records, which have no
    /// builder and therefore no sentinel).
    pub fn require<T: WireValue>(
        &mut self,
        name: &'static str,
        wire_name: &'static str,
        parent: &Value,
    ) -> Result<T, DeserializationError> {
        let key = self.key(name, wire_name);
        let label = self.label(key);
        self.take(name, wire_name)?.ok_or_else(|| {
            DeserializationError::invalid(&label, parent, format!("`{}` is required", key))
        })
    }

    /// Takes `Flags`. Named construction also accepts a list of flag names,
    /// which are resolved and OR-ed into a single mask here.
    pub fn take_flags(&mut self) -> Result<Option<u32>, DeserializationError> {
        let key = self.key("flags", "Flags");
        match self.remaining.remove(key) {
            None => Ok(None),
            Some(Value::Null) if self.naming == Naming::Internal => Ok(None),
            Some(Value::Array(names)) if self.naming == Naming::Internal => {
                let mut mask = 0u32;
                for (index, name) in names.iter().enumerate() {
                    let label = format!("{}[{}]", key, index);
                    let name = name.as_str().ok_or_else(|| {
                        DeserializationError::invalid(&label, name, "expected a flag name")
                    })?;
                    let bits =
                        (self.resolve_flag)(name).ok_or_else(|| DeserializationError::UnknownFlag {
                            flag: name.to_string(),
                        })?;
                    mask |= bits;
                }
                Ok(Some(mask))
            }
            Some(value) => u32::from_wire(key, value).map(Some),
        }
    }

    /// Takes the type tag. On the wire it must be present and name a known
    /// type; named construction never accepts it and uses `expected`.
    pub fn take_transaction_type(
        &mut self,
        expected: TransactionType,
    ) -> Result<TransactionType, DeserializationError> {
        if self.naming == Naming::Internal {
            return Ok(expected);
        }
        let value = self
            .remaining
            .remove("TransactionType")
            .ok_or(DeserializationError::MissingTransactionType)?;
        let name = value.as_str().ok_or_else(|| {
            DeserializationError::invalid("TransactionType", value, "expected a string")
        })?;
        name.parse()
            .map_err(|_| DeserializationError::UnknownTransactionType(name.to_string()))
    }

    /// Fails on the first key nobody asked for.
    pub fn finish(self) -> Result<(), DeserializationError> {
        match self.remaining.keys().next() {
            Some(key) => Err(DeserializationError::UnknownField {
                field: self.label(key),
            }),
            None => Ok(()),
        }
    }
}
