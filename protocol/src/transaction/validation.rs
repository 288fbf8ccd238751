//! Validation results.
//!
//! Validation never fails loudly: it returns a mapping from field name to a
//! human-readable message, empty when the transaction is well-formed.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::TransactionModel;

/// Field name to message. Keys are the snake_case field names, so callers
/// can branch on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a problem with `field`. The first message for a field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when there are no errors, so the mapping can be `?`-ed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no validation errors");
        }
        for (index, (field, message)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Cross-field validation.
///
/// The default runs only the base checks shared by every variant. Variants
/// with rules of their own override `get_errors`, starting from
/// [`TransactionModel::base_errors`].
pub trait Validate: TransactionModel {
    fn get_errors(&self) -> ValidationErrors {
        self.base_errors()
    }

    fn is_valid(&self) -> bool {
        self.get_errors().is_empty()
    }
}
