//! Per-field metadata.

use serde::Serialize;

/// Describes one field of a transaction variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// The snake_case name used by builders and named construction.
    pub name: &'static str,
    /// The key on the wire.
    pub wire_name: &'static str,
    /// The Rust type of the field.
    pub type_name: &'static str,
    /// Whether validation reports the field when it was never set.
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        wire_name: &'static str,
        type_name: &'static str,
        required: bool,
    ) -> Self {
        Self {
            name,
            wire_name,
            type_name,
            required,
        }
    }
}
