//! The required-value sentinel.
//!
//! Builders start every mandatory field at [`Required::Missing`]. The value
//! type would happily accept a transaction that never had its destination
//! set, so every validation pass re-checks each required field for the
//! sentinel and reports it by name.
//!
//! `Missing` is deliberately a different thing from `Option::None`: an
//! optional field left at `None` is a complete transaction, a required field
//! left at `Missing` is not.

/// A mandatory field that may not have been supplied yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Required<T> {
    /// The caller never supplied this field.
    Missing,
    /// The supplied value.
    Present(T),
}

impl<T> Required<T> {
    /// The sentinel itself.
    pub const MISSING: Self = Required::Missing;

    /// Returns `true` if the field is still at the sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, Required::Missing)
    }

    /// Returns `true` if a value was supplied.
    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    /// Borrows the supplied value, if any.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Required::Missing => None,
            Required::Present(value) => Some(value),
        }
    }

    /// Converts into an `Option`, mapping the sentinel to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Required::Missing => None,
            Required::Present(value) => Some(value),
        }
    }

    /// Builds from an `Option`, mapping `None` to the sentinel.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            None => Required::Missing,
            Some(value) => Required::Present(value),
        }
    }
}

impl<T> Default for Required<T> {
    fn default() -> Self {
        Required::Missing
    }
}

/// Uniform access to a field slot, whether it is `Option<T>` (optional) or
/// [`Required<T>`] (mandatory). The model macros generate one code path for
/// both kinds through this trait.
pub(crate) trait FieldSlot<T>: Sized {
    fn from_option(value: Option<T>) -> Self;
    fn get(&self) -> Option<&T>;
    fn is_missing(&self) -> bool;
}

impl<T> FieldSlot<T> for Option<T> {
    fn from_option(value: Option<T>) -> Self {
        value
    }

    fn get(&self) -> Option<&T> {
        self.as_ref()
    }

    // An optional field is never "missing".
    fn is_missing(&self) -> bool {
        false
    }
}

impl<T> FieldSlot<T> for Required<T> {
    fn from_option(value: Option<T>) -> Self {
        Required::from_option(value)
    }

    fn get(&self) -> Option<&T> {
        self.as_ref()
    }

    fn is_missing(&self) -> bool {
        Required::is_missing(self)
    }
}

/// Conversion used by builder setters. Any `T` converts into itself and
/// string slices convert into `String`, which keeps integer literals
/// unambiguous (`.sequence(7)`) while still allowing `.account("r...")`.
pub trait IntoFieldValue<T> {
    fn into_field_value(self) -> T;
}

impl<T> IntoFieldValue<T> for T {
    fn into_field_value(self) -> T {
        self
    }
}

impl IntoFieldValue<String> for &str {
    fn into_field_value(self) -> String {
        self.to_string()
    }
}

impl IntoFieldValue<String> for &String {
    fn into_field_value(self) -> String {
        self.clone()
    }
}
