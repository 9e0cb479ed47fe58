//! Shared behaviour of validated string fields.

use super::errors::ValidationError;

/// A string value guarded by a format rule.
///
/// Implementors can only be obtained through [`ValidatedField::parse`], so a
/// stored value has always passed its rule. Re-assignment goes through
/// [`ValidatedField::set`], which validates again.
pub trait ValidatedField: Sized {
    /// Validate and wrap a raw value.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError>;

    /// Get the stored value.
    fn value(&self) -> &str;

    /// Replace the stored value, re-validating it first.
    ///
    /// On error the field keeps its previous value.
    fn set(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}
