//! Form validation on top of `validator` derive rules.
//!
//! Forms declare their rules with `#[derive(Validate)]`; pages call [`check`]
//! and render the one message kept per field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::fmt;

use validator::{Validate, ValidationErrors};

/// Failed form checks, one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationError {
    fields: BTreeMap<String, String>,
}

impl ValidationError {
    /// A failure on one field, for checks made outside the derive rules.
    pub fn single(field: &str, message: &str) -> Self {
        Self { fields: BTreeMap::from([(field.to_owned(), message.to_owned())]) }
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let message = first.message.as_ref().map_or_else(|| first.code.to_string(), ToString::to_string);
                Some((field.to_string(), message))
            })
            .collect();
        Self { fields }
    }
}

/// Run the derive rules of `form`.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn check<T: Validate>(form: &T) -> Result<(), ValidationError> {
    form.validate().map_err(ValidationError::from)
}
