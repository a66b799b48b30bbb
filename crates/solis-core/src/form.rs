//! Labeled form fields and required-field validation.
//!
//! A form is a plain struct of `String` fields. Its [`FormModel`] impl lists
//! the fields in display order with their required flag; validation only
//! checks presence. Email syntax is left to the input widget.

use crate::{Result, ValidationError};

/// One labeled field of a form, borrowed from the form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
  /// Wire name of the field.
  pub name:     &'static str,
  /// Human-readable label used in notices.
  pub label:    &'static str,
  pub value:    &'a str,
  pub required: bool,
}

impl<'a> Field<'a> {
  pub fn required(name: &'static str, label: &'static str, value: &'a str) -> Self {
    Self { name, label, value, required: true }
  }

  pub fn optional(name: &'static str, label: &'static str, value: &'a str) -> Self {
    Self { name, label, value, required: false }
  }

  /// A required field holding only whitespace counts as missing.
  pub fn is_missing(&self) -> bool {
    self.required && self.value.trim().is_empty()
  }
}

/// Form state that can be validated and reset.
///
/// `Default` is the empty state a form returns to after a successful
/// submission.
pub trait FormModel: Default + Clone {
  /// All fields in display order.
  fn fields(&self) -> Vec<Field<'_>>;

  /// Labels of required fields that are blank, in display order.
  fn missing_required(&self) -> Vec<&'static str> {
    self
      .fields()
      .into_iter()
      .filter(Field::is_missing)
      .map(|f| f.label)
      .collect()
  }

  /// `Ok(())` when every required field is filled in.
  fn validate(&self) -> Result<()> {
    let missing = self.missing_required();
    if missing.is_empty() {
      Ok(())
    } else {
      Err(ValidationError::MissingFields(missing))
    }
  }
}

/// Turn a blank optional value into `None`.
pub fn non_blank(value: &str) -> Option<String> {
  let trimmed = value.trim();
  (!trimmed.is_empty()).then(|| value.to_string())
}
