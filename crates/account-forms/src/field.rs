//! Field-level errors and value lookup

use std::collections::HashMap;

/// Why a single field value was rejected.
///
/// The `Display` text is diagnostic detail for logs. What the user sees is
/// the message attached to the [`FieldRule`](crate::FieldRule) that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("Expected between {min} and {max} characters (it has {actual})")]
	Length {
		min: usize,
		max: usize,
		actual: usize,
	},
	#[error("Value does not match the {pattern} pattern")]
	Pattern { pattern: &'static str },
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Read-only access to submitted field values by name.
///
/// Implementations return the first value submitted under `name`, or `None`
/// when the form carries no such field.
pub trait FieldValues {
	fn value(&self, name: &str) -> Option<&str>;
}

impl FieldValues for HashMap<String, String> {
	fn value(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl FieldValues for [(&str, &str)] {
	fn value(&self, name: &str) -> Option<&str> {
		self.iter().find(|(key, _)| *key == name).map(|(_, v)| *v)
	}
}

impl<const N: usize> FieldValues for [(&str, &str); N] {
	fn value(&self, name: &str) -> Option<&str> {
		self.as_slice().value(name)
	}
}
