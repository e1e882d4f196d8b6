//! The account update form
//!
//! [`AccountForm`] holds the ordered rules for the `username` and `email`
//! fields and produces a [`ValidationResult`] per submission. Rules are
//! evaluated in order and every failure is kept, so callers can replay them
//! in the same order the user would have seen them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::field::{FieldError, FieldValues};
use crate::validators::{ClientValidator, EmailValidator, LengthValidator};

pub const USERNAME_FIELD: &str = "username";
pub const EMAIL_FIELD: &str = "email";

pub const USERNAME_MIN_LENGTH: usize = 2;
pub const USERNAME_MAX_LENGTH: usize = 20;

pub const USERNAME_LENGTH_MESSAGE: &str = "Username must be between 2 and 20 characters.";
pub const EMAIL_FORMAT_MESSAGE: &str = "Invalid email format.";

/// A validator bound to a field name and the message shown when it fails.
#[derive(Clone)]
pub struct FieldRule {
	field: String,
	validator: Arc<dyn ClientValidator>,
	message: String,
}

impl FieldRule {
	pub fn new(
		field: impl Into<String>,
		validator: Arc<dyn ClientValidator>,
		message: impl Into<String>,
	) -> Self {
		Self {
			field: field.into(),
			validator,
			message: message.into(),
		}
	}

	pub fn field(&self) -> &str {
		&self.field
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	/// Run the rule against a form. A missing field is checked as `""`.
	pub fn check<V: FieldValues + ?Sized>(&self, values: &V) -> Result<(), FieldFailure> {
		let value = values.value(&self.field).unwrap_or_default();
		self.validator
			.validate(value)
			.map_err(|cause| FieldFailure {
				field: self.field.clone(),
				message: self.message.clone(),
				cause,
			})
	}
}

impl fmt::Debug for FieldRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldRule")
			.field("field", &self.field)
			.field("validator", &"<validator>")
			.field("message", &self.message)
			.finish()
	}
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
	pub field: String,
	pub message: String,
	#[serde(skip)]
	pub cause: FieldError,
}

/// Outcome of validating one submission.
///
/// Failures are stored in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
	failures: Vec<FieldFailure>,
}

impl ValidationResult {
	pub fn passed(&self) -> bool {
		self.failures.is_empty()
	}

	pub fn failures(&self) -> &[FieldFailure] {
		&self.failures
	}

	/// Field name to user-facing message.
	pub fn field_errors(&self) -> HashMap<&str, &str> {
		self.failures
			.iter()
			.map(|f| (f.field.as_str(), f.message.as_str()))
			.collect()
	}

	pub fn error_for(&self, field: &str) -> Option<&str> {
		self.failures
			.iter()
			.find(|f| f.field == field)
			.map(|f| f.message.as_str())
	}

	/// The failure evaluated last, which is the one left on screen.
	pub fn last_failure(&self) -> Option<&FieldFailure> {
		self.failures.last()
	}
}

/// Username and email rules for the account update form.
#[derive(Debug, Clone)]
pub struct AccountForm {
	rules: Vec<FieldRule>,
}

impl Default for AccountForm {
	fn default() -> Self {
		Self::new()
	}
}

impl AccountForm {
	/// Create the form with the standard username (2 to 20 characters) and
	/// email rules
	///
	/// # Examples
	///
	/// ```
	/// use account_forms::AccountForm;
	///
	/// let form = AccountForm::new();
	/// let result = form.validate(&[("username", "alice"), ("email", "alice@example.com")]);
	/// assert!(result.passed());
	/// ```
	pub fn new() -> Self {
		Self::with_username_bounds(USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH)
			.username_message(USERNAME_LENGTH_MESSAGE)
	}

	/// Create the form with custom username bounds.
	///
	/// The username message is generated from the bounds; use
	/// [`username_message`](Self::username_message) to override it.
	pub fn with_username_bounds(min: usize, max: usize) -> Self {
		Self {
			rules: vec![
				FieldRule::new(
					USERNAME_FIELD,
					Arc::new(LengthValidator::new(min, max)),
					format!("Username must be between {min} and {max} characters."),
				),
				FieldRule::new(
					EMAIL_FIELD,
					Arc::new(EmailValidator),
					EMAIL_FORMAT_MESSAGE,
				),
			],
		}
	}

	pub fn username_message(self, message: impl Into<String>) -> Self {
		self.message_for(USERNAME_FIELD, message)
	}

	pub fn email_message(self, message: impl Into<String>) -> Self {
		self.message_for(EMAIL_FIELD, message)
	}

	fn message_for(mut self, field: &str, message: impl Into<String>) -> Self {
		let message = message.into();
		for rule in self.rules.iter_mut().filter(|r| r.field == field) {
			rule.message = message.clone();
		}
		self
	}

	/// Append a rule evaluated after the built-in ones
	pub fn add_rule(mut self, rule: FieldRule) -> Self {
		self.rules.push(rule);
		self
	}

	pub fn rules(&self) -> &[FieldRule] {
		&self.rules
	}

	/// Validate every rule, accumulating failures instead of stopping at the first
	pub fn validate<V: FieldValues + ?Sized>(&self, values: &V) -> ValidationResult {
		let failures = self
			.rules
			.iter()
			.filter_map(|rule| rule.check(values).err())
			.collect();
		ValidationResult { failures }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_valid_submission_passes() {
		let result =
			AccountForm::new().validate(&[("username", "alice"), ("email", "alice@example.com")]);
		assert!(result.passed());
		assert!(result.field_errors().is_empty());
		assert_eq!(result.last_failure(), None);
	}

	#[rstest]
	fn test_both_fields_invalid_accumulates_in_order() {
		let result = AccountForm::new().validate(&[("username", ""), ("email", "bad")]);

		assert!(!result.passed());
		let fields: Vec<&str> = result.failures().iter().map(|f| f.field.as_str()).collect();
		assert_eq!(fields, vec!["username", "email"]);
		assert_eq!(
			result.error_for(USERNAME_FIELD),
			Some("Username must be between 2 and 20 characters.")
		);
		assert_eq!(result.error_for(EMAIL_FIELD), Some("Invalid email format."));
		assert_eq!(
			result.last_failure().map(|f| f.message.as_str()),
			Some(EMAIL_FORMAT_MESSAGE)
		);
	}

	#[rstest]
	fn test_missing_fields_are_checked_as_empty() {
		let values: [(&str, &str); 0] = [];
		let result = AccountForm::new().validate(&values);
		assert_eq!(result.failures().len(), 2);
		assert_eq!(
			result.failures()[0].cause,
			FieldError::Length {
				min: 2,
				max: 20,
				actual: 0
			}
		);
	}

	#[rstest]
	fn test_only_username_invalid() {
		let result = AccountForm::new().validate(&[("username", "a"), ("email", "a@b.co")]);
		assert_eq!(
			result.field_errors(),
			HashMap::from([(USERNAME_FIELD, USERNAME_LENGTH_MESSAGE)])
		);
	}

	#[rstest]
	fn test_custom_bounds_generate_message() {
		let form = AccountForm::with_username_bounds(3, 8);
		let result = form.validate(&[("username", "ab"), ("email", "a@b.c")]);
		assert_eq!(
			result.error_for(USERNAME_FIELD),
			Some("Username must be between 3 and 8 characters.")
		);
	}

	#[rstest]
	fn test_message_overrides() {
		let form = AccountForm::new()
			.username_message("bad name")
			.email_message("bad mail");
		let result = form.validate(&[("username", ""), ("email", "")]);
		assert_eq!(result.error_for(USERNAME_FIELD), Some("bad name"));
		assert_eq!(result.error_for(EMAIL_FIELD), Some("bad mail"));
	}

	#[rstest]
	fn test_added_rule_runs_last() {
		let form = AccountForm::new().add_rule(FieldRule::new(
			"bio",
			Arc::new(LengthValidator::new(0, 3)),
			"Bio too long.",
		));
		let result = form.validate(&[
			("username", "alice"),
			("email", "nope"),
			("bio", "far too long"),
		]);
		assert_eq!(
			result.last_failure().map(|f| f.field.as_str()),
			Some("bio")
		);
	}

	#[rstest]
	fn test_rules_in_evaluation_order() {
		let form = AccountForm::new()
			.email_message("Check the address.")
			.add_rule(FieldRule::new(
				"bio",
				Arc::new(LengthValidator::new(0, 3)),
				"Bio too long.",
			));
		let rules: Vec<(&str, &str)> = form
			.rules()
			.iter()
			.map(|rule| (rule.field(), rule.message()))
			.collect();
		assert_eq!(
			rules,
			vec![
				(USERNAME_FIELD, USERNAME_LENGTH_MESSAGE),
				(EMAIL_FIELD, "Check the address."),
				("bio", "Bio too long."),
			]
		);
	}

	#[rstest]
	fn test_result_serializes_without_cause() {
		let result = AccountForm::new().validate(&[("username", "x"), ("email", "a@b.c")]);
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"failures": [{
					"field": "username",
					"message": "Username must be between 2 and 20 characters."
				}]
			})
		);
	}
}
