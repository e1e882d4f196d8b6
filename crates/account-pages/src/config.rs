//! Controller configuration
//!
//! [`ControllerConfig::default`] reproduces the fixed page contract: element
//! ids, the `/account` endpoint, a 3000 ms notification window and the exact
//! user-facing messages. A page can override any subset through JSON.

use std::time::Duration;

use account_forms::{
	AccountForm, EMAIL_FORMAT_MESSAGE, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORM_ID: &str = "update-account-form";
pub const DEFAULT_LOADER_ID: &str = "loader";
pub const DEFAULT_NOTIFICATION_ID: &str = "notification";
pub const DEFAULT_ENDPOINT: &str = "/account";
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Errors raised while loading a [`ControllerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid controller config: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("Invalid username bounds: min {min} is greater than max {max}")]
	UsernameBounds { min: usize, max: usize },
}

/// User-facing notification texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
	/// `None` derives the text from the configured username bounds
	pub username_length: Option<String>,
	pub email_format: String,
	pub updating: String,
	pub updated: String,
	pub update_failed: String,
	pub unexpected_error: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			username_length: None,
			email_format: EMAIL_FORMAT_MESSAGE.to_string(),
			updating: "Updating your account...".to_string(),
			updated: "Account updated successfully!".to_string(),
			update_failed: "Error updating account.".to_string(),
			unexpected_error: "An unexpected error occurred.".to_string(),
		}
	}
}

/// Settings for [`FormSubmitController`](crate::FormSubmitController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
	pub form_id: String,
	pub loader_id: String,
	pub notification_id: String,
	/// URL the form is POSTed to
	pub endpoint: String,
	pub notification_duration_ms: u64,
	pub username_min_length: usize,
	pub username_max_length: usize,
	pub messages: Messages,
}

impl Default for ControllerConfig {
	fn default() -> Self {
		Self {
			form_id: DEFAULT_FORM_ID.to_string(),
			loader_id: DEFAULT_LOADER_ID.to_string(),
			notification_id: DEFAULT_NOTIFICATION_ID.to_string(),
			endpoint: DEFAULT_ENDPOINT.to_string(),
			notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
			username_min_length: USERNAME_MIN_LENGTH,
			username_max_length: USERNAME_MAX_LENGTH,
			messages: Messages::default(),
		}
	}
}

impl ControllerConfig {
	/// Parse a config, falling back to defaults for absent keys
	///
	/// # Examples
	///
	/// ```
	/// use account_pages::ControllerConfig;
	///
	/// let config = ControllerConfig::from_json(r#"{"endpoint": "/api/account"}"#).unwrap();
	/// assert_eq!(config.endpoint, "/api/account");
	/// assert_eq!(config.form_id, "update-account-form");
	/// ```
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		if config.username_min_length > config.username_max_length {
			return Err(ConfigError::UsernameBounds {
				min: config.username_min_length,
				max: config.username_max_length,
			});
		}
		Ok(config)
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	pub fn notification_duration(&self) -> Duration {
		Duration::from_millis(self.notification_duration_ms)
	}

	/// Build the validation rules these settings describe
	pub fn account_form(&self) -> AccountForm {
		let form =
			AccountForm::with_username_bounds(self.username_min_length, self.username_max_length)
				.email_message(self.messages.email_format.clone());
		match &self.messages.username_length {
			Some(message) => form.username_message(message.clone()),
			None => form,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_matches_page_contract() {
		let config = ControllerConfig::default();
		assert_eq!(config.form_id, "update-account-form");
		assert_eq!(config.loader_id, "loader");
		assert_eq!(config.notification_id, "notification");
		assert_eq!(config.endpoint, "/account");
		assert_eq!(config.notification_duration(), Duration::from_millis(3000));
		assert_eq!(config.messages.updating, "Updating your account...");
		assert_eq!(config.messages.updated, "Account updated successfully!");
		assert_eq!(config.messages.update_failed, "Error updating account.");
		assert_eq!(
			config.messages.unexpected_error,
			"An unexpected error occurred."
		);
	}

	#[rstest]
	fn test_from_json_empty_object_is_default() {
		let config = ControllerConfig::from_json("{}").unwrap();
		assert_eq!(config, ControllerConfig::default());
	}

	#[rstest]
	fn test_from_json_partial_messages() {
		let config =
			ControllerConfig::from_json(r#"{"messages": {"updated": "Saved."}}"#).unwrap();
		assert_eq!(config.messages.updated, "Saved.");
		assert_eq!(config.messages.updating, "Updating your account...");
	}

	#[rstest]
	fn test_from_json_rejects_garbage() {
		assert!(matches!(
			ControllerConfig::from_json("not json"),
			Err(ConfigError::Parse(_))
		));
	}

	#[rstest]
	fn test_from_json_rejects_inverted_bounds() {
		let err = ControllerConfig::from_json(
			r#"{"username_min_length": 10, "username_max_length": 5}"#,
		)
		.unwrap_err();
		assert!(matches!(
			err,
			ConfigError::UsernameBounds { min: 10, max: 5 }
		));
	}

	#[rstest]
	fn test_account_form_uses_configured_messages() {
		let mut config = ControllerConfig::default();
		config.messages.email_format = "Check the address.".to_string();
		let result = config
			.account_form()
			.validate(&[("username", "alice"), ("email", "nope")]);
		assert_eq!(result.error_for("email"), Some("Check the address."));
	}

	#[rstest]
	#[case(r#"{}"#, "Username must be between 2 and 20 characters.")]
	#[case(
		r#"{"username_min_length": 3, "username_max_length": 8}"#,
		"Username must be between 3 and 8 characters."
	)]
	#[case(
		r#"{"username_min_length": 3, "username_max_length": 8, "messages": {"username_length": "Pick 3 to 8 letters."}}"#,
		"Pick 3 to 8 letters."
	)]
	fn test_username_message_follows_bounds(#[case] json: &str, #[case] expected: &str) {
		let config = ControllerConfig::from_json(json).unwrap();
		let result = config
			.account_form()
			.validate(&[("username", "a"), ("email", "alice@example.com")]);
		assert_eq!(result.error_for("username"), Some(expected));
	}

	#[rstest]
	fn test_with_endpoint_overrides_only_endpoint() {
		let config = ControllerConfig::default().with_endpoint("/api/v2/account");
		assert_eq!(config.endpoint, "/api/v2/account");
		assert_eq!(
			ControllerConfig {
				endpoint: DEFAULT_ENDPOINT.to_string(),
				..config
			},
			ControllerConfig::default()
		);
	}
}
