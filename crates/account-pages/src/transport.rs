//! Account update transport
//!
//! [`AccountTransport`] sends the form to the update endpoint and decodes
//! the reply into an [`AccountResponse`]. Implementations:
//!
//! - [`FetchTransport`]: `gloo-net` over the browser's `fetch` (WASM only)
//! - [`HttpTransport`]: `reqwest` (native only)
//! - [`ScriptedTransport`]: canned replies for native hosts and tests
//!
//! ## Response contract
//!
//! The body is parsed as JSON whatever the HTTP status. `success` is read
//! with script truthiness: `false`, `null`, `0`, `""` or a missing key are
//! falsy, anything else is truthy. A body that is not JSON, or is JSON
//! `null`, is a [`SubmitError::Decode`].

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(not(target_arch = "wasm32"))]
mod http;
mod scripted;

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;
pub use scripted::{Reply, ScriptedTransport};

use async_trait::async_trait;
use serde_json::Value;

use crate::form_data::FormData;

/// Transport or decoding failure of one submission.
///
/// The user sees the same message for both; the variant only matters for
/// the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
	#[error("Request failed: {0}")]
	Network(String),
	#[error("Invalid response body: {0}")]
	Decode(String),
}

impl From<serde_json::Error> for SubmitError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for SubmitError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			Self::Decode(err.to_string())
		} else {
			Self::Network(err.to_string())
		}
	}
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for SubmitError {
	fn from(err: gloo_net::Error) -> Self {
		match err {
			gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
			other => Self::Network(other.to_string()),
		}
	}
}

/// One account update request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
	/// Path or absolute URL to POST to
	pub endpoint: String,
	/// Every field of the form
	pub form: FormData,
	/// Sent as the `X-CSRFToken` header when present
	pub csrf_token: Option<String>,
}

/// Decoded reply of the update endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountResponse {
	success: bool,
	status: Option<u16>,
	body: Value,
}

impl AccountResponse {
	/// Decode a response body
	///
	/// # Examples
	///
	/// ```
	/// use account_pages::AccountResponse;
	///
	/// assert!(AccountResponse::from_body(r#"{"success": true}"#).unwrap().success());
	/// assert!(!AccountResponse::from_body(r#"{"success": 0}"#).unwrap().success());
	/// assert!(AccountResponse::from_body("<html>").is_err());
	/// ```
	pub fn from_body(body: &str) -> Result<Self, SubmitError> {
		let body: Value = serde_json::from_str(body)?;
		if body.is_null() {
			return Err(SubmitError::Decode("response body is null".to_string()));
		}
		Ok(Self {
			success: is_truthy(body.get("success")),
			status: None,
			body,
		})
	}

	pub fn with_status(mut self, status: u16) -> Self {
		self.status = Some(status);
		self
	}

	pub fn success(&self) -> bool {
		self.success
	}

	/// HTTP status, when the transport knows it
	pub fn status(&self) -> Option<u16> {
		self.status
	}

	pub fn body(&self) -> &Value {
		&self.body
	}
}

fn is_truthy(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => false,
		Some(Value::Bool(flag)) => *flag,
		Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
		Some(Value::String(text)) => !text.is_empty(),
		Some(Value::Array(_)) | Some(Value::Object(_)) => true,
	}
}

/// Sends a [`SubmitRequest`] and decodes the reply.
///
/// Futures are not `Send`: browser requests and DOM handles live on one
/// thread.
#[async_trait(?Send)]
pub trait AccountTransport {
	async fn submit(&self, request: &SubmitRequest) -> Result<AccountResponse, SubmitError>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(r#"{"success": true}"#, true)]
	#[case(r#"{"success": 1}"#, true)]
	#[case(r#"{"success": "yes"}"#, true)]
	#[case(r#"{"success": {}}"#, true)]
	#[case(r#"{"success": []}"#, true)]
	#[case(r#"{"success": false}"#, false)]
	#[case(r#"{"success": 0}"#, false)]
	#[case(r#"{"success": 0.0}"#, false)]
	#[case(r#"{"success": ""}"#, false)]
	#[case(r#"{"success": null}"#, false)]
	#[case(r#"{"message": "ok"}"#, false)]
	#[case(r#"[true]"#, false)]
	#[case(r#"42"#, false)]
	#[case(r#""success""#, false)]
	fn test_success_truthiness(#[case] body: &str, #[case] expected: bool) {
		let response = AccountResponse::from_body(body).unwrap();
		assert_eq!(response.success(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("<!doctype html><html></html>")]
	#[case("{\"success\": tru")]
	#[case("null")]
	fn test_unparsable_body_is_decode_error(#[case] body: &str) {
		assert!(matches!(
			AccountResponse::from_body(body),
			Err(SubmitError::Decode(_))
		));
	}

	#[rstest]
	fn test_body_and_status_are_kept() {
		let response = AccountResponse::from_body(r#"{"success": true, "id": 7}"#)
			.unwrap()
			.with_status(200);
		assert_eq!(response.status(), Some(200));
		assert_eq!(response.body()["id"], 7);
	}

	#[rstest]
	fn test_error_display() {
		assert_eq!(
			SubmitError::Network("connection refused".to_string()).to_string(),
			"Request failed: connection refused"
		);
	}
}
