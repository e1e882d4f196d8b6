use async_trait::async_trait;
use gloo_net::http::Request;

use super::{AccountResponse, AccountTransport, SubmitError, SubmitRequest};
use crate::csrf::CSRF_HEADER_NAME;
use crate::debug_log;
use crate::form_data::{FormData, FormValue};

/// Browser `fetch` transport (WASM only).
///
/// The body is the form's own `FormData`, so file inputs are sent exactly
/// as a native form submission would send them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
	pub fn new() -> Self {
		Self
	}
}

/// Rebuild a browser `FormData` for data that did not come from a `<form>`.
fn browser_form_data(data: &FormData) -> Result<web_sys::FormData, SubmitError> {
	if let Some(raw) = data.browser_form_data() {
		return Ok(raw.clone());
	}
	let raw = web_sys::FormData::new()
		.map_err(|err| SubmitError::Network(format!("Failed to create FormData: {:?}", err)))?;
	for (name, value) in data.entries() {
		if let FormValue::Text(text) = value {
			raw.append_with_str(name, text)
				.map_err(|err| SubmitError::Network(format!("Failed to append '{}': {:?}", name, err)))?;
		}
	}
	Ok(raw)
}

#[async_trait(?Send)]
impl AccountTransport for FetchTransport {
	async fn submit(&self, request: &SubmitRequest) -> Result<AccountResponse, SubmitError> {
		let mut builder = Request::post(&request.endpoint);
		if let Some(token) = &request.csrf_token {
			builder = builder.header(CSRF_HEADER_NAME, token);
		}

		let response = builder
			.body(browser_form_data(&request.form)?)?
			.send()
			.await?;
		let status = response.status();
		let body = response.text().await?;
		debug_log!("POST {} -> {}", request.endpoint, status);

		Ok(AccountResponse::from_body(&body)?.with_status(status))
	}
}
