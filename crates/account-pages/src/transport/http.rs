use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::{AccountResponse, AccountTransport, SubmitError, SubmitRequest};
use crate::csrf::CSRF_HEADER_NAME;
use crate::debug_log;
use crate::form_data::{FormData, FormValue};

/// `reqwest` transport for native hosts.
///
/// Relative endpoints such as `/account` are joined onto `base_url`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
	base_url: Option<String>,
}

impl Default for HttpTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl HttpTransport {
	/// Create a transport that only accepts absolute endpoints
	pub fn new() -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: None,
		}
	}

	/// Create a transport resolving relative endpoints against `base_url`
	///
	/// # Examples
	///
	/// ```
	/// use account_pages::HttpTransport;
	///
	/// let transport = HttpTransport::with_base_url("http://localhost:5000");
	/// assert_eq!(transport.url_for("/account").unwrap(), "http://localhost:5000/account");
	/// ```
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: Some(base_url.into()),
		}
	}

	pub fn with_client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	pub fn url_for(&self, endpoint: &str) -> Result<String, SubmitError> {
		if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
			return Ok(endpoint.to_string());
		}
		let base = self.base_url.as_deref().ok_or_else(|| {
			SubmitError::Network(format!("No base URL to resolve '{}'", endpoint))
		})?;
		Ok(format!(
			"{}/{}",
			base.trim_end_matches('/'),
			endpoint.trim_start_matches('/')
		))
	}
}

fn multipart_form(data: &FormData) -> Result<Form, SubmitError> {
	let mut form = Form::new();
	for (name, value) in data.entries() {
		form = match value {
			FormValue::Text(text) => form.text(name.clone(), text.clone()),
			FormValue::File(file) => {
				let mut part = Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
				if let Some(content_type) = &file.content_type {
					part = part.mime_str(content_type)?;
				}
				form.part(name.clone(), part)
			}
		};
	}
	Ok(form)
}

#[async_trait(?Send)]
impl AccountTransport for HttpTransport {
	async fn submit(&self, request: &SubmitRequest) -> Result<AccountResponse, SubmitError> {
		let url = self.url_for(&request.endpoint)?;
		let mut builder = self
			.client
			.post(&url)
			.multipart(multipart_form(&request.form)?);
		if let Some(token) = &request.csrf_token {
			builder = builder.header(CSRF_HEADER_NAME, token);
		}

		let response = builder.send().await?;
		let status = response.status().as_u16();
		let body = response.text().await?;
		debug_log!("POST {} -> {}", url, status);

		Ok(AccountResponse::from_body(&body)?.with_status(status))
	}
}
