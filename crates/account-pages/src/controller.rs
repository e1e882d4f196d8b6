//! Account update form controller
//!
//! ## Flow
//!
//! ```text
//! submit ─▶ read FormData ─▶ reset markers ─▶ validate ──fail──▶ mark + notify (danger), stop
//!                                                │
//!                                               pass
//!                                                ▼
//!                    show loader ─▶ notify (info) ─▶ POST ─▶ notify (success | danger)
//!                         └──────────── hide loader on every exit ───────────┘
//! ```
//!
//! Submissions are not serialized: a second submit while a request is in
//! flight starts a second request, and both touch the same loader and banner.

use account_forms::{AccountForm, ValidationResult};

use crate::config::ControllerConfig;
use crate::csrf;
use crate::dom::{Display, ElementHandle, FormHandle, INVALID_CLASS, PageDocument, VALID_CLASS};
use crate::notification::{Notifier, Severity};
use crate::timer::Scheduler;
use crate::transport::{AccountResponse, AccountTransport, SubmitError, SubmitRequest};
use crate::{debug_log, error_log, info_log, warn_log};

/// How one submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// Client-side validation failed; nothing was sent
	Invalid(ValidationResult),
	/// The server reported success
	Updated(AccountResponse),
	/// The server answered but did not report success
	Rejected(AccountResponse),
	/// The request failed or the answer could not be parsed
	Failed(SubmitError),
}

impl SubmitOutcome {
	pub fn is_updated(&self) -> bool {
		matches!(self, Self::Updated(_))
	}
}

/// Validates and submits the account update form of one page.
pub struct FormSubmitController<D: PageDocument, T, S> {
	form: D::Form,
	loader: Option<D::Element>,
	notifier: Notifier<D::Element, S>,
	transport: T,
	rules: AccountForm,
	config: ControllerConfig,
	csrf_token: Option<String>,
}

impl<D, T, S> FormSubmitController<D, T, S>
where
	D: PageDocument,
	T: AccountTransport,
	S: Scheduler,
{
	/// Bind to the page's form, loader and notification elements
	///
	/// Returns `None` when the page has no form with the configured id; such
	/// pages simply do not use this controller. Missing loader or
	/// notification elements are tolerated and their updates skipped.
	///
	/// # Examples
	///
	/// ```ignore
	/// let controller = FormSubmitController::mount(
	///     &BrowserDocument::current()?,
	///     ControllerConfig::default(),
	///     FetchTransport::new(),
	///     BrowserScheduler,
	/// )?;
	/// ```
	pub fn mount(document: &D, config: ControllerConfig, transport: T, scheduler: S) -> Option<Self> {
		let Some(form) = document.form_by_id(&config.form_id) else {
			debug_log!("No #{} on this page, controller not mounted", config.form_id);
			return None;
		};

		let loader = document.element_by_id(&config.loader_id);
		if loader.is_none() {
			warn_log!("No #{} element, loading state will not be shown", config.loader_id);
		}
		let notification = document.element_by_id(&config.notification_id);
		if notification.is_none() {
			warn_log!(
				"No #{} element, notifications will not be shown",
				config.notification_id
			);
		}

		info_log!("Mounted controller on #{}", config.form_id);
		Some(Self {
			form,
			loader,
			notifier: Notifier::new(notification, scheduler, config.notification_duration()),
			transport,
			rules: config.account_form(),
			csrf_token: csrf::csrf_token(document),
			config,
		})
	}

	/// Validate the form and, if it passes, send it
	///
	/// The caller is responsible for suppressing the browser's own
	/// submission (`preventDefault`) before calling this.
	pub async fn handle_submit(&self) -> SubmitOutcome {
		let form_data = self.form.form_data();

		self.reset_validation_states();

		let result = self.rules.validate(&form_data);
		for failure in result.failures() {
			debug_log!("Field '{}' rejected: {}", failure.field, failure.cause);
			self.show_validation_error(&failure.field, &failure.message);
		}
		if !result.passed() {
			return SubmitOutcome::Invalid(result);
		}

		if let Some(loader) = &self.loader {
			loader.set_display(Display::InlineBlock);
		}
		let _loader = scopeguard::guard(self.loader.as_ref(), |loader| {
			if let Some(loader) = loader {
				loader.set_display(Display::None);
			}
		});

		let messages = &self.config.messages;
		self.show_notification(&messages.updating, Severity::Info);

		let request = SubmitRequest {
			endpoint: self.config.endpoint.clone(),
			form: form_data,
			csrf_token: self.csrf_token.clone(),
		};
		match self.transport.submit(&request).await {
			Ok(response) if response.success() => {
				self.show_notification(&messages.updated, Severity::Success);
				SubmitOutcome::Updated(response)
			}
			Ok(response) => {
				self.show_notification(&messages.update_failed, Severity::Danger);
				SubmitOutcome::Rejected(response)
			}
			Err(err) => {
				error_log!("Error: {}", err);
				self.show_notification(&messages.unexpected_error, Severity::Danger);
				SubmitOutcome::Failed(err)
			}
		}
	}

	pub fn show_notification(&self, message: &str, severity: Severity) {
		self.notifier.show(message, severity);
	}

	/// Mark the input named `field` invalid and show `message` as a danger notification
	pub fn show_validation_error(&self, field: &str, message: &str) {
		if !self.form.add_input_class(field, INVALID_CLASS) {
			warn_log!("No input named '{}' in #{}", field, self.config.form_id);
		}
		self.show_notification(message, Severity::Danger);
	}

	/// Strip validation markers from every input of the form
	pub fn reset_validation_states(&self) {
		self.form.remove_input_classes(&[INVALID_CLASS, VALID_CLASS]);
	}

	pub fn form(&self) -> &D::Form {
		&self.form
	}

	pub fn notifier(&self) -> &Notifier<D::Element, S> {
		&self.notifier
	}

	pub fn config(&self) -> &ControllerConfig {
		&self.config
	}
}
