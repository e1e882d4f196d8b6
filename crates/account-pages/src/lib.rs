//! Account Pages - client-side controller for the account update form
//!
//! Intercepts the submission of `#update-account-form`, validates `username`
//! and `email` with [`account_forms`], and, when they pass, POSTs the whole
//! form to `/account` while a loader and a notification banner report
//! progress.
//!
//! ## Architecture
//!
//! - [`controller`]: [`FormSubmitController`], the validate-then-submit flow
//! - [`dom`]: handle traits, with `web_sys` ([`dom::browser`], WASM only)
//!   and in-memory ([`dom::memory`]) implementations
//! - [`notification`]: the banner, its [`Severity`] and auto-hide
//! - [`timer`]: one-shot [`Scheduler`]s (`gloo-timers` / `tokio`)
//! - [`transport`]: [`AccountTransport`] (`gloo-net` / `reqwest`) and
//!   response decoding
//! - [`config`]: [`ControllerConfig`]
//! - [`csrf`]: token lookup for the `X-CSRFToken` header
//! - [`logging`](mod@logging): `debug_log!`, `info_log!`, `warn_log!`, `error_log!`
//!
//! ## Example
//!
//! ```ignore
//! use account_pages::{ControllerConfig, FormSubmitController, HttpTransport, TokioScheduler};
//! use account_pages::dom::memory::MemoryDocument;
//!
//! let document = MemoryDocument::account_page("alice", "alice@example.com");
//! let controller = FormSubmitController::mount(
//!     &document,
//!     ControllerConfig::default(),
//!     HttpTransport::with_base_url("http://localhost:5000"),
//!     TokioScheduler,
//! )
//! .expect("page has the account form");
//!
//! // inside a tokio LocalSet
//! let outcome = controller.handle_submit().await;
//! ```

pub mod config;
pub mod controller;
pub mod csrf;
pub mod dom;
pub mod form_data;
pub mod logging;
pub mod notification;
pub mod timer;
pub mod transport;

pub use config::{ConfigError, ControllerConfig, Messages};
pub use controller::{FormSubmitController, SubmitOutcome};
pub use dom::{Display, ElementHandle, FormHandle, PageDocument};
pub use form_data::{FilePart, FormData, FormValue};
pub use notification::{NotificationState, Notifier, Severity};
pub use timer::{Scheduler, Task};
pub use transport::{
	AccountResponse, AccountTransport, Reply, ScriptedTransport, SubmitError, SubmitRequest,
};

#[cfg(target_arch = "wasm32")]
pub use dom::browser::{BrowserDocument, BrowserElement, BrowserForm};
#[cfg(target_arch = "wasm32")]
pub use timer::BrowserScheduler;
#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;

#[cfg(not(target_arch = "wasm32"))]
pub use timer::TokioScheduler;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::HttpTransport;

/// Controller bound to the live browser page.
#[cfg(target_arch = "wasm32")]
pub type BrowserController = FormSubmitController<BrowserDocument, FetchTransport, BrowserScheduler>;

#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
