//! # Account Portal
//!
//! Client-side validation and submission for the account update form.
//!
//! - [`forms`]: field rules for `username` and `email`
//! - [`pages`]: DOM bindings, notifications, transport and the controller
//!
//! Built for `wasm32-unknown-unknown`, the crate mounts the controller on
//! page load. Native builds expose the same controller over an in-memory
//! page and a `reqwest` transport.

pub use account_forms as forms;
pub use account_pages as pages;

pub use account_forms::{AccountForm, ValidationResult};
pub use account_pages::{ControllerConfig, FormSubmitController, SubmitOutcome};

#[cfg(target_arch = "wasm32")]
pub mod launcher;

#[cfg(target_arch = "wasm32")]
pub use launcher::mount_account_form;
