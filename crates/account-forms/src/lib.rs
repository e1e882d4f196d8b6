//! Account Forms - validation rules for the account update form
//!
//! This crate holds the client-side rules applied before the account update
//! form is sent: a character-count bound on `username` and a shape check on
//! `email`. It has no DOM or network dependencies, so the same rules run in
//! the browser (WASM) and in native tests.
//!
//! ## Example
//!
//! ```
//! use account_forms::{AccountForm, EMAIL_FORMAT_MESSAGE};
//!
//! let form = AccountForm::new();
//! let result = form.validate(&[("username", ""), ("email", "bad")]);
//!
//! assert!(!result.passed());
//! assert_eq!(result.failures().len(), 2);
//! assert_eq!(result.last_failure().unwrap().message, EMAIL_FORMAT_MESSAGE);
//! ```
//!
//! ## Security Note
//!
//! Client-side validation is for UX enhancement only and MUST NOT be relied
//! upon for security. The server validates every submission again.

pub mod account;
pub mod field;
pub mod validators;

pub use account::{
	AccountForm, EMAIL_FIELD, EMAIL_FORMAT_MESSAGE, FieldFailure, FieldRule, USERNAME_FIELD,
	USERNAME_LENGTH_MESSAGE, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH, ValidationResult,
};
pub use field::{FieldError, FieldResult, FieldValues};
pub use validators::{ClientValidator, EMAIL_PATTERN, EmailValidator, LengthValidator};
