//! DOM abstraction layer
//!
//! The controller never touches `web_sys` directly. It talks to three kinds
//! of handles:
//!
//! - [`PageDocument`]: looks elements up by id
//! - [`FormHandle`]: reads the field set and toggles validation markers
//! - [`ElementHandle`]: text, class and `display` of the loader and the
//!   notification
//!
//! [`browser`] implements them over `web_sys` (WASM only); [`memory`]
//! implements them over plain Rust state for native hosts and tests.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod memory;

use std::fmt;

use crate::form_data::FormData;

/// Marker class for an input that failed client-side validation.
pub const INVALID_CLASS: &str = "is-invalid";
/// Marker class for an input that passed client-side validation.
pub const VALID_CLASS: &str = "is-valid";

/// CSS `display` values the controller uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
	#[default]
	None,
	Block,
	InlineBlock,
}

impl Display {
	pub fn as_css(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Block => "block",
			Self::InlineBlock => "inline-block",
		}
	}

	pub fn is_visible(&self) -> bool {
		!matches!(self, Self::None)
	}
}

impl fmt::Display for Display {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_css())
	}
}

/// A plain element such as the loader or the notification banner.
///
/// Handles are cheap to clone and share the underlying element; hide timers
/// keep a clone alive until they fire.
pub trait ElementHandle: Clone + 'static {
	fn set_text_content(&self, text: &str);
	/// Replace the whole `class` attribute.
	fn set_class_name(&self, class_name: &str);
	fn set_display(&self, display: Display);
}

/// The `<form>` element being submitted.
pub trait FormHandle {
	/// Every field the form would submit, in document order.
	fn form_data(&self) -> FormData;

	/// Add `class` to the first element whose `name` attribute equals `name`.
	///
	/// Returns `false` when the form has no such element.
	fn add_input_class(&self, name: &str, class: &str) -> bool;

	/// Remove each of `classes` from every `<input>` in the form.
	fn remove_input_classes(&self, classes: &[&str]);
}

/// Element lookup on the current page.
pub trait PageDocument {
	type Form: FormHandle;
	type Element: ElementHandle;

	/// The `<form>` with this id, or `None` when it is absent or not a form.
	fn form_by_id(&self, id: &str) -> Option<Self::Form>;

	fn element_by_id(&self, id: &str) -> Option<Self::Element>;

	/// `content` of `<meta name="{name}">` in the document, if any.
	fn meta_content(&self, name: &str) -> Option<String>;
}
