//! In-memory page model
//!
//! Implements the [`dom`](crate::dom) traits over `Rc<RefCell<_>>` state so
//! the controller can run without a browser. Every mutation the controller
//! makes is observable, and elements keep a history of the `display` values
//! and texts they were given.
//!
//! ```
//! use account_pages::dom::memory::MemoryDocument;
//!
//! let document = MemoryDocument::account_page("alice", "alice@example.com");
//! assert!(document.form("update-account-form").is_some());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::{DEFAULT_FORM_ID, DEFAULT_LOADER_ID, DEFAULT_NOTIFICATION_ID};
use crate::dom::{Display, ElementHandle, FormHandle, PageDocument};
use crate::form_data::{FilePart, FormData, FormValue};

#[derive(Debug, Default)]
struct ElementState {
	text: String,
	class_name: String,
	display: Display,
	display_history: Vec<Display>,
	text_history: Vec<String>,
}

/// A shared, observable element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
	state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
	/// Create a hidden, empty element
	pub fn new() -> Self {
		Self::default()
	}

	pub fn text(&self) -> String {
		self.state.borrow().text.clone()
	}

	pub fn class_name(&self) -> String {
		self.state.borrow().class_name.clone()
	}

	pub fn display(&self) -> Display {
		self.state.borrow().display
	}

	pub fn is_visible(&self) -> bool {
		self.display().is_visible()
	}

	/// Every `display` value set so far, oldest first
	pub fn display_history(&self) -> Vec<Display> {
		self.state.borrow().display_history.clone()
	}

	/// Every text set so far, oldest first
	pub fn text_history(&self) -> Vec<String> {
		self.state.borrow().text_history.clone()
	}
}

impl ElementHandle for MemoryElement {
	fn set_text_content(&self, text: &str) {
		let mut state = self.state.borrow_mut();
		state.text = text.to_string();
		state.text_history.push(text.to_string());
	}

	fn set_class_name(&self, class_name: &str) {
		self.state.borrow_mut().class_name = class_name.to_string();
	}

	fn set_display(&self, display: Display) {
		let mut state = self.state.borrow_mut();
		state.display = display;
		state.display_history.push(display);
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
	Input,
	TextArea,
}

#[derive(Debug, Clone)]
struct FormField {
	kind: FieldKind,
	name: String,
	value: FormValue,
	classes: Vec<String>,
}

/// A shared, observable `<form>`.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
	fields: Rc<RefCell<Vec<FormField>>>,
}

impl MemoryForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an `<input name="{name}" value="{value}">`
	pub fn input(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push(FieldKind::Input, name.into(), FormValue::Text(value.into()))
	}

	/// Append an `<input type="file" name="{name}">` holding `file`
	pub fn file_input(self, name: impl Into<String>, file: FilePart) -> Self {
		self.push(FieldKind::Input, name.into(), FormValue::File(file))
	}

	/// Append a `<textarea name="{name}">`; it submits but carries no
	/// input validation markers
	pub fn textarea(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push(FieldKind::TextArea, name.into(), FormValue::Text(value.into()))
	}

	fn push(self, kind: FieldKind, name: String, value: FormValue) -> Self {
		self.fields.borrow_mut().push(FormField {
			kind,
			name,
			value,
			classes: Vec::new(),
		});
		self
	}

	/// Change the value of the first field named `name`, as a user typing would
	pub fn set_value(&self, name: &str, value: impl Into<String>) {
		if let Some(field) = self.fields.borrow_mut().iter_mut().find(|f| f.name == name) {
			field.value = FormValue::Text(value.into());
		}
	}

	/// Classes currently on the first field named `name`
	pub fn classes(&self, name: &str) -> Vec<String> {
		self.fields
			.borrow()
			.iter()
			.find(|f| f.name == name)
			.map(|f| f.classes.clone())
			.unwrap_or_default()
	}

	pub fn has_class(&self, name: &str, class: &str) -> bool {
		self.classes(name).iter().any(|c| c == class)
	}
}

impl FormHandle for MemoryForm {
	fn form_data(&self) -> FormData {
		self.fields
			.borrow()
			.iter()
			.fold(FormData::new(), |mut data, field| {
				match &field.value {
					FormValue::Text(text) => data.append_text(field.name.clone(), text.clone()),
					FormValue::File(file) => data.append_file(field.name.clone(), file.clone()),
				}
				data
			})
	}

	fn add_input_class(&self, name: &str, class: &str) -> bool {
		let mut fields = self.fields.borrow_mut();
		let Some(field) = fields.iter_mut().find(|f| f.name == name) else {
			return false;
		};
		if !field.classes.iter().any(|c| c == class) {
			field.classes.push(class.to_string());
		}
		true
	}

	fn remove_input_classes(&self, classes: &[&str]) {
		for field in self
			.fields
			.borrow_mut()
			.iter_mut()
			.filter(|f| f.kind == FieldKind::Input)
		{
			field.classes.retain(|c| !classes.contains(&c.as_str()));
		}
	}
}

/// A page holding forms, plain elements and `<meta>` tags by id/name.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
	forms: HashMap<String, MemoryForm>,
	elements: HashMap<String, MemoryElement>,
	meta: HashMap<String, String>,
}

impl MemoryDocument {
	/// Create an empty page
	pub fn new() -> Self {
		Self::default()
	}

	/// The account page: the update form with `username` and `email`
	/// inputs, a hidden loader and a hidden notification.
	pub fn account_page(username: &str, email: &str) -> Self {
		Self::new()
			.with_form(
				DEFAULT_FORM_ID,
				MemoryForm::new()
					.input("username", username)
					.input("email", email),
			)
			.with_element(DEFAULT_LOADER_ID, MemoryElement::new())
			.with_element(DEFAULT_NOTIFICATION_ID, MemoryElement::new())
	}

	pub fn with_form(mut self, id: impl Into<String>, form: MemoryForm) -> Self {
		self.forms.insert(id.into(), form);
		self
	}

	pub fn with_element(mut self, id: impl Into<String>, element: MemoryElement) -> Self {
		self.elements.insert(id.into(), element);
		self
	}

	pub fn with_meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
		self.meta.insert(name.into(), content.into());
		self
	}

	pub fn form(&self, id: &str) -> Option<MemoryForm> {
		self.forms.get(id).cloned()
	}

	pub fn element(&self, id: &str) -> Option<MemoryElement> {
		self.elements.get(id).cloned()
	}
}

impl PageDocument for MemoryDocument {
	type Form = MemoryForm;
	type Element = MemoryElement;

	fn form_by_id(&self, id: &str) -> Option<MemoryForm> {
		self.form(id)
	}

	fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
		self.element(id)
	}

	fn meta_content(&self, name: &str) -> Option<String> {
		self.meta.get(name).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::{INVALID_CLASS, VALID_CLASS};
	use account_forms::FieldValues;
	use rstest::rstest;

	#[rstest]
	fn test_element_records_history() {
		let element = MemoryElement::new();
		element.set_display(Display::InlineBlock);
		element.set_display(Display::None);
		element.set_text_content("one");
		element.set_text_content("two");

		assert_eq!(
			element.display_history(),
			vec![Display::InlineBlock, Display::None]
		);
		assert_eq!(element.text_history(), vec!["one", "two"]);
		assert_eq!(element.text(), "two");
		assert!(!element.is_visible());
	}

	#[rstest]
	fn test_clones_share_state() {
		let element = MemoryElement::new();
		let clone = element.clone();
		clone.set_class_name("alert alert-info");
		assert_eq!(element.class_name(), "alert alert-info");
	}

	#[rstest]
	fn test_form_data_includes_every_field() {
		let form = MemoryForm::new()
			.input("csrf_token", "abc")
			.input("username", "alice")
			.textarea("bio", "hi");
		let data = form.form_data();
		assert_eq!(data.len(), 3);
		assert_eq!(data.value("bio"), Some("hi"));
	}

	#[rstest]
	fn test_add_input_class_unknown_name() {
		let form = MemoryForm::new().input("username", "");
		assert!(!form.add_input_class("email", INVALID_CLASS));
		assert!(form.add_input_class("username", INVALID_CLASS));
		assert!(form.add_input_class("username", INVALID_CLASS));
		assert_eq!(form.classes("username"), vec![INVALID_CLASS]);
	}

	#[rstest]
	fn test_remove_classes_only_touches_inputs() {
		let form = MemoryForm::new()
			.input("username", "")
			.textarea("bio", "");
		form.add_input_class("username", VALID_CLASS);
		form.add_input_class("bio", INVALID_CLASS);

		form.remove_input_classes(&[INVALID_CLASS, VALID_CLASS]);

		assert!(form.classes("username").is_empty());
		assert!(form.has_class("bio", INVALID_CLASS));
	}

	#[rstest]
	fn test_set_value_changes_submission() {
		let document = MemoryDocument::account_page("alice", "alice@example.com");
		let form = document.form(DEFAULT_FORM_ID).unwrap();
		form.set_value("username", "bob");
		assert_eq!(form.form_data().value("username"), Some("bob"));
	}

	#[rstest]
	fn test_account_page_lookup() {
		let document = MemoryDocument::account_page("", "").with_meta("csrf-token", "t0k");
		assert!(document.form_by_id("update-account-form").is_some());
		assert!(document.form_by_id("other").is_none());
		assert!(document.element_by_id("loader").is_some());
		assert!(document.element_by_id("notification").is_some());
		assert_eq!(document.meta_content("csrf-token").as_deref(), Some("t0k"));
	}
}
