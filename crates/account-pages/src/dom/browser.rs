//! `web_sys` implementation of the DOM traits (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement};

use crate::dom::{Display, ElementHandle, FormHandle, PageDocument};
use crate::form_data::{FilePart, FormData, FormValue};
use crate::{error_log, warn_log};

/// The browser's current `document`.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: web_sys::Document,
}

impl BrowserDocument {
	/// `window.document`, or `None` outside a window context (e.g. a worker)
	pub fn current() -> Option<Self> {
		web_sys::window()
			.and_then(|window| window.document())
			.map(Self::from_document)
	}

	pub fn from_document(document: web_sys::Document) -> Self {
		Self { document }
	}

	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}
}

impl PageDocument for BrowserDocument {
	type Form = BrowserForm;
	type Element = BrowserElement;

	fn form_by_id(&self, id: &str) -> Option<BrowserForm> {
		self.document
			.get_element_by_id(id)?
			.dyn_into::<HtmlFormElement>()
			.ok()
			.map(BrowserForm)
	}

	fn element_by_id(&self, id: &str) -> Option<BrowserElement> {
		self.document
			.get_element_by_id(id)?
			.dyn_into::<HtmlElement>()
			.ok()
			.map(BrowserElement)
	}

	fn meta_content(&self, name: &str) -> Option<String> {
		self.document
			.query_selector(&format!("meta[name=\"{}\"]", name))
			.ok()
			.flatten()?
			.get_attribute("content")
	}
}

/// A `<form>` element.
#[derive(Debug, Clone)]
pub struct BrowserForm(HtmlFormElement);

impl BrowserForm {
	pub fn element(&self) -> &HtmlFormElement {
		&self.0
	}
}

impl FormHandle for BrowserForm {
	fn form_data(&self) -> FormData {
		match web_sys::FormData::new_with_form(&self.0) {
			Ok(raw) => {
				let entries = read_entries(&raw);
				FormData::from_browser(entries, raw)
			}
			Err(err) => {
				error_log!("Failed to read form data: {:?}", err);
				FormData::new()
			}
		}
	}

	fn add_input_class(&self, name: &str, class: &str) -> bool {
		let element = match self.0.query_selector(&format!("[name=\"{}\"]", name)) {
			Ok(Some(element)) => element,
			Ok(None) => return false,
			Err(err) => {
				warn_log!("Invalid selector for field '{}': {:?}", name, err);
				return false;
			}
		};
		if let Err(err) = element.class_list().add_1(class) {
			warn_log!("Failed to add class '{}' to '{}': {:?}", class, name, err);
		}
		true
	}

	fn remove_input_classes(&self, classes: &[&str]) {
		let Ok(inputs) = self.0.query_selector_all("input") else {
			return;
		};
		for index in 0..inputs.length() {
			let Some(input) = inputs
				.item(index)
				.and_then(|node| node.dyn_into::<web_sys::Element>().ok())
			else {
				continue;
			};
			let class_list = input.class_list();
			for class in classes {
				let _ = class_list.remove_1(class);
			}
		}
	}
}

/// Reads `[name, value]` pairs out of a browser `FormData`.
fn read_entries(raw: &web_sys::FormData) -> Vec<(String, FormValue)> {
	let Ok(Some(iter)) = js_sys::try_iter(raw.as_ref()) else {
		return Vec::new();
	};
	iter.filter_map(Result::ok)
		.filter_map(|pair| {
			let pair = pair.dyn_into::<js_sys::Array>().ok()?;
			let name = pair.get(0).as_string()?;
			let value = pair.get(1);
			let value = match value.as_string() {
				Some(text) => FormValue::Text(text),
				None => {
					let file = value.dyn_into::<web_sys::File>().ok()?;
					let content_type = file.type_();
					FormValue::File(FilePart {
						filename: file.name(),
						content_type: (!content_type.is_empty()).then_some(content_type),
						bytes: Vec::new(),
					})
				}
			};
			Some((name, value))
		})
		.collect()
}

/// An `HTMLElement` such as the loader or the notification.
#[derive(Debug, Clone)]
pub struct BrowserElement(HtmlElement);

impl BrowserElement {
	pub fn element(&self) -> &HtmlElement {
		&self.0
	}
}

impl ElementHandle for BrowserElement {
	fn set_text_content(&self, text: &str) {
		self.0.set_text_content(Some(text));
	}

	fn set_class_name(&self, class_name: &str) {
		self.0.set_class_name(class_name);
	}

	fn set_display(&self, display: Display) {
		if let Err(err) = self.0.style().set_property("display", display.as_css()) {
			warn_log!("Failed to set display: {:?}", err);
		}
	}
}
