//! Submitted field set
//!
//! [`FormData`] is the full set of fields a form submits, in document order,
//! mirroring the browser's `FormData`. Validation reads two of its fields;
//! the transport sends all of them.

use account_forms::FieldValues;

/// A file chosen in an `<input type="file">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
	pub filename: String,
	pub content_type: Option<String>,
	/// File contents. Empty when read from a browser form: the browser
	/// transport sends the original `FormData`, which still holds the file.
	pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
	Text(String),
	File(FilePart),
}

impl FormValue {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::File(_) => None,
		}
	}
}

/// Ordered `(name, value)` entries of a form.
#[derive(Debug, Clone, Default)]
pub struct FormData {
	entries: Vec<(String, FormValue)>,
	#[cfg(target_arch = "wasm32")]
	raw: Option<web_sys::FormData>,
}

impl PartialEq for FormData {
	fn eq(&self, other: &Self) -> bool {
		self.entries == other.entries
	}
}

impl FormData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap a browser `FormData`, keeping it for the request body.
	#[cfg(target_arch = "wasm32")]
	pub(crate) fn from_browser(entries: Vec<(String, FormValue)>, raw: web_sys::FormData) -> Self {
		Self {
			entries,
			raw: Some(raw),
		}
	}

	#[cfg(target_arch = "wasm32")]
	pub(crate) fn browser_form_data(&self) -> Option<&web_sys::FormData> {
		self.raw.as_ref()
	}

	pub fn append_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.entries
			.push((name.into(), FormValue::Text(value.into())));
	}

	pub fn append_file(&mut self, name: impl Into<String>, file: FilePart) {
		self.entries.push((name.into(), FormValue::File(file)));
	}

	pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.append_text(name, value);
		self
	}

	pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
		self.append_file(name, file);
		self
	}

	/// First value submitted under `name`
	pub fn get(&self, name: &str) -> Option<&FormValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	pub fn entries(&self) -> &[(String, FormValue)] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl FieldValues for FormData {
	/// A file entry reads as absent, the same way a script reading a text
	/// field would not get a string back.
	fn value(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(FormValue::as_text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_get_returns_first_entry() {
		let data = FormData::new()
			.text("tag", "first")
			.text("tag", "second");
		assert_eq!(data.value("tag"), Some("first"));
		assert_eq!(data.len(), 2);
	}

	#[rstest]
	fn test_file_entries_are_not_text() {
		let data = FormData::new().file(
			"picture",
			FilePart {
				filename: "me.png".to_string(),
				content_type: Some("image/png".to_string()),
				bytes: vec![1, 2, 3],
			},
		);
		assert!(matches!(data.get("picture"), Some(FormValue::File(_))));
		assert_eq!(data.value("picture"), None);
	}

	#[rstest]
	fn test_entries_keep_document_order() {
		let data = FormData::new()
			.text("csrf_token", "t")
			.text("username", "alice")
			.text("email", "alice@example.com");
		let names: Vec<&str> = data.entries().iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(names, vec!["csrf_token", "username", "email"]);
	}
}
