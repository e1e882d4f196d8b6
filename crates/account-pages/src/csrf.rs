//! CSRF token lookup
//!
//! The update form usually carries its token as a hidden input, which is
//! submitted with the rest of the fields. Pages may also publish it in
//! `<meta name="csrf-token" content="...">`; when they do, the token is sent
//! in the `X-CSRFToken` header as well.

use crate::dom::PageDocument;

/// The meta tag name for CSRF tokens.
pub const CSRF_META_NAME: &str = "csrf-token";

/// The header name used to send CSRF tokens in AJAX requests.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Retrieves the CSRF token from the page's meta tag.
///
/// Blank tokens are treated as absent.
pub fn csrf_token<D: PageDocument + ?Sized>(document: &D) -> Option<String> {
	document
		.meta_content(CSRF_META_NAME)
		.map(|token| token.trim().to_string())
		.filter(|token| !token.is_empty())
}
