//! Client-side validators
//!
//! Validators here are for UX only. The `/account` endpoint validates again
//! on the server and its answer is authoritative.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::{FieldError, FieldResult};

/// One or more characters that are neither `@` nor ECMAScript whitespace.
///
/// ECMAScript `\s` differs from Unicode `White_Space`: it includes U+FEFF
/// and excludes U+0085, so the class is spelled out.
macro_rules! email_part {
	() => {
		r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+"
	};
}

/// Shape check for email addresses: `local@domain.tld`, no whitespace and
/// no extra `@` in any part. Not an RFC 5322 parser.
pub const EMAIL_PATTERN: &str = concat!(
	"^",
	email_part!(),
	"@",
	email_part!(),
	r"\.",
	email_part!(),
	"$"
);

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Client-side validator trait
///
/// Validators are shared between rules and must not hold per-submission state.
pub trait ClientValidator: Send + Sync {
	/// Validate a field value
	///
	/// # Returns
	///
	/// `Ok(())` if validation passes, `Err(FieldError)` describing the failure otherwise
	fn validate(&self, value: &str) -> FieldResult<()>;
}

/// Accepts values whose length in characters lies in `min..=max`.
///
/// Length is a `char` count, not a byte count, so `"é"` and `"日本"` count
/// as one and two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
	min: usize,
	max: usize,
}

impl LengthValidator {
	/// Create a validator for the inclusive range `min..=max`
	///
	/// # Examples
	///
	/// ```
	/// use account_forms::validators::{ClientValidator, LengthValidator};
	///
	/// let validator = LengthValidator::new(2, 20);
	/// assert!(validator.validate("alice").is_ok());
	/// assert!(validator.validate("a").is_err());
	/// ```
	pub fn new(min: usize, max: usize) -> Self {
		Self { min, max }
	}

}

impl ClientValidator for LengthValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		let actual = value.chars().count();
		if actual < self.min || actual > self.max {
			return Err(FieldError::Length {
				min: self.min,
				max: self.max,
				actual,
			});
		}
		Ok(())
	}
}

/// Email validator
///
/// Validates that a string has the `local@domain.tld` shape of [`EMAIL_PATTERN`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl ClientValidator for EmailValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::Pattern { pattern: "email" })
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("ab")]
	#[case("alice")]
	#[case("abcdefghijklmnopqrst")]
	#[case("日本")]
	#[case("éé")]
	fn test_length_validator_accepts(#[case] value: &str) {
		assert!(LengthValidator::new(2, 20).validate(value).is_ok());
	}

	#[rstest]
	#[case("", 0)]
	#[case("a", 1)]
	#[case("é", 1)]
	#[case("abcdefghijklmnopqrstu", 21)]
	fn test_length_validator_rejects(#[case] value: &str, #[case] actual: usize) {
		assert_eq!(
			LengthValidator::new(2, 20).validate(value),
			Err(FieldError::Length {
				min: 2,
				max: 20,
				actual
			})
		);
	}

	#[rstest]
	fn test_length_counts_chars_not_bytes() {
		// 20 three-byte characters: 60 bytes, still within bounds
		let value = "日".repeat(20);
		assert_eq!(value.len(), 60);
		assert!(LengthValidator::new(2, 20).validate(&value).is_ok());
	}

	#[rstest]
	#[case("user@example.com")]
	#[case("a@b.c")]
	#[case("first.last@sub.example.org")]
	#[case("a@b.c.d")]
	#[case("a\u{85}b@c.d")]
	fn test_email_validator_valid(#[case] value: &str) {
		assert!(EmailValidator.validate(value).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("bad")]
	#[case("invalid-email")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@example")]
	#[case("user@@example.com")]
	#[case("us er@example.com")]
	#[case("user@exa mple.com")]
	#[case("user@example.")]
	#[case("a\u{FEFF}@b.c")]
	#[case("a@b\u{3000}c.d")]
	#[case("a@b.c\u{A0}")]
	#[case("a\tb@c.d")]
	fn test_email_validator_invalid(#[case] value: &str) {
		assert_eq!(
			EmailValidator.validate(value),
			Err(FieldError::Pattern { pattern: "email" })
		);
	}
}
