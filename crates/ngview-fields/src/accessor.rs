//! Accessor-name helpers.
//!
//! Field tables name the accessor method of the original domain type
//! (`getUserName`, `isActive`). When a declaration leaves its scope name or
//! queryable field name unset, the default is derived from that accessor
//! name.

use crate::error::{FieldError, FieldResult};

/// Derive the default field name for an accessor method name.
///
/// Strips a leading `get` or `is` and lower-cases the first remaining
/// character; the rest of the name is left unchanged. Names with neither
/// prefix, or with nothing after the prefix, are rejected.
///
/// # Examples
///
/// ```
/// use ngview_fields::accessor::field_name_for_accessor;
///
/// assert_eq!(field_name_for_accessor("getUserName").unwrap(), "userName");
/// assert_eq!(field_name_for_accessor("isActive").unwrap(), "active");
/// assert!(field_name_for_accessor("userName").is_err());
/// ```
pub fn field_name_for_accessor(method: &str) -> FieldResult<String> {
	let suffix = method
		.strip_prefix("get")
		.or_else(|| method.strip_prefix("is"))
		.ok_or_else(|| FieldError::UnsupportedAccessor {
			method: method.to_string(),
		})?;

	let mut chars = suffix.chars();
	match chars.next() {
		Some(first) => Ok(first.to_lowercase().chain(chars).collect()),
		// A bare prefix ("get", "is") names no field.
		None => Err(FieldError::UnsupportedAccessor {
			method: method.to_string(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("getUserName", "userName")]
	#[case("getUrl", "url")]
	#[case("isActive", "active")]
	#[case("isVisible", "visible")]
	#[case("getID", "iD")]
	#[case("getA", "a")]
	fn derives_default_name(#[case] method: &str, #[case] expected: &str) {
		assert_eq!(field_name_for_accessor(method).unwrap(), expected);
	}

	#[rstest]
	#[case("userName")]
	#[case("fetchUserName")]
	#[case("hasErrors")]
	#[case("")]
	#[case("get")]
	#[case("is")]
	fn rejects_unsupported_accessors(#[case] method: &str) {
		assert!(matches!(
			field_name_for_accessor(method),
			Err(FieldError::UnsupportedAccessor { .. })
		));
	}

	#[test]
	fn get_prefix_wins_over_is() {
		// "getIsbn" strips "get", not "is".
		assert_eq!(field_name_for_accessor("getIsbn").unwrap(), "isbn");
	}

	proptest! {
		#[test]
		fn any_suffix_is_lowercased_once(suffix in "[A-Z][A-Za-z0-9]{0,16}") {
			let mut chars = suffix.chars();
			let first = chars.next().unwrap().to_lowercase().to_string();
			let expected = first + chars.as_str();

			prop_assert_eq!(
				field_name_for_accessor(&format!("get{}", suffix)).unwrap(),
				expected.clone()
			);
			prop_assert_eq!(
				field_name_for_accessor(&format!("is{}", suffix)).unwrap(),
				expected
			);
		}
	}
}
