// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Entity-escaping for HTML text and attribute values.

/// Escape a string for safe insertion into HTML text or attribute values.
///
/// Replaces the five HTML-special characters (`&`, `<`, `>`, `"`, `'`)
/// with their corresponding entities. Everything else passes through
/// unchanged, so already-safe strings round-trip byte-for-byte.
#[must_use]
pub fn escape(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#39;"),
			_ => output.push(ch),
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_escape_specials() {
		assert_eq!(escape("&"), "&amp;");
		assert_eq!(escape("<option>"), "&lt;option&gt;");
		assert_eq!(escape(r#"a"b"#), "a&quot;b");
		assert_eq!(escape("it's"), "it&#39;s");
	}

	#[test]
	fn test_escape_plain_text_unchanged() {
		assert_eq!(escape("Choose a Size"), "Choose a Size");
		assert_eq!(escape(""), "");
		assert_eq!(escape("größe"), "größe");
	}

	#[test]
	fn test_escape_mixed() {
		assert_eq!(
			escape(r#"<a href="x">Tom & Jerry</a>"#),
			"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
		);
	}

	#[test]
	fn test_escape_amp_first_no_double_escape() {
		// A single pass must not re-escape entities it just produced.
		assert_eq!(escape("&amp;"), "&amp;amp;");
	}

	proptest! {
		#[test]
		fn escaped_output_has_no_raw_specials(s in ".*") {
			let out = escape(&s);
			prop_assert!(!out.contains('<'));
			prop_assert!(!out.contains('>'));
			prop_assert!(!out.contains('"'));
			prop_assert!(!out.contains('\''));
		}

		#[test]
		fn strings_without_specials_round_trip(s in "[a-zA-Z0-9 _-]*") {
			prop_assert_eq!(escape(&s), s);
		}
	}
}
