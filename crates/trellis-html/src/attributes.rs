// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered attribute mapping with deterministic serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::escape::escape;

/// A set of HTML attributes that serializes alphabetically by name.
///
/// Backed by a `BTreeMap`, so iteration (and therefore the serialized
/// output) is always sorted by attribute name regardless of insertion
/// order. Inserting an existing name overwrites its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
	attrs: BTreeMap<String, String>,
}

impl AttributeSet {
	/// Create an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an attribute, overwriting any existing value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.attrs.insert(name.into(), value.into());
	}

	/// Set an attribute only if it is not already present.
	///
	/// Used for renderer-supplied defaults (`name`, `id`) that an explicit
	/// caller value must win over.
	pub fn insert_default(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.attrs.entry(name.into()).or_insert_with(|| value.into());
	}

	/// Look up an attribute value by name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	/// Whether an attribute with this name is present.
	pub fn contains(&self, name: &str) -> bool {
		self.attrs.contains_key(name)
	}

	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	/// Iterate attributes in alphabetical order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Serialize as ` name="value"` pairs, alphabetical by name.
	///
	/// Each attribute is preceded by exactly one space so the result can be
	/// appended directly after a tag name (`<select` + attrs + `>`). Values
	/// are entity-escaped. An empty set yields an empty string.
	#[must_use]
	pub fn to_html(&self) -> String {
		let mut html = String::new();
		for (name, value) in &self.attrs {
			html.push(' ');
			html.push_str(name);
			html.push_str("=\"");
			html.push_str(&escape(value));
			html.push('"');
		}
		html
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			attrs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_to_html_alphabetical_order() {
		let mut attrs = AttributeSet::new();
		attrs.insert("name", "size");
		attrs.insert("id", "select-id");
		attrs.insert("class", "class-name");
		assert_eq!(
			attrs.to_html(),
			r#" class="class-name" id="select-id" name="size""#
		);
	}

	#[test]
	fn test_to_html_empty() {
		assert_eq!(AttributeSet::new().to_html(), "");
	}

	#[test]
	fn test_to_html_escapes_values() {
		let mut attrs = AttributeSet::new();
		attrs.insert("title", r#"say "hi" & go"#);
		assert_eq!(attrs.to_html(), r#" title="say &quot;hi&quot; &amp; go""#);
	}

	#[test]
	fn test_insert_overwrites() {
		let mut attrs = AttributeSet::new();
		attrs.insert("class", "a");
		attrs.insert("class", "b");
		assert_eq!(attrs.get("class"), Some("b"));
		assert_eq!(attrs.len(), 1);
	}

	#[test]
	fn test_insert_default_keeps_existing() {
		let mut attrs = AttributeSet::new();
		attrs.insert("name", "explicit");
		attrs.insert_default("name", "derived");
		attrs.insert_default("id", "derived");
		assert_eq!(attrs.get("name"), Some("explicit"));
		assert_eq!(attrs.get("id"), Some("derived"));
	}

	#[test]
	fn test_serde_round_trip() {
		let attrs: AttributeSet = [("class", "wide"), ("name", "size")].into_iter().collect();
		let json = serde_json::to_string(&attrs).unwrap();
		let back: AttributeSet = serde_json::from_str(&json).unwrap();
		assert_eq!(back, attrs);
	}

	proptest! {
		#[test]
		fn to_html_is_sorted_by_name(
			pairs in proptest::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9 ]{0,12}"), 0..8)
		) {
			let attrs: AttributeSet = pairs.into_iter().collect();
			let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
			let mut sorted = names.clone();
			sorted.sort_unstable();
			prop_assert_eq!(names, sorted);
		}

		#[test]
		fn to_html_emits_one_pair_per_attribute(
			pairs in proptest::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9]{0,12}"), 0..8)
		) {
			let attrs: AttributeSet = pairs.into_iter().collect();
			let html = attrs.to_html();
			prop_assert_eq!(html.matches("=\"").count(), attrs.len());
			if !attrs.is_empty() {
				prop_assert!(html.starts_with(' '));
			}
		}
	}
}
