// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Data model for select rendering: ordered option lists and per-call
//! render options.

use serde::{Deserialize, Serialize};

use trellis_html::AttributeSet;

/// An ordered mapping from option value to display label.
///
/// Insertion order is preserved and determines render order. Values are
/// unique: pushing an existing value replaces its label in place without
/// moving the entry. Labels are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
	entries: Vec<(String, String)>,
}

impl OptionList {
	/// Create an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a list from `(value, label)` pairs, first occurrence ordering.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut list = Self::new();
		for (value, label) in pairs {
			list.push(value, label);
		}
		list
	}

	/// Append an option, or relabel it in place if the value already exists.
	pub fn push(&mut self, value: impl Into<String>, label: impl Into<String>) {
		let value = value.into();
		let label = label.into();
		match self.entries.iter_mut().find(|(v, _)| *v == value) {
			Some(entry) => entry.1 = label,
			None => self.entries.push((value, label)),
		}
	}

	/// Iterate `(value, label)` pairs in render order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(v, l)| (v.as_str(), l.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains_value(&self, value: &str) -> bool {
		self.entries.iter().any(|(v, _)| v == value)
	}

	/// Label for a value, if present.
	pub fn label_of(&self, value: &str) -> Option<&str> {
		self
			.entries
			.iter()
			.find(|(v, _)| v == value)
			.map(|(_, l)| l.as_str())
	}

	/// Union with `front` placed before this list.
	///
	/// Entries of `front` come first in their own order; entries of `self`
	/// follow in order, minus any value `front` already supplied (the
	/// prepended entry wins the collision). Neither input is mutated.
	#[must_use]
	pub fn with_prepended(&self, front: &OptionList) -> OptionList {
		let mut merged = front.clone();
		for (value, label) in self.iter() {
			if !front.contains_value(value) {
				merged.entries.push((value.to_string(), label.to_string()));
			}
		}
		merged
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionList {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::from_pairs(iter)
	}
}

/// Per-call rendering options: extra HTML attributes plus an optional
/// list of options to place in front of the main list.
///
/// The original form-builder smuggled the prepend list through a reserved
/// `_prepend` attribute key; here it is an explicit field, so it can never
/// leak into the serialized attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
	#[serde(default)]
	attrs: AttributeSet,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	prepend: Option<OptionList>,
}

impl RenderOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an HTML attribute on the `<select>` element.
	#[must_use]
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name, value);
		self
	}

	/// Place `list` in front of the main option list when rendering.
	///
	/// Prepended entries win value collisions against the main list. The
	/// usual use is a leading placeholder row such as
	/// `("", "Choose a Size")`.
	#[must_use]
	pub fn prepend(mut self, list: OptionList) -> Self {
		self.prepend = Some(list);
		self
	}

	pub fn attrs(&self) -> &AttributeSet {
		&self.attrs
	}

	pub(crate) fn into_parts(self) -> (AttributeSet, Option<OptionList>) {
		(self.attrs, self.prepend)
	}
}
