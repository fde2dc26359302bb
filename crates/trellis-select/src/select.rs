// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The select-box renderer.
//!
//! [`SelectRenderer`] turns an ordered [`OptionList`] into a `<select>`
//! HTML fragment, and ships two convenience wrappers that generate
//! localized month and weekday lists before delegating to the generic
//! renderer.

use tracing::trace;

use trellis_html::escape;

use crate::calendar::{ChronoMonths, DEFAULT_MONTH_FORMAT, WEEKDAY_NAMES};
use crate::error::Result;
use crate::host::{DirectResolver, MonthNamer, NoTranslations, TranslationLookup, ValueResolver};
use crate::options::{OptionList, RenderOptions};

/// Renders `<select>` fragments on behalf of a hosting form layer.
///
/// Owns its three collaborators by composition: a [`ValueResolver`] for
/// selected-value repopulation and id policy, a [`TranslationLookup`] for
/// localized labels, and a [`MonthNamer`] for calendar names. Rendering is
/// synchronous, allocation-only work; the renderer holds no mutable state,
/// so one instance can serve any number of calls.
#[derive(Debug, Clone)]
pub struct SelectRenderer<R, T, N> {
	resolver: R,
	translations: T,
	months: N,
}

impl Default for SelectRenderer<DirectResolver, NoTranslations, ChronoMonths> {
	/// A renderer with no host state: explicit arguments are used verbatim,
	/// labels stay untranslated, and month names are English.
	fn default() -> Self {
		Self::new(DirectResolver, NoTranslations, ChronoMonths)
	}
}

impl<R, T, N> SelectRenderer<R, T, N>
where
	R: ValueResolver,
	T: TranslationLookup,
	N: MonthNamer,
{
	pub fn new(resolver: R, translations: T, months: N) -> Self {
		Self {
			resolver,
			translations,
			months,
		}
	}

	/// Render a select box for `name` over `list`.
	///
	/// The effective selected value comes from the [`ValueResolver`], which
	/// may override `selected` with previously submitted data. The `name`
	/// attribute defaults to `name` and the id attribute follows the
	/// resolver's policy; attributes the caller set in `options` always win
	/// over both defaults. An [`OptionList`] prepended via
	/// [`RenderOptions::prepend`] renders first and supersedes main-list
	/// entries sharing a value.
	///
	/// Every option value and label is entity-escaped. An empty `list`
	/// yields an empty `<select ...></select>`; `name` is passed through
	/// unvalidated.
	pub fn select(
		&self,
		name: &str,
		list: &OptionList,
		selected: Option<&str>,
		options: RenderOptions,
	) -> String {
		// The "value" of a select box is really the selected option, so the
		// resolver checks old input under the field name before falling back
		// to the literal argument.
		let selected = self.resolver.resolve(name, selected);

		let (mut attrs, prepend) = options.into_parts();

		let explicit_id = attrs.get("id").map(str::to_owned);
		if let Some(id) = self.resolver.id_attribute(name, explicit_id.as_deref()) {
			attrs.insert("id", id);
		}
		attrs.insert_default("name", name);

		let merged;
		let list = match prepend {
			Some(front) => {
				merged = list.with_prepended(&front);
				&merged
			}
			None => list,
		};

		let mut body = String::new();
		for (value, label) in list.iter() {
			body.push_str("<option value=\"");
			body.push_str(&escape(value));
			body.push('"');
			if selected.as_deref() == Some(value) {
				body.push_str(" selected=\"selected\"");
			}
			body.push('>');
			body.push_str(&escape(label));
			body.push_str("</option>");
		}

		trace!(field = name, options = list.len(), "rendered select");
		format!("<select{}>{}</select>", attrs.to_html(), body)
	}

	/// Render a month select box: options keyed `"1"`..`"12"` in calendar
	/// order, labeled with full month names (or their translations).
	pub fn select_month(
		&self,
		name: &str,
		selected: Option<&str>,
		options: RenderOptions,
	) -> Result<String> {
		self.select_month_with_format(name, selected, options, DEFAULT_MONTH_FORMAT)
	}

	/// [`select_month`](Self::select_month) with an explicit strftime-style
	/// month format (`%b` for "Jan", etc.). The translation key is derived
	/// from the formatted base label.
	pub fn select_month_with_format(
		&self,
		name: &str,
		selected: Option<&str>,
		options: RenderOptions,
		format: &str,
	) -> Result<String> {
		let mut months = OptionList::new();
		for month in 1..=12u32 {
			let base = self.months.month_name(month, format);
			months.push(month.to_string(), self.localized(base)?);
		}
		Ok(self.select(name, &months, selected, options))
	}

	/// Render a weekday select box: options keyed `"1"`..`"7"`, day 1 =
	/// Sunday, labeled `Sunday`..`Saturday` (or their translations).
	pub fn select_weekday(
		&self,
		name: &str,
		selected: Option<&str>,
		options: RenderOptions,
	) -> Result<String> {
		let mut days = OptionList::new();
		for (index, base) in WEEKDAY_NAMES.iter().enumerate() {
			days.push((index + 1).to_string(), self.localized((*base).to_string())?);
		}
		Ok(self.select(name, &days, selected, options))
	}

	/// Replace a base label with its translation when the catalog holds the
	/// `datetime.`-prefixed key; keep the base label otherwise.
	fn localized(&self, base: String) -> Result<String> {
		let key = format!("datetime.{}", base.to_lowercase());
		if self.translations.has(&key) {
			self.translations.translate(&key)
		} else {
			Ok(base)
		}
	}
}
