// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Capabilities supplied by the hosting application.
//!
//! The renderer never reaches into session, model, or translation state
//! itself; it composes over these traits. Hosts wire real implementations
//! (old-input repopulation, a translation catalog, locale-aware calendars);
//! the unit implementations here cover standalone use and tests.

use crate::error::{Result, SelectError};

/// Resolves field state owned by the host: the effective selected value
/// and the id-attribute policy.
pub trait ValueResolver: Send + Sync {
	/// Resolve the effective selected value for `field`.
	///
	/// A host implementation consults previously submitted or model data
	/// first, falling back to `explicit`, which is how forms repopulate
	/// after a failed POST. A non-`None` result overrides the literal
	/// argument the caller passed to the renderer.
	fn resolve(&self, field: &str, explicit: Option<&str>) -> Option<String>;

	/// The `id` attribute to emit for `field`, given the id the caller set
	/// explicitly, if any. `None` means emit no id attribute.
	///
	/// Hosts that track rendered labels derive a default id from the field
	/// name here; the default implementation passes the explicit id
	/// through untouched.
	fn id_attribute(&self, field: &str, explicit: Option<&str>) -> Option<String> {
		let _ = field;
		explicit.map(str::to_owned)
	}
}

/// A [`ValueResolver`] with no host state: the explicit arguments are
/// always used verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectResolver;

impl ValueResolver for DirectResolver {
	fn resolve(&self, _field: &str, explicit: Option<&str>) -> Option<String> {
		explicit.map(str::to_owned)
	}
}

/// Translation catalog lookup with an existence check.
///
/// The renderer only calls [`translate`](Self::translate) for keys
/// [`has`](Self::has) reported present, so a `translate` error means the
/// backend itself failed; such errors propagate to the caller unmasked.
pub trait TranslationLookup: Send + Sync {
	fn has(&self, key: &str) -> bool;

	fn translate(&self, key: &str) -> Result<String>;
}

/// A [`TranslationLookup`] holding no translations; every label keeps its
/// base (untranslated) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl TranslationLookup for NoTranslations {
	fn has(&self, _key: &str) -> bool {
		false
	}

	fn translate(&self, key: &str) -> Result<String> {
		Err(SelectError::MissingTranslation(key.to_string()))
	}
}

/// Calendar month naming.
///
/// Replaces the C-locale `strftime` dependency of classic form builders
/// with an injectable capability, so naming is deterministic and testable
/// without touching process locale state.
pub trait MonthNamer: Send + Sync {
	/// Name for `month` (1..=12) under a strftime-style `format`
	/// (`%B` full name, `%b` abbreviated).
	fn month_name(&self, month: u32, format: &str) -> String;
}
