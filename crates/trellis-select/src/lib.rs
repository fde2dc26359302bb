// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized select-box rendering for server-side form building.
//!
//! This crate renders `<select>` HTML fragments from ordered option lists,
//! plus convenience wrappers for month and weekday dropdowns whose labels
//! go through a host-supplied translation catalog.
//!
//! # Overview
//!
//! - [`SelectRenderer`]: the renderer, composing three host capabilities
//! - [`OptionList`] / [`RenderOptions`]: the per-call data model
//! - [`ValueResolver`], [`TranslationLookup`], [`MonthNamer`]: the host
//!   capability traits, with standalone defaults
//!
//! Rendering is synchronous and stateless: each call is a pure function of
//! its inputs plus the injected collaborators, and returns one HTML
//! fragment as a `String`.
//!
//! # Example
//!
//! ```
//! use trellis_select::{OptionList, RenderOptions, SelectRenderer};
//!
//! let form = SelectRenderer::default();
//!
//! let html = form.select(
//! 	"size",
//! 	&OptionList::from_pairs([("L", "Large"), ("S", "Small")]),
//! 	Some("L"),
//! 	RenderOptions::new().attr("class", "wide"),
//! );
//! assert!(html.starts_with("<select class=\"wide\" name=\"size\">"));
//! assert!(html.contains("<option value=\"L\" selected=\"selected\">Large</option>"));
//!
//! // Month dropdown with a leading placeholder row.
//! let months = form.select_month(
//! 	"month",
//! 	None,
//! 	RenderOptions::new().prepend(OptionList::from_pairs([("", "Choose a Month")])),
//! )?;
//! assert!(months.contains("<option value=\"1\">January</option>"));
//! # Ok::<(), trellis_select::SelectError>(())
//! ```

pub mod calendar;
pub mod error;
pub mod host;
pub mod options;
pub mod select;

pub use calendar::{ChronoMonths, DEFAULT_MONTH_FORMAT, WEEKDAY_NAMES};
pub use error::{Result, SelectError};
pub use host::{DirectResolver, MonthNamer, NoTranslations, TranslationLookup, ValueResolver};
pub use options::{OptionList, RenderOptions};
pub use select::SelectRenderer;
