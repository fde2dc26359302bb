// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Deterministic calendar naming.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::host::MonthNamer;

/// Default month format: full month name ("January").
pub const DEFAULT_MONTH_FORMAT: &str = "%B";

/// Weekday names in render order; day 1 is Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
	"Sunday",
	"Monday",
	"Tuesday",
	"Wednesday",
	"Thursday",
	"Friday",
	"Saturday",
];

/// [`MonthNamer`] backed by chrono's strftime formatter.
///
/// Always produces English names, independent of process locale. Hosts
/// serving localized month names outside the translation-key mechanism can
/// substitute their own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoMonths;

impl MonthNamer for ChronoMonths {
	fn month_name(&self, month: u32, format: &str) -> String {
		let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
		if items.iter().any(|item| matches!(item, Item::Error)) {
			return String::new();
		}
		// Any year/day works; only the month field is formatted.
		match NaiveDate::from_ymd_opt(2001, month, 1) {
			Some(date) => date.format_with_items(items.iter()).to_string(),
			None => String::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_full_month_names() {
		let namer = ChronoMonths;
		assert_eq!(namer.month_name(1, DEFAULT_MONTH_FORMAT), "January");
		assert_eq!(namer.month_name(6, DEFAULT_MONTH_FORMAT), "June");
		assert_eq!(namer.month_name(12, DEFAULT_MONTH_FORMAT), "December");
	}

	#[test]
	fn test_abbreviated_month_names() {
		let namer = ChronoMonths;
		assert_eq!(namer.month_name(1, "%b"), "Jan");
		assert_eq!(namer.month_name(9, "%b"), "Sep");
	}

	#[test]
	fn test_out_of_range_month_is_empty() {
		let namer = ChronoMonths;
		assert_eq!(namer.month_name(0, DEFAULT_MONTH_FORMAT), "");
		assert_eq!(namer.month_name(13, DEFAULT_MONTH_FORMAT), "");
	}

	#[test]
	fn test_invalid_format_is_empty() {
		let namer = ChronoMonths;
		assert_eq!(namer.month_name(1, "%Q"), "");
	}

	#[test]
	fn test_weekday_table_starts_on_sunday() {
		assert_eq!(WEEKDAY_NAMES[0], "Sunday");
		assert_eq!(WEEKDAY_NAMES[6], "Saturday");
	}
}
