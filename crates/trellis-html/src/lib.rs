// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML building blocks for server-rendered form fragments.
//!
//! This crate provides the two leaf capabilities the form renderers in
//! `trellis-select` compose over:
//!
//! - [`escape`]: entity-escaping for text and attribute values
//! - [`AttributeSet`]: an ordered attribute mapping with deterministic,
//!   alphabetical `name="value"` serialization
//!
//! # Example
//!
//! ```
//! use trellis_html::AttributeSet;
//!
//! let mut attrs = AttributeSet::new();
//! attrs.insert("name", "size");
//! attrs.insert("class", "wide");
//!
//! // Attributes always serialize alphabetically, each preceded by a space.
//! assert_eq!(attrs.to_html(), r#" class="wide" name="size""#);
//! ```

pub mod attributes;
pub mod escape;

pub use attributes::AttributeSet;
pub use escape::escape;
