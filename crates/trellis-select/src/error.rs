// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for select rendering operations.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Errors surfaced while building localized select boxes.
///
/// Plain [`SelectRenderer::select`](crate::SelectRenderer::select) calls are
/// infallible; these arise only from the translation lookup behind the
/// month/weekday wrappers, and they propagate to the caller unmasked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
	#[error("translation failed for key `{key}`: {message}")]
	Translation { key: String, message: String },

	#[error("no translation for key `{0}`")]
	MissingTranslation(String),
}
