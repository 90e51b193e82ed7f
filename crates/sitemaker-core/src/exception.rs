//! Error type for the fallible entry points of the configuration layer.
//!
//! Only parsing raw text can fail. Once a value has been parsed, every
//! other operation in this crate is total.

use thiserror::Error;

/// Errors raised while parsing a Brief or a patch from raw input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
	/// The input was not valid JSON.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// The input parsed, but is not shaped like a partial Brief.
	#[error("Invalid patch: {0}")]
	InvalidPatch(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
