//! Section rendering errors.

use thiserror::Error;

/// Why a single section could not be rendered.
///
/// Errors never escape the renderer: the failing section is replaced by a
/// visible fault node and the rest of the page renders normally.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
	/// A link or image points at a scheme that would run script.
	#[error("unsafe URL in {section}.{field}: {url}")]
	UnsafeUrl {
		/// Section kind.
		section: String,
		/// Offending field.
		field: &'static str,
		/// The rejected URL.
		url: String,
	},

	/// A field the section cannot do without is blank.
	#[error("missing required field {section}.{field}")]
	MissingField {
		/// Section kind.
		section: String,
		/// Blank field.
		field: &'static str,
	},
}

impl RenderError {
	/// Kind of the section that failed.
	pub fn section(&self) -> &str {
		match self {
			Self::UnsafeUrl { section, .. } | Self::MissingField { section, .. } => section,
		}
	}
}
