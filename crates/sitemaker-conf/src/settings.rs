//! The settings record.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Operator settings for the CLI and the preview store.
///
/// Keys are snake_case in TOML and in the environment
/// (`SITEMAKER_EXPORT__TITLE_SUFFIX`). Every field has a default, so an
/// empty configuration is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// `tracing` filter used when `RUST_LOG` is unset.
	pub log_filter: String,
	/// Standalone HTML export.
	pub export: ExportSettings,
	/// Live preview rendering.
	pub preview: PreviewSettings,
	/// Brief loaded when no `--brief` is given.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brief_path: Option<PathBuf>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			log_filter: DEFAULT_LOG_FILTER.to_string(),
			export: ExportSettings::default(),
			preview: PreviewSettings::default(),
			brief_path: None,
		}
	}
}

/// Export document options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
	/// `lang` attribute of the document.
	pub lang: String,
	/// Collapse insignificant whitespace.
	pub minify: bool,
	/// Embed the Site DSL as a JSON script element.
	pub embed_dsl: bool,
	/// Appended to the brand name in `<title>`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title_suffix: Option<String>,
}

impl Default for ExportSettings {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			minify: false,
			embed_dsl: true,
			title_suffix: None,
		}
	}
}

/// Preview options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
	/// Mark section roots for reveal-on-scroll.
	pub reveal: bool,
}

impl Default for PreviewSettings {
	fn default() -> Self {
		Self { reveal: true }
	}
}
