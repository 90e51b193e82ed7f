//! Brief inputs shared by `compile` and `render`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use sitemaker::{Brief, BriefPatch, interpret};

#[derive(Args, Debug, Default)]
pub struct BriefInput {
	/// Brief JSON file (defaults to `brief_path` from settings, then the default brief)
	#[arg(long, value_name = "FILE")]
	pub brief: Option<PathBuf>,

	/// Patch JSON file, applied in order (can be repeated)
	#[arg(long = "patch", value_name = "FILE")]
	pub patches: Vec<PathBuf>,

	/// Free-text description, interpreted and applied last
	#[arg(long, value_name = "TEXT")]
	pub prompt: Option<String>,
}

impl BriefInput {
	/// Loads the base brief and applies patches, then the prompt.
	pub fn resolve(&self, fallback_brief: Option<&Path>) -> Result<Brief> {
		let mut brief = match self.brief.as_deref().or(fallback_brief) {
			Some(path) => read_brief(path)?,
			None => Brief::default(),
		};

		for path in &self.patches {
			brief = brief.apply(&read_patch(path)?);
		}

		if let Some(text) = &self.prompt {
			match interpret(text) {
				Some(patch) => brief = brief.apply(&patch),
				None => tracing::warn!("prompt is blank, ignoring it"),
			}
		}

		Ok(brief)
	}
}

fn read_brief(path: &Path) -> Result<Brief> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("failed to read brief {}", path.display()))?;
	Brief::from_json(&content).with_context(|| format!("invalid brief {}", path.display()))
}

fn read_patch(path: &Path) -> Result<BriefPatch> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("failed to read patch {}", path.display()))?;
	BriefPatch::from_json(&content).with_context(|| format!("invalid patch {}", path.display()))
}

/// Parses `key=value`.
pub fn parse_param(raw: &str) -> Result<(String, String)> {
	let Some((key, value)) = raw.split_once('=') else {
		bail!("expected key=value, got {raw:?}");
	};
	let key = key.trim();
	if key.is_empty() {
		bail!("parameter name is empty in {raw:?}");
	}
	Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tempfile::TempDir;

	#[rstest]
	#[case("plan-name=Growth", ("plan-name", "Growth"))]
	#[case("message=a=b", ("message", "a=b"))]
	#[case(" message =", ("message", ""))]
	fn test_parse_param(#[case] raw: &str, #[case] expected: (&str, &str)) {
		let (key, value) = parse_param(raw).unwrap();

		assert_eq!((key.as_str(), value.as_str()), expected);
	}

	#[rstest]
	#[case("no-equals")]
	#[case("=value")]
	fn test_parse_param_rejects(#[case] raw: &str) {
		assert!(parse_param(raw).is_err());
	}

	#[rstest]
	fn test_patches_apply_in_order_then_prompt() {
		let dir = TempDir::new().unwrap();
		let first = dir.path().join("first.json");
		let second = dir.path().join("second.json");
		fs::write(&first, r#"{ "brand": { "name": "First", "tagline": "Kept" } }"#).unwrap();
		fs::write(&second, r#"{ "brand": { "name": "Second" } }"#).unwrap();
		let input = BriefInput {
			brief: None,
			patches: vec![first, second],
			prompt: Some("a dental clinic".to_string()),
		};

		let brief = input.resolve(None).unwrap();

		assert_eq!(brief.brand.name, "Second");
		assert_eq!(brief.brand.tagline, "Kept");
		assert_eq!(brief.brand.industry, "clinic");
	}

	#[rstest]
	fn test_explicit_brief_wins_over_fallback() {
		let dir = TempDir::new().unwrap();
		let explicit = dir.path().join("explicit.json");
		let fallback = dir.path().join("fallback.json");
		fs::write(&explicit, r#"{ "brand": { "name": "Explicit" } }"#).unwrap();
		fs::write(&fallback, r#"{ "brand": { "name": "Fallback" } }"#).unwrap();
		let input = BriefInput {
			brief: Some(explicit),
			..BriefInput::default()
		};

		assert_eq!(input.resolve(Some(&fallback)).unwrap().brand.name, "Explicit");
		assert_eq!(
			BriefInput::default().resolve(Some(&fallback)).unwrap().brand.name,
			"Fallback"
		);
	}

	#[rstest]
	fn test_non_object_patch_is_an_error() {
		let dir = TempDir::new().unwrap();
		let patch = dir.path().join("patch.json");
		fs::write(&patch, "[1, 2]").unwrap();
		let input = BriefInput {
			patches: vec![patch],
			..BriefInput::default()
		};

		let err = input.resolve(None).unwrap_err();

		assert!(err.to_string().starts_with("invalid patch"));
	}
}
