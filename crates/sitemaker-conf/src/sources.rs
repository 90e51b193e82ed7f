//! Configuration sources for the layered settings system
//!
//! Sources are merged in priority order (environment variables > TOML file >
//! defaults). Each source yields a map of top-level keys to JSON values;
//! nested tables stay nested.

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Prefix of environment variables read by [`EnvSource::sitemaker`].
pub const ENV_PREFIX: &str = "SITEMAKER_";

/// Separator of nesting levels inside an environment variable name.
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("Required configuration file not found: {}", .0.display())]
	Missing(PathBuf),
}

/// Environment variable configuration source
///
/// `SITEMAKER_EXPORT__MINIFY=true` becomes `{"export": {"minify": true}}`:
/// the prefix is stripped, the rest is lowercased and split on `__`.
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	/// Reads variables starting with `prefix` from the process environment.
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			vars: None,
		}
	}

	/// Reads `SITEMAKER_*` variables.
	pub fn sitemaker() -> Self {
		Self::new(ENV_PREFIX)
	}

	/// Reads from `vars` instead of the process environment.
	///
	/// # Examples
	///
	/// ```
	/// use sitemaker_conf::sources::{ConfigSource, EnvSource};
	///
	/// let source = EnvSource::sitemaker()
	/// 	.with_vars([("SITEMAKER_PREVIEW__REVEAL", "false")]);
	/// let config = source.load().unwrap();
	/// assert_eq!(config["preview"]["reveal"], false);
	/// ```
	pub fn with_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		self.vars = Some(
			vars.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		);
		self
	}

	fn vars(&self) -> Vec<(String, String)> {
		match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars().collect(),
		}
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut root = Map::new();

		let mut vars = self.vars();
		vars.sort();
		for (key, value) in vars {
			let Some(clean_key) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let lower_key = clean_key.to_lowercase();
			let path: Vec<&str> = lower_key
				.split(ENV_NESTING_SEPARATOR)
				.filter(|segment| !segment.is_empty())
				.collect();
			if path.is_empty() {
				continue;
			}
			insert_path(&mut root, &path, parse_env_value(&value));
		}

		Ok(root.into_iter().collect())
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

fn parse_env_value(raw: &str) -> Value {
	let trimmed = raw.trim();
	match trimmed.to_ascii_lowercase().as_str() {
		"true" | "yes" | "on" => return Value::Bool(true),
		"false" | "no" | "off" => return Value::Bool(false),
		_ => {}
	}
	if let Ok(num) = trimmed.parse::<i64>() {
		return Value::Number(num.into());
	}
	Value::String(raw.to_string())
}

fn insert_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
	let Some((last, parents)) = path.split_last() else {
		return;
	};
	let mut cursor = root;
	for segment in parents {
		let entry = cursor
			.entry(segment.to_string())
			.or_insert_with(|| Value::Object(Map::new()));
		if !entry.is_object() {
			*entry = Value::Object(Map::new());
		}
		let Value::Object(next) = entry else {
			return;
		};
		cursor = next;
	}
	cursor.insert(last.to_string(), value);
}

/// TOML file configuration source
///
/// A missing file loads as empty unless the source is [`required`](Self::required).
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Fails to load when the file does not exist.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			if self.required {
				return Err(SourceError::Missing(self.path.clone()));
			}
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let table: toml::Table = toml::from_str(&content)?;
		let json_value = serde_json::to_value(table)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected table at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Fixed values, lowest priority
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}

	/// Seeds every key from a serializable record, typically
	/// `Settings::default()`.
	pub fn from_serialize<T: serde::Serialize>(defaults: &T) -> Result<Self, SourceError> {
		let value = serde_json::to_value(defaults)?;
		let Value::Object(map) = value else {
			return Err(SourceError::Parse(
				"defaults must serialize to a record".to_string(),
			));
		};
		Ok(Self {
			values: map.into_iter().collect(),
		})
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::fs::File;
	use std::io::Write;
	use tempfile::TempDir;

	#[rstest]
	fn test_env_source_nests_on_double_underscore() {
		let source = EnvSource::sitemaker().with_vars([
			("SITEMAKER_LOG_FILTER", "debug"),
			("SITEMAKER_EXPORT__MINIFY", "true"),
			("SITEMAKER_EXPORT__LANG", "nb"),
			("OTHER_VALUE", "ignored"),
		]);

		let config = source.load().unwrap();

		assert_eq!(config.get("log_filter").unwrap(), &json!("debug"));
		assert_eq!(
			config.get("export").unwrap(),
			&json!({ "lang": "nb", "minify": true })
		);
		assert!(!config.contains_key("other_value"));
	}

	#[rstest]
	#[case("true", json!(true))]
	#[case("OFF", json!(false))]
	#[case("42", json!(42))]
	#[case(" | Acme", json!(" | Acme"))]
	fn test_env_value_parsing(#[case] raw: &str, #[case] expected: Value) {
		assert_eq!(parse_env_value(raw), expected);
	}

	#[rstest]
	fn test_env_source_skips_empty_keys() {
		let source = EnvSource::sitemaker().with_vars([("SITEMAKER_", "x"), ("SITEMAKER_____", "y")]);

		assert!(source.load().unwrap().is_empty());
	}

	#[rstest]
	fn test_env_scalar_then_nested_key() {
		let source = EnvSource::sitemaker()
			.with_vars([("SITEMAKER_PREVIEW", "on"), ("SITEMAKER_PREVIEW__REVEAL", "off")]);

		let config = source.load().unwrap();

		assert_eq!(config.get("preview").unwrap(), &json!({ "reveal": false }));
	}

	#[rstest]
	fn test_toml_source() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("sitemaker.toml");

		let mut file = File::create(&config_path).unwrap();
		writeln!(
			file,
			r#"
log_filter = "warn"

[export]
minify = true
title_suffix = " | Harbor & Sage"
"#
		)
		.unwrap();

		let source = TomlFileSource::new(&config_path);
		let config = source.load().unwrap();

		assert_eq!(config.get("log_filter").unwrap(), &json!("warn"));
		assert_eq!(
			config.get("export").unwrap(),
			&json!({ "minify": true, "title_suffix": " | Harbor & Sage" })
		);
	}

	#[rstest]
	fn test_missing_toml_file() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("absent.toml");

		assert!(TomlFileSource::new(&path).load().unwrap().is_empty());
		assert!(matches!(
			TomlFileSource::new(&path).required().load(),
			Err(SourceError::Missing(missing)) if missing == path
		));
	}

	#[rstest]
	fn test_malformed_toml_is_an_error() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("broken.toml");
		std::fs::write(&path, "log_filter = ").unwrap();

		assert!(matches!(
			TomlFileSource::new(&path).load(),
			Err(SourceError::Toml(_))
		));
	}

	#[rstest]
	fn test_default_source_priorities() {
		assert!(DefaultSource::new().priority() < TomlFileSource::new("x").priority());
		assert!(TomlFileSource::new("x").priority() < EnvSource::sitemaker().priority());
	}
}
