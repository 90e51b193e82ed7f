//! Layered settings builder.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sitemaker_core::deep_merge;

use crate::settings::Settings;
use crate::sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};

/// Error raised while building settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// A source failed to load
	#[error("{description}: {source}")]
	Source {
		description: String,
		#[source]
		source: SourceError,
	},

	/// The merged configuration does not fit the settings record
	#[error("Invalid settings: {0}")]
	Invalid(#[from] serde_json::Error),
}

/// Collects sources and merges them by priority.
///
/// Lower priority sources are applied first; records merge recursively and
/// every other value is replaced. Sources with equal priority apply in the
/// order they were added.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sitemaker_conf::{Settings, SettingsBuilder};
/// use sitemaker_conf::sources::{DefaultSource, EnvSource};
///
/// let settings: Settings = SettingsBuilder::new()
/// 	.add_source(DefaultSource::new().with_value("log_filter", json!("info")))
/// 	.add_source(EnvSource::sitemaker().with_vars([("SITEMAKER_LOG_FILTER", "debug")]))
/// 	.build()
/// 	.unwrap();
/// assert_eq!(settings.log_filter, "debug");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// The standard stack: defaults, then the optional TOML file at
	/// `config_path`, then `SITEMAKER_*` environment variables.
	pub fn standard(config_path: Option<&Path>) -> Result<Self, SettingsError> {
		let defaults = DefaultSource::from_serialize(&Settings::default()).map_err(|err| {
			SettingsError::Source {
				description: "Default values".to_string(),
				source: err,
			}
		})?;
		let mut builder = Self::new().add_source(defaults);
		if let Some(path) = config_path {
			builder = builder.add_source(TomlFileSource::new(path).required());
		}
		Ok(builder.add_source(EnvSource::sitemaker()))
	}

	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Merges every source into one JSON record.
	pub fn build_value(&self) -> Result<Value, SettingsError> {
		let mut ordered: Vec<&dyn ConfigSource> = self.sources.iter().map(|source| source.as_ref()).collect();
		ordered.sort_by_key(|source| source.priority());

		let mut merged = Value::Object(Map::new());
		for source in ordered {
			let description = source.description();
			let layer = source.load().map_err(|err| SettingsError::Source {
				description: description.clone(),
				source: err,
			})?;
			tracing::debug!(source = %description, keys = layer.len(), "loaded settings layer");
			deep_merge(&mut merged, &Value::Object(layer.into_iter().collect()));
		}

		Ok(merged)
	}

	/// Merges every source and deserializes the result.
	pub fn build<T: DeserializeOwned>(&self) -> Result<T, SettingsError> {
		Ok(serde_json::from_value(self.build_value()?)?)
	}
}

impl Settings {
	/// Loads settings through [`SettingsBuilder::standard`].
	pub fn load(config_path: Option<&Path>) -> Result<Self, SettingsError> {
		SettingsBuilder::standard(config_path)?.build()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_priority_not_insertion_order_decides() {
		let settings: Settings = SettingsBuilder::new()
			.add_source(EnvSource::sitemaker().with_vars([("SITEMAKER_EXPORT__LANG", "nb")]))
			.add_source(DefaultSource::new().with_value("export", json!({ "lang": "en", "minify": true })))
			.build()
			.unwrap();

		assert_eq!(settings.export.lang, "nb");
		assert!(settings.export.minify);
	}

	#[rstest]
	fn test_empty_builder_yields_defaults() {
		let settings: Settings = SettingsBuilder::new().build().unwrap();

		assert_eq!(settings, Settings::default());
	}

	#[rstest]
	fn test_wrong_type_is_invalid() {
		let result: Result<Settings, _> = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("preview", json!({ "reveal": "sometimes" })))
			.build();

		assert!(matches!(result, Err(SettingsError::Invalid(_))));
	}
}
