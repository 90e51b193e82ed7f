//! Action events and parameter key normalization.

use std::collections::BTreeMap;

use sitemaker_pages::ActionBinding;

/// One interaction: an action name and its parameters, keyed in camelCase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
	/// Action name.
	pub name: String,
	/// Parameters with normalized keys.
	pub parameters: BTreeMap<String, String>,
}

impl ActionEvent {
	/// Builds an event, normalizing every parameter key.
	pub fn new<'a>(
		name: impl Into<String>,
		params: impl IntoIterator<Item = (&'a String, &'a String)>,
	) -> Self {
		Self {
			name: name.into(),
			parameters: params
				.into_iter()
				.map(|(key, value)| (normalize_param_key(key), value.clone()))
				.collect(),
		}
	}

	/// Builds the event an element's binding describes.
	pub fn from_binding(binding: &ActionBinding) -> Self {
		Self::new(binding.name.clone(), &binding.params)
	}

	/// The parameter `key` (camelCase), if present.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.parameters.get(key).map(String::as_str)
	}

	/// The parameter `key`, or `default` when absent or blank.
	pub fn param_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.param(key)
			.map(str::trim)
			.filter(|value| !value.is_empty())
			.unwrap_or(default)
	}
}

/// Converts an element parameter key to the payload key.
///
/// An optional `data-` prefix is stripped, then hyphen-case becomes
/// camelCase: `plan-name` and `data-plan-name` both become `planName`.
/// Empty segments from doubled or trailing hyphens are skipped.
pub fn normalize_param_key(key: &str) -> String {
	let key = key.strip_prefix("data-").unwrap_or(key);
	let mut result = String::with_capacity(key.len());
	let mut capitalize_next = false;

	for ch in key.chars() {
		if ch == '-' {
			capitalize_next = !result.is_empty();
		} else if capitalize_next {
			result.extend(ch.to_uppercase());
			capitalize_next = false;
		} else {
			result.push(ch);
		}
	}

	result
}
