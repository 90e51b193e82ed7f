//! Action bindings.
//!
//! An [`ActionBinding`] marks an interactive element with the name of the
//! action it triggers and its string parameters. The binding is carried on
//! the view tree as data; HTML output flattens it into `data-action` and
//! `data-<key>` attributes, but nothing ever parses those attributes back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The attribute carrying the action name.
pub const ACTION_ATTR: &str = "data-action";

/// Prefix of the attributes carrying action parameters.
pub const PARAM_ATTR_PREFIX: &str = "data-";

/// Opens the contact section.
pub const OPEN_CONTACT: &str = "open-contact";
/// Opens the booking modal.
pub const BOOK_CALL: &str = "book-call";
/// Opens the plan confirmation modal.
pub const SELECT_PLAN: &str = "select-plan";
/// Shows a toast.
pub const TOAST: &str = "toast";
/// Closes the modal.
pub const CLOSE_MODAL: &str = "close-modal";

/// An action marker on an interactive element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
	/// Action name, e.g. `select-plan`.
	pub name: String,
	/// Parameters keyed in hyphen-case, e.g. `plan-name`.
	#[serde(default)]
	pub params: BTreeMap<String, String>,
}

impl ActionBinding {
	/// Creates a binding without parameters.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			params: BTreeMap::new(),
		}
	}

	/// Adds a parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}

	/// The HTML attributes for this binding.
	pub fn to_attrs(&self) -> Vec<(String, String)> {
		let mut attrs = vec![(ACTION_ATTR.to_string(), self.name.clone())];
		attrs.extend(
			self.params
				.iter()
				.map(|(key, value)| (format!("{PARAM_ATTR_PREFIX}{key}"), value.clone())),
		);
		attrs
	}
}
