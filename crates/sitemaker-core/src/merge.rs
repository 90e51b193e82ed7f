//! Recursive merge of partial patches into a [`Brief`].
//!
//! When both sides are records they are merged key by key; in every other
//! case the patch value replaces the base value wholesale. Lists are never
//! merged element-wise.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::brief::Brief;
use crate::exception::{Error, Result};

/// Merges `patch` into `base` in place.
///
/// Keys absent from `patch` are left untouched. A `null` in the patch
/// replaces the base value like any other non-record value.
///
/// ```rust
/// use serde_json::json;
/// use sitemaker_core::deep_merge;
///
/// let mut base = json!({"a": {"x": 1, "y": 2}, "list": [1, 2]});
/// deep_merge(&mut base, &json!({"a": {"x": 9}, "list": [3]}));
///
/// assert_eq!(base, json!({"a": {"x": 9, "y": 2}, "list": [3]}));
/// ```
pub fn deep_merge(base: &mut Value, patch: &Value) {
	match (base, patch) {
		(Value::Object(base), Value::Object(patch)) => {
			for (key, incoming) in patch {
				match base.get_mut(key) {
					Some(existing) => deep_merge(existing, incoming),
					None => {
						base.insert(key.clone(), incoming.clone());
					}
				}
			}
		}
		(base, patch) => *base = patch.clone(),
	}
}

/// Returns a new Brief with `patch` applied to `base`.
///
/// Never fails. A patch whose root is not a record is ignored; values of the
/// wrong shape are replaced, then fall back to their defaults while the
/// result is read back.
pub fn merge(base: &Brief, patch: &BriefPatch) -> Brief {
	if !patch.0.is_object() {
		tracing::warn!(patch = %patch.0, "ignoring patch whose root is not a record");
		return base.clone();
	}
	let mut merged = base.to_value();
	deep_merge(&mut merged, &patch.0);
	Brief::from_value(merged)
}

/// A partial Brief: any subset of its keys, at any depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BriefPatch(Value);

impl Default for BriefPatch {
	fn default() -> Self {
		Self(Value::Object(Map::new()))
	}
}

impl BriefPatch {
	/// Creates an empty patch.
	pub fn new() -> Self {
		Self::default()
	}

	/// Wraps an arbitrary value. Non-record values are accepted and later
	/// ignored by [`merge`].
	pub fn from_value(value: Value) -> Self {
		Self(value)
	}

	/// Parses a patch from JSON text. The root must be a record.
	pub fn from_json(json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json)?;
		if !value.is_object() {
			return Err(Error::InvalidPatch(
				"a patch must be a JSON object".to_string(),
			));
		}
		Ok(Self(value))
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn set(mut self, path: &[&str], value: impl Into<Value>) -> Self {
		self.insert(path, value);
		self
	}

	/// Writes `value` at `path`, creating intermediate records and replacing
	/// any non-record found on the way. An empty path replaces the whole patch.
	pub fn insert(&mut self, path: &[&str], value: impl Into<Value>) {
		let Some((last, parents)) = path.split_last() else {
			self.0 = value.into();
			return;
		};
		let mut cursor = &mut self.0;
		for segment in parents {
			cursor = ensure_object(cursor)
				.entry(segment.to_string())
				.or_insert_with(|| Value::Object(Map::new()));
		}
		ensure_object(cursor).insert(last.to_string(), value.into());
	}

	/// Reads the value at `path`, if any.
	pub fn get(&self, path: &[&str]) -> Option<&Value> {
		path.iter()
			.try_fold(&self.0, |cursor, segment| cursor.get(segment))
	}

	/// Whether applying this patch would change nothing.
	pub fn is_empty(&self) -> bool {
		self.0.as_object().is_some_and(Map::is_empty)
	}

	/// Composes two patches; keys of `other` win.
	pub fn merged(mut self, other: &BriefPatch) -> Self {
		deep_merge(&mut self.0, &other.0);
		self
	}

	/// Borrows the underlying value.
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Unwraps the underlying value.
	pub fn into_value(self) -> Value {
		self.0
	}
}

impl From<Value> for BriefPatch {
	fn from(value: Value) -> Self {
		Self::from_value(value)
	}
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
	if !value.is_object() {
		*value = Value::Object(Map::new());
	}
	match value {
		Value::Object(map) => map,
		_ => unreachable!("value was just replaced by an object"),
	}
}
