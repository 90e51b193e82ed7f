//! The Brief: the root, user-editable configuration record.
//!
//! Every field has a total default and deserialization is lenient: a field
//! holding null or a value of the wrong shape is replaced instead of failing
//! the whole document. Brand strings fall back to their own defaults; other
//! fields fall back to an empty value. Downstream stages (token derivation and
//! compilation) treat empty values as "use the default", so a Brief can
//! never be rejected for what it is missing.
//!
//! Content records use `Option` for every field: `None` means "let the
//! compiler supply placeholder copy", while `Some(vec![])` is an explicit
//! empty list that is kept as-is.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::exception::{Error, Result};
use crate::merge::BriefPatch;

/// Brand name used when none is configured.
pub const DEFAULT_BRAND_NAME: &str = "Your brand";
/// Tagline used when none is configured.
pub const DEFAULT_TAGLINE: &str = "A short value proposition lives here.";
/// Default primary (ink) color.
pub const DEFAULT_PRIMARY: &str = "#0F172A";
/// Default accent color.
pub const DEFAULT_ACCENT: &str = "#0EA5E9";
/// Default neutral (background) color.
pub const DEFAULT_NEUTRAL: &str = "#F6F7F9";
/// Industry used when none is configured.
pub const DEFAULT_INDUSTRY: &str = "generic";

/// Every section key the compiler knows, in default page order.
pub const SECTION_KEYS: [&str; 10] = [
	"header",
	"hero",
	"features",
	"services",
	"gallery",
	"testimonials",
	"pricing",
	"faq",
	"contact",
	"footer",
];

const ENABLED_BY_DEFAULT: [&str; 7] = [
	"header",
	"hero",
	"features",
	"testimonials",
	"faq",
	"contact",
	"footer",
];

/// The root configuration object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brief {
	/// Identity: name, tagline, colors, imagery, industry.
	#[serde(deserialize_with = "lenient")]
	pub brand: BrandConfig,
	/// Raw theme knobs, see [`crate::theme::derive`].
	#[serde(deserialize_with = "lenient")]
	pub theme: ThemeKnobs,
	/// Layout preferences.
	#[serde(deserialize_with = "lenient")]
	pub layout: LayoutConfig,
	/// Which sections are shown, and in which order.
	#[serde(deserialize_with = "lenient")]
	pub pages: PagesConfig,
	/// Per-section content payloads.
	#[serde(deserialize_with = "lenient")]
	pub content: ContentConfig,
}

impl Brief {
	/// Parses a Brief from JSON text.
	///
	/// Fails only when the text is not JSON or is not a JSON object; any
	/// malformed field inside the object falls back to its default.
	pub fn from_json(json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json)?;
		if !value.is_object() {
			return Err(Error::InvalidPatch(
				"a brief must be a JSON object".to_string(),
			));
		}
		Ok(Self::from_value(value))
	}

	/// Builds a Brief from an already-parsed value. Never fails.
	pub fn from_value(value: Value) -> Self {
		match serde_json::from_value(value) {
			Ok(brief) => brief,
			Err(err) => {
				tracing::warn!(error = %err, "brief is not an object, using the default brief");
				Self::default()
			}
		}
	}

	/// Returns the Brief as a JSON value.
	pub fn to_value(&self) -> Value {
		serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
	}

	/// Serializes the Brief to pretty-printed JSON.
	pub fn to_json_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Returns a new Brief with `patch` merged in.
	pub fn apply(&self, patch: &BriefPatch) -> Self {
		crate::merge::merge(self, patch)
	}
}

/// Brand identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandConfig {
	/// Company name, shown as the hero title.
	#[serde(deserialize_with = "lenient_brand_name")]
	pub name: String,
	/// Short value proposition.
	#[serde(deserialize_with = "lenient_tagline")]
	pub tagline: String,
	/// Office or clinic locations.
	#[serde(deserialize_with = "lenient_strings")]
	pub locations: Vec<String>,
	/// Brand palette.
	#[serde(deserialize_with = "lenient")]
	pub colors: BrandColors,
	/// Background image for the hero section.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub hero_image: Option<String>,
	/// Logo shown in the header.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub logo_url: Option<String>,
	/// Free-form industry label; see [`crate::Industry::parse`].
	#[serde(deserialize_with = "lenient_industry")]
	pub industry: String,
}

impl Default for BrandConfig {
	fn default() -> Self {
		Self {
			name: DEFAULT_BRAND_NAME.to_string(),
			tagline: DEFAULT_TAGLINE.to_string(),
			locations: Vec::new(),
			colors: BrandColors::default(),
			hero_image: None,
			logo_url: None,
			industry: DEFAULT_INDUSTRY.to_string(),
		}
	}
}

/// The three brand colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandColors {
	/// Ink color used for headings and the hero gradient.
	#[serde(deserialize_with = "lenient_primary")]
	pub primary: String,
	/// Accent color used for calls to action.
	#[serde(deserialize_with = "lenient_accent")]
	pub accent: String,
	/// Neutral background color.
	#[serde(deserialize_with = "lenient_neutral")]
	pub neutral: String,
}

impl Default for BrandColors {
	fn default() -> Self {
		Self {
			primary: DEFAULT_PRIMARY.to_string(),
			accent: DEFAULT_ACCENT.to_string(),
			neutral: DEFAULT_NEUTRAL.to_string(),
		}
	}
}

impl BrandColors {
	/// Returns the palette with empty entries replaced by their defaults.
	pub fn resolved(&self) -> Self {
		Self {
			primary: non_empty_or(&self.primary, DEFAULT_PRIMARY),
			accent: non_empty_or(&self.accent, DEFAULT_ACCENT),
			neutral: non_empty_or(&self.neutral, DEFAULT_NEUTRAL),
		}
	}
}

/// Raw theme knobs. See [`crate::theme::derive`] for how they are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeKnobs {
	/// Body text size in pixels.
	#[serde(deserialize_with = "lenient")]
	pub base_size: f64,
	/// Ratio between consecutive type scale steps.
	#[serde(deserialize_with = "lenient")]
	pub scale: f64,
	/// Corner radius in pixels.
	#[serde(deserialize_with = "lenient")]
	pub radius: f64,
	/// Maximum content width in pixels.
	#[serde(deserialize_with = "lenient")]
	pub container: f64,
	/// One of `soft`, `outline`, `minimal`.
	#[serde(deserialize_with = "lenient")]
	pub card_style: String,
	/// One of `low`, `medium`, `high`.
	#[serde(deserialize_with = "lenient")]
	pub animation_level: String,
}

impl Default for ThemeKnobs {
	fn default() -> Self {
		Self {
			base_size: 16.0,
			scale: 1.25,
			radius: 16.0,
			container: 1200.0,
			card_style: "soft".to_string(),
			animation_level: "medium".to_string(),
		}
	}
}

/// Layout preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
	/// Navigation labels. Empty means "use the industry preset".
	#[serde(deserialize_with = "lenient_strings")]
	pub nav_items: Vec<String>,
}

/// Section visibility and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagesConfig {
	/// Per-key visibility flag. Keys absent from the map are disabled.
	#[serde(deserialize_with = "lenient_flags")]
	pub enabled_by_key: BTreeMap<String, bool>,
	/// Section keys in display order. Duplicates are allowed.
	#[serde(deserialize_with = "lenient_order")]
	pub order: Vec<String>,
}

impl Default for PagesConfig {
	fn default() -> Self {
		Self {
			enabled_by_key: default_enabled_by_key(),
			order: default_order(),
		}
	}
}

impl PagesConfig {
	/// Returns whether `key` is switched on.
	pub fn is_enabled(&self, key: &str) -> bool {
		self.enabled_by_key.get(key).copied().unwrap_or(false)
	}

	/// Iterates the enabled keys in display order, duplicates included.
	pub fn enabled_keys(&self) -> impl Iterator<Item = &str> {
		self.order
			.iter()
			.map(String::as_str)
			.filter(|key| self.is_enabled(key))
	}
}

fn default_enabled_by_key() -> BTreeMap<String, bool> {
	SECTION_KEYS
		.iter()
		.map(|key| (key.to_string(), ENABLED_BY_DEFAULT.contains(key)))
		.collect()
}

fn default_order() -> Vec<String> {
	SECTION_KEYS.iter().map(|key| key.to_string()).collect()
}

/// Per-section content. `None` lets the compiler supply placeholder copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
	/// Hero call-to-action labels and visual variant.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub hero: Option<HeroContent>,
	/// "What you'll get" cards.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub features: Option<ItemsContent>,
	/// Service cards, each with an enquiry link.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub services: Option<ItemsContent>,
	/// Image gallery.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub gallery: Option<GalleryContent>,
	/// Customer quotes.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub testimonials: Option<TestimonialsContent>,
	/// Pricing tiers.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub pricing: Option<PricingContent>,
	/// Questions and answers.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub faq: Option<FaqContent>,
	/// Contact details.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub contact: Option<ContactContent>,
}

/// Hero overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
	/// Visual variant, e.g. `gradient` or `image`.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub variant: Option<String>,
	/// Primary call-to-action label.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub primary_cta: Option<String>,
	/// Secondary call-to-action label.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub secondary_cta: Option<String>,
}

/// A titled list of cards, used by `features` and `services`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemsContent {
	/// Section heading.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub title: Option<String>,
	/// Cards.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub items: Option<Vec<ContentItem>>,
}

/// A single card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
	/// Card heading.
	#[serde(deserialize_with = "lenient")]
	pub title: String,
	/// Card body.
	#[serde(deserialize_with = "lenient")]
	pub text: String,
}

impl ContentItem {
	/// Creates a card.
	pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			text: text.into(),
		}
	}
}

/// Gallery content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
	/// Section heading.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub title: Option<String>,
	/// Image URLs.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub images: Option<Vec<String>>,
}

/// Testimonials content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
	/// Section heading.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub title: Option<String>,
	/// Quotes.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub quotes: Option<Vec<Quote>>,
}

/// A customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
	/// What was said.
	#[serde(deserialize_with = "lenient")]
	pub quote: String,
	/// Who said it.
	#[serde(deserialize_with = "lenient")]
	pub author: String,
}

impl Quote {
	/// Creates a quote.
	pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
		Self {
			quote: quote.into(),
			author: author.into(),
		}
	}
}

/// Pricing content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingContent {
	/// Section heading.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub title: Option<String>,
	/// Small print under the heading.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub note: Option<String>,
	/// Tiers.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub tiers: Option<Vec<PricingTier>>,
}

/// A pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTier {
	/// Tier name, also the `plan-name` parameter of its "Choose" button.
	#[serde(deserialize_with = "lenient")]
	pub name: String,
	/// Display price.
	#[serde(deserialize_with = "lenient")]
	pub price: String,
	/// Included items.
	#[serde(deserialize_with = "lenient_strings")]
	pub items: Vec<String>,
}

impl PricingTier {
	/// Creates a tier.
	pub fn new(
		name: impl Into<String>,
		price: impl Into<String>,
		items: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			name: name.into(),
			price: price.into(),
			items: items.into_iter().map(Into::into).collect(),
		}
	}
}

/// FAQ content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqContent {
	/// Section heading.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub title: Option<String>,
	/// Questions.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub items: Option<Vec<FaqItem>>,
}

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
	/// Question.
	#[serde(deserialize_with = "lenient")]
	pub q: String,
	/// Answer.
	#[serde(deserialize_with = "lenient")]
	pub a: String,
}

impl FaqItem {
	/// Creates a question.
	pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
		Self {
			q: q.into(),
			a: a.into(),
		}
	}
}

/// Contact content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
	/// Section heading.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub title: Option<String>,
	/// Contact email.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub email: Option<String>,
	/// Contact phone.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub phone: Option<String>,
	/// Locations; falls back to the brand locations.
	#[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
	pub locations: Option<Vec<String>>,
}

/// Returns `value` trimmed, or `fallback` when it is blank.
pub fn non_empty_or(value: &str, fallback: &str) -> String {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		fallback.to_string()
	} else {
		trimmed.to_string()
	}
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	let value = Value::deserialize(deserializer)?;
	if value.is_null() {
		return Ok(T::default());
	}
	match serde_json::from_value(value) {
		Ok(parsed) => Ok(parsed),
		Err(err) => {
			tracing::warn!(error = %err, "malformed brief field replaced by an empty value");
			Ok(T::default())
		}
	}
}

/// A string field that falls back to `fallback` when null or not a string.
fn lenient_string_or<'de, D>(deserializer: D, fallback: &str) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	match value {
		Value::String(text) => Ok(text),
		Value::Null => Ok(fallback.to_string()),
		other => {
			tracing::warn!(value = %other, "malformed brief field replaced by its default");
			Ok(fallback.to_string())
		}
	}
}

fn lenient_brand_name<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	lenient_string_or(deserializer, DEFAULT_BRAND_NAME)
}

fn lenient_tagline<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	lenient_string_or(deserializer, DEFAULT_TAGLINE)
}

fn lenient_industry<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	lenient_string_or(deserializer, DEFAULT_INDUSTRY)
}

fn lenient_primary<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	lenient_string_or(deserializer, DEFAULT_PRIMARY)
}

fn lenient_accent<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	lenient_string_or(deserializer, DEFAULT_ACCENT)
}

fn lenient_neutral<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	lenient_string_or(deserializer, DEFAULT_NEUTRAL)
}

fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(string_elements(&value).unwrap_or_default())
}

fn lenient_order<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(string_elements(&value).unwrap_or_else(|| {
		tracing::warn!("malformed page order replaced by the default order");
		default_order()
	}))
}

fn lenient_flags<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, bool>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	match value {
		Value::Object(map) => Ok(map
			.into_iter()
			.filter_map(|(key, flag)| flag.as_bool().map(|flag| (key, flag)))
			.collect()),
		_ => {
			tracing::warn!("malformed section flags replaced by the default flags");
			Ok(default_enabled_by_key())
		}
	}
}

/// Keeps the string elements of an array; `None` when `value` is not an array.
fn string_elements(value: &Value) -> Option<Vec<String>> {
	value.as_array().map(|items| {
		items
			.iter()
			.filter_map(|item| item.as_str().map(str::to_string))
			.collect()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_default_brief_enables_the_neutral_sections() {
		let brief = Brief::default();

		let enabled: Vec<&str> = brief.pages.enabled_keys().collect();

		assert_eq!(
			enabled,
			vec![
				"header",
				"hero",
				"features",
				"testimonials",
				"faq",
				"contact",
				"footer"
			]
		);
		assert!(!brief.pages.is_enabled("pricing"));
	}

	#[rstest]
	fn test_missing_fields_take_defaults() {
		let brief = Brief::from_json(r#"{"brand":{"name":"Acme"}}"#).unwrap();

		assert_eq!(brief.brand.name, "Acme");
		assert_eq!(brief.brand.tagline, DEFAULT_TAGLINE);
		assert_eq!(brief.theme, ThemeKnobs::default());
		assert_eq!(brief.pages, PagesConfig::default());
	}

	#[rstest]
	fn test_malformed_field_falls_back_without_failing() {
		let brief = Brief::from_value(json!({
			"brand": { "name": { "nested": true }, "tagline": "Still here" },
			"theme": "not-a-record",
		}));

		assert_eq!(brief.brand.name, DEFAULT_BRAND_NAME);
		assert_eq!(brief.brand.tagline, "Still here");
		assert_eq!(brief.theme, ThemeKnobs::default());
	}

	#[rstest]
	fn test_null_leaf_takes_the_field_default() {
		let brief = Brief::from_value(json!({
			"brand": {
				"name": "Acme",
				"tagline": null,
				"industry": 7,
				"colors": { "accent": null, "primary": "#111111" },
			}
		}));

		assert_eq!(brief.brand.name, "Acme");
		assert_eq!(brief.brand.tagline, DEFAULT_TAGLINE);
		assert_eq!(brief.brand.industry, DEFAULT_INDUSTRY);
		assert_eq!(brief.brand.colors.accent, DEFAULT_ACCENT);
		assert_eq!(brief.brand.colors.primary, "#111111");
	}

	#[rstest]
	fn test_non_bool_flags_are_dropped() {
		let brief = Brief::from_value(json!({
			"pages": { "enabledByKey": { "hero": true, "faq": "yes" } }
		}));

		assert!(brief.pages.is_enabled("hero"));
		assert!(!brief.pages.is_enabled("faq"));
		assert_eq!(brief.pages.order, default_order());
	}

	#[rstest]
	fn test_explicit_empty_list_is_preserved() {
		let brief = Brief::from_value(json!({ "content": { "features": { "items": [] } } }));

		let features = brief.content.features.unwrap();
		assert_eq!(features.items, Some(vec![]));
		assert_eq!(features.title, None);
	}

	#[rstest]
	fn test_from_json_rejects_non_objects() {
		assert!(matches!(
			Brief::from_json("[1, 2]"),
			Err(Error::InvalidPatch(_))
		));
		assert!(matches!(Brief::from_json("{"), Err(Error::Json(_))));
	}

	#[rstest]
	fn test_serialized_shape_uses_camel_case() {
		let value = Brief::default().to_value();

		assert!(value["pages"]["enabledByKey"].is_object());
		assert_eq!(value["theme"]["baseSize"], json!(16.0));
		assert!(value["content"].as_object().unwrap().is_empty());
		assert!(value["brand"].get("heroImage").is_none());
	}

	#[rstest]
	#[case("", DEFAULT_PRIMARY)]
	#[case("   ", DEFAULT_PRIMARY)]
	#[case(" #111 ", "#111")]
	fn test_resolved_colors(#[case] primary: &str, #[case] expected: &str) {
		let colors = BrandColors {
			primary: primary.to_string(),
			..BrandColors::default()
		};

		assert_eq!(colors.resolved().primary, expected);
	}
}
