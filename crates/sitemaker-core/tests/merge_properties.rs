//! Merge and theme property tests
//!
//! Property-based tests for the laws the configuration layer relies on:
//! merge never loses unrelated keys, applying a patch twice is the same as
//! applying it once, and token derivation is total.

use proptest::prelude::*;
use serde_json::{Value, json};
use sitemaker_core::{Brief, BriefPatch, ThemeKnobs, derive, merge};

// ============================================================================
// Strategies
// ============================================================================

fn text() -> impl Strategy<Value = String> {
	"[A-Za-z0-9 &'.-]{0,24}"
}

fn color() -> impl Strategy<Value = String> {
	"#[0-9A-F]{6}"
}

/// Patches touching a random subset of well-typed leaf paths.
fn patch() -> impl Strategy<Value = BriefPatch> {
	(
		prop::option::of(text()),
		prop::option::of(text()),
		prop::option::of(color()),
		prop::option::of(prop::sample::select(vec!["law", "clinic", "saas", "gym", "bakery"])),
		prop::option::of(prop::collection::vec(text(), 0..4)),
		prop::option::of(prop::sample::select(vec!["pricing", "gallery", "services", "faq"])),
	)
		.prop_map(|(name, tagline, accent, industry, locations, toggled)| {
			let mut patch = BriefPatch::new();
			if let Some(name) = name {
				patch.insert(&["brand", "name"], name);
			}
			if let Some(tagline) = tagline {
				patch.insert(&["brand", "tagline"], tagline);
			}
			if let Some(accent) = accent {
				patch.insert(&["brand", "colors", "accent"], accent);
			}
			if let Some(industry) = industry {
				patch.insert(&["brand", "industry"], industry);
			}
			if let Some(locations) = locations {
				patch.insert(&["brand", "locations"], json!(locations));
			}
			if let Some(key) = toggled {
				patch.insert(&["pages", "enabledByKey", key], true);
			}
			patch
		})
}

/// Arbitrary JSON, including shapes that make no sense for a Brief.
fn junk() -> impl Strategy<Value = Value> {
	let leaf = prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::from),
		any::<i64>().prop_map(Value::from),
		text().prop_map(Value::from),
	];
	leaf.prop_recursive(3, 24, 4, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
			prop::collection::btree_map(
				prop::sample::select(vec![
					"brand", "theme", "pages", "content", "name", "colors", "order",
					"enabledByKey", "baseSize", "hero",
				])
				.prop_map(str::to_string),
				inner,
				0..4,
			)
			.prop_map(|map| Value::Object(map.into_iter().collect())),
		]
	})
}

// ============================================================================
// Property-Based Tests: merge
// ============================================================================

proptest! {
	/// Applying the same patch twice changes nothing the second time.
	#[test]
	fn prop_merge_is_idempotent(patch in patch()) {
		let once = merge(&Brief::default(), &patch);
		let twice = merge(&once, &patch);

		prop_assert_eq!(once, twice);
	}

	/// An accent-only patch never touches the other colors.
	#[test]
	fn prop_accent_patch_keeps_siblings(accent in color()) {
		let base = Brief::default();
		let patch = BriefPatch::new().set(&["brand", "colors", "accent"], accent.clone());

		let next = merge(&base, &patch);

		prop_assert_eq!(&next.brand.colors.accent, &accent);
		prop_assert_eq!(&next.brand.colors.primary, &base.brand.colors.primary);
		prop_assert_eq!(&next.brand.colors.neutral, &base.brand.colors.neutral);
		prop_assert_eq!(&next.theme, &base.theme);
		prop_assert_eq!(&next.pages, &base.pages);
	}

	/// Sequential application of record-only patches equals applying their composition.
	#[test]
	fn prop_sequential_merge_matches_composed_patch(first in patch(), second in patch()) {
		let base = Brief::default();

		let sequential = merge(&merge(&base, &first), &second);
		let composed = merge(&base, &first.clone().merged(&second));

		prop_assert_eq!(sequential, composed);
	}

	/// Arbitrary JSON never makes merge panic.
	#[test]
	fn prop_merge_accepts_any_json(raw in junk()) {
		let next = merge(&Brief::default(), &BriefPatch::from_value(raw));

		prop_assert!(next.to_value().is_object());
	}
}

// ============================================================================
// Property-Based Tests: derive
// ============================================================================

proptest! {
	/// The type scale is strictly increasing for any knob values.
	#[test]
	fn prop_type_scale_strictly_increasing(
		base_size in prop_oneof![any::<f64>(), 0.0f64..200.0],
		scale in prop_oneof![any::<f64>(), 0.0f64..3.0],
	) {
		let knobs = ThemeKnobs { base_size, scale, ..ThemeKnobs::default() };

		let tokens = derive(&knobs);

		prop_assert!(tokens.type_scale.windows(2).all(|pair| pair[0] < pair[1]));
		prop_assert!(tokens.radius <= 64);
		prop_assert!(tokens.container_width >= 320);
	}

	/// Derivation is a pure function of its input.
	#[test]
	fn prop_derive_is_deterministic(base_size in 1.0f64..64.0, scale in 1.0f64..2.0) {
		let knobs = ThemeKnobs { base_size, scale, ..ThemeKnobs::default() };

		prop_assert_eq!(derive(&knobs), derive(&knobs));
	}
}
