//! Free text to brief patch.

use serde_json::Value;
use sitemaker_core::{BriefPatch, Industry};

use crate::name::extract_name;
use crate::rules::{ACCENT, ANIMATION, GOAL, INDUSTRY, MUST_HAVE, NEUTRAL};

/// Inputs longer than this many chars are truncated before matching.
pub const MAX_PROMPT_CHARS: usize = 4096;

/// Interprets a free-text business description as a brief patch.
///
/// Returns `None` for empty or whitespace-only input. Otherwise the patch
/// always carries `brand.industry` (falling back to `generic`); every other
/// field is set only when a rule matched. Deterministic and total.
///
/// ```rust
/// use sitemaker_prompt::interpret;
///
/// let patch = interpret("a law firm named Harbor & Sage").unwrap();
/// assert_eq!(patch.get(&["brand", "industry"]).unwrap(), "law");
/// assert_eq!(patch.get(&["brand", "name"]).unwrap(), "Harbor & Sage");
/// assert!(interpret("   ").is_none());
/// ```
pub fn interpret(text: &str) -> Option<BriefPatch> {
	if text.trim().is_empty() {
		return None;
	}

	let text = truncate(text, MAX_PROMPT_CHARS);
	let industry = INDUSTRY.first_match(text).unwrap_or(Industry::Generic);
	let mut patch = BriefPatch::new().set(&["brand", "industry"], industry.as_str());

	if let Some(name) = extract_name(text) {
		patch.insert(&["brand", "name"], name);
	}
	if let Some(level) = ANIMATION.first_match(text) {
		patch.insert(&["theme", "animationLevel"], level.as_str());
	}
	if let Some(accent) = ACCENT.first_match(text) {
		patch.insert(&["brand", "colors", "accent"], accent);
	}
	if let Some(neutral) = NEUTRAL.first_match(text) {
		patch.insert(&["brand", "colors", "neutral"], neutral);
	}
	if let Some(goal) = GOAL.first_match(text) {
		patch.insert(&["content", "hero", "primaryCta"], goal);
	}
	for key in MUST_HAVE.all_matches(text) {
		patch.insert(&["pages", "enabledByKey", key], Value::Bool(true));
	}

	tracing::debug!(industry = industry.as_str(), patch = %patch.as_value(), "interpreted prompt");
	Some(patch)
}

fn truncate(text: &str, max_chars: usize) -> &str {
	match text.char_indices().nth(max_chars) {
		Some((index, _)) => &text[..index],
		None => text,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_law_firm_named() {
		let patch = interpret("law firm named Harbor & Sage").unwrap();

		assert_eq!(
			patch.into_value(),
			json!({ "brand": { "industry": "law", "name": "Harbor & Sage" } })
		);
	}

	#[rstest]
	fn test_unmatched_text_is_generic_only() {
		let patch = interpret("something nice").unwrap();

		assert_eq!(
			patch.into_value(),
			json!({ "brand": { "industry": "generic" } })
		);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\n\t")]
	fn test_blank_input_is_none(#[case] text: &str) {
		assert!(interpret(text).is_none());
	}

	#[rstest]
	fn test_every_bucket() {
		let patch = interpret(
			"A dark, playful fitness studio called Pulse Lab with energetic motion. \
			 Visitors should book a session; show pricing and reviews.",
		)
		.unwrap();

		assert_eq!(
			patch.into_value(),
			json!({
				"brand": {
					"industry": "gym",
					"name": "Pulse Lab",
					"colors": { "accent": "#22C55E", "neutral": "#0B1220" }
				},
				"theme": { "animationLevel": "high" },
				"content": { "hero": { "primaryCta": "Book appointment" } },
				"pages": { "enabledByKey": { "pricing": true, "testimonials": true } }
			})
		);
	}

	#[rstest]
	#[case("calm minimal software", "#0EA5E9")]
	#[case("bold and warm", "#F97316")]
	fn test_accent(#[case] text: &str, #[case] expected: &str) {
		let patch = interpret(text).unwrap();

		assert_eq!(patch.get(&["brand", "colors", "accent"]).unwrap(), expected);
	}

	#[rstest]
	#[case("free consultations", "Consultation")]
	#[case("online appointment", "Book appointment")]
	#[case("start a free trial", "Start demo")]
	fn test_goal(#[case] text: &str, #[case] expected: &str) {
		let patch = interpret(text).unwrap();

		assert_eq!(
			patch.get(&["content", "hero", "primaryCta"]).unwrap(),
			expected
		);
	}

	#[rstest]
	fn test_keywords_past_the_limit_are_ignored() {
		let text = format!("{} law firm", "a".repeat(MAX_PROMPT_CHARS));

		let patch = interpret(&text).unwrap();

		assert_eq!(patch.get(&["brand", "industry"]).unwrap(), "generic");
	}

	#[rstest]
	fn test_truncate_respects_char_boundaries() {
		let text = "ø".repeat(10);

		assert_eq!(truncate(&text, 3), "øøø");
		assert_eq!(truncate("abc", 10), "abc");
	}
}
