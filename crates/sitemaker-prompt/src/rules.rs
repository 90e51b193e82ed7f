//! Keyword rule tables.
//!
//! Every bucket the interpreter fills is one ordered table of
//! `(pattern, value)` rows. Patterns are case-insensitive and anchored on
//! word boundaries. Single-valued buckets take the first matching row;
//! the must-have bucket takes every matching row.

use std::sync::LazyLock;

use regex::Regex;
use sitemaker_core::Industry;
use sitemaker_core::theme::AnimationLevel;

/// Accent for "bright", "vivid" or "playful" descriptions.
pub const BRIGHT_ACCENT: &str = "#22C55E";
/// Accent for "calm", "minimal" or "serene" descriptions.
pub const CALM_ACCENT: &str = "#0EA5E9";
/// Accent for "bold" or "warm" descriptions.
pub const WARM_ACCENT: &str = "#F97316";
/// Neutral background for "dark" descriptions.
pub const DARK_NEUTRAL: &str = "#0B1220";

/// A compiled, ordered rule table.
pub struct RuleTable<T: 'static> {
	rules: Vec<(Regex, T)>,
}

impl<T: Copy> RuleTable<T> {
	fn compile(name: &str, rows: &[(&str, T)]) -> Self {
		let rules = rows
			.iter()
			.map(|(pattern, value)| {
				let regex = Regex::new(&format!(r"(?i)\b(?:{pattern})\b"))
					.unwrap_or_else(|err| panic!("{name}: invalid regex pattern {pattern:?}: {err}"));
				(regex, *value)
			})
			.collect();
		Self { rules }
	}

	/// The value of the first row whose pattern occurs in `text`.
	pub fn first_match(&self, text: &str) -> Option<T> {
		self.rules
			.iter()
			.find(|(regex, _)| regex.is_match(text))
			.map(|(_, value)| *value)
	}

	/// The values of every matching row, in table order.
	pub fn all_matches(&self, text: &str) -> Vec<T> {
		self.rules
			.iter()
			.filter(|(regex, _)| regex.is_match(text))
			.map(|(_, value)| *value)
			.collect()
	}

	/// Number of rows.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Whether the table has no rows.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

/// Industry keywords, checked in order; the first match wins.
pub static INDUSTRY: LazyLock<RuleTable<Industry>> = LazyLock::new(|| {
	RuleTable::compile(
		"INDUSTRY",
		&[
			(r"law|legal|attorneys?|lawyers?|advokat", Industry::Law),
			(
				r"clinics?|dentists?|dental|health|medical|doctors?|klinikk",
				Industry::Clinic,
			),
			(r"gyms?|fitness|coaching|personal trainers?|pt", Industry::Gym),
			(r"saas|software|platform|apps?", Industry::Saas),
		],
	)
});

/// Motion words mapped to an animation level.
pub static ANIMATION: LazyLock<RuleTable<AnimationLevel>> = LazyLock::new(|| {
	RuleTable::compile(
		"ANIMATION",
		&[
			(r"high|crazy|energetic|lots of motion", AnimationLevel::High),
			(r"medium|moderate", AnimationLevel::Medium),
			(r"low|subtle|gentle|no motion", AnimationLevel::Low),
		],
	)
});

/// Mood words mapped to an accent color.
pub static ACCENT: LazyLock<RuleTable<&'static str>> = LazyLock::new(|| {
	RuleTable::compile(
		"ACCENT",
		&[
			(r"bright|vivid|playful", BRIGHT_ACCENT),
			(r"calm|minimal|serene", CALM_ACCENT),
			(r"bold|warm", WARM_ACCENT),
		],
	)
});

/// Words that switch the neutral background to the dark palette.
pub static NEUTRAL: LazyLock<RuleTable<&'static str>> =
	LazyLock::new(|| RuleTable::compile("NEUTRAL", &[(r"dark", DARK_NEUTRAL)]));

/// Conversion goals mapped to a hero call-to-action label.
pub static GOAL: LazyLock<RuleTable<&'static str>> = LazyLock::new(|| {
	RuleTable::compile(
		"GOAL",
		&[
			(r"consult\w*", "Consultation"),
			(r"book(?:ing|ings|s)?|appointments?", "Book appointment"),
			(r"demos?|trials?", "Start demo"),
		],
	)
});

/// Requested sections mapped to their `pages.enabledByKey` key.
pub static MUST_HAVE: LazyLock<RuleTable<&'static str>> = LazyLock::new(|| {
	RuleTable::compile(
		"MUST_HAVE",
		&[
			(r"pricing|prices|shop|store", "pricing"),
			(r"contact", "contact"),
			(r"faqs?|questions", "faq"),
			(r"gallery|portfolio|photos?", "gallery"),
			(r"testimonials?|reviews?", "testimonials"),
		],
	)
});

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("We are a law firm", Some(Industry::Law))]
	#[case("Family LAWYERS in Oslo", Some(Industry::Law))]
	#[case("advokat i Bergen", Some(Industry::Law))]
	#[case("a dental clinic", Some(Industry::Clinic))]
	#[case("our Klinikk", Some(Industry::Clinic))]
	#[case("personal trainer studio", Some(Industry::Gym))]
	#[case("PT sessions", Some(Industry::Gym))]
	#[case("a SaaS platform", Some(Industry::Saas))]
	#[case("mobile apps", Some(Industry::Saas))]
	#[case("a bakery", None)]
	// Word boundaries: none of these contain a keyword on its own
	#[case("flawless happy apples", None)]
	#[case("optimal output", None)]
	fn test_industry_table(#[case] text: &str, #[case] expected: Option<Industry>) {
		assert_eq!(INDUSTRY.first_match(text), expected);
	}

	#[rstest]
	fn test_industry_first_row_wins() {
		// Both law and saas keywords; law comes first in the table
		assert_eq!(
			INDUSTRY.first_match("legal software"),
			Some(Industry::Law)
		);
	}

	#[rstest]
	#[case("crazy animations", Some(AnimationLevel::High))]
	#[case("lots of motion please", Some(AnimationLevel::High))]
	#[case("moderate movement", Some(AnimationLevel::Medium))]
	#[case("subtle and gentle", Some(AnimationLevel::Low))]
	#[case("no motion at all", Some(AnimationLevel::Low))]
	#[case("motion", None)]
	fn test_animation_table(#[case] text: &str, #[case] expected: Option<AnimationLevel>) {
		assert_eq!(ANIMATION.first_match(text), expected);
	}

	#[rstest]
	fn test_must_have_collects_every_match() {
		assert_eq!(
			MUST_HAVE.all_matches("reviews, a photo gallery, contact form and pricing"),
			vec!["pricing", "contact", "gallery", "testimonials"]
		);
	}

	#[rstest]
	fn test_tables_are_populated() {
		assert_eq!(INDUSTRY.len(), 4);
		assert!(!NEUTRAL.is_empty());
	}
}
