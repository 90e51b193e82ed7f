//! Industry presets.
//!
//! A fixed lookup table that gives the compiler sensible navigation, calls to
//! action and placeholder copy for the handful of industries it knows about.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An industry the compiler has presets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
	/// Law firms.
	Law,
	/// Clinics and other health practices.
	Clinic,
	/// Software products.
	Saas,
	/// Gyms and personal training.
	Gym,
	/// Anything else.
	#[default]
	Generic,
}

impl Industry {
	/// All industries, in table order.
	pub const ALL: [Industry; 5] = [
		Industry::Law,
		Industry::Clinic,
		Industry::Saas,
		Industry::Gym,
		Industry::Generic,
	];

	/// Parses an industry label case-insensitively; unknown labels map to
	/// [`Industry::Generic`].
	pub fn parse(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"law" => Self::Law,
			"clinic" => Self::Clinic,
			"saas" => Self::Saas,
			"gym" => Self::Gym,
			_ => Self::Generic,
		}
	}

	/// The wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Law => "law",
			Self::Clinic => "clinic",
			Self::Saas => "saas",
			Self::Gym => "gym",
			Self::Generic => "generic",
		}
	}

	/// The preset for this industry.
	pub fn preset(self) -> &'static IndustryPreset {
		match self {
			Self::Law => &LAW,
			Self::Clinic => &CLINIC,
			Self::Saas => &SAAS,
			Self::Gym => &GYM,
			Self::Generic => &GENERIC,
		}
	}
}

impl fmt::Display for Industry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Navigation, calls to action and placeholder copy for one industry.
#[derive(Debug, PartialEq, Eq)]
pub struct IndustryPreset {
	/// Navigation labels.
	pub nav: &'static [&'static str],
	/// Hero primary call to action.
	pub primary_cta: &'static str,
	/// Hero secondary call to action, if the industry has one.
	pub secondary_cta: Option<&'static str>,
	/// Placeholder service cards as `(title, text)`.
	pub services: &'static [(&'static str, &'static str)],
	/// Placeholder questions as `(question, answer)`.
	pub faq: &'static [(&'static str, &'static str)],
}

static LAW: IndustryPreset = IndustryPreset {
	nav: &["Home", "Services", "Team", "Contact"],
	primary_cta: "Book a consultation",
	secondary_cta: Some("Our practice areas"),
	services: &[
		("Business law", "Contracts, companies and commercial disputes."),
		("Employment law", "Advice for employers and employees alike."),
		("Property", "Purchases, leases and neighbour disputes."),
	],
	faq: &[
		(
			"Is the first consultation free?",
			"The first 30 minutes are always free of charge.",
		),
		(
			"Do you offer fixed fees?",
			"Most matters can be handled for an agreed fixed fee.",
		),
	],
};

static CLINIC: IndustryPreset = IndustryPreset {
	nav: &["Home", "Services", "Locations", "Contact"],
	primary_cta: "Book appointment",
	secondary_cta: Some("Find a clinic"),
	services: &[
		("General check-up", "A thorough examination with a clear plan."),
		("Preventive care", "Cleaning, screening and advice."),
		("Emergency appointments", "Same-day help when it hurts."),
	],
	faq: &[
		(
			"Do I need a referral?",
			"No, you can book an appointment directly.",
		),
		(
			"Can I cancel my appointment?",
			"Yes, free of charge up to 24 hours before.",
		),
	],
};

static SAAS: IndustryPreset = IndustryPreset {
	nav: &["Home", "Product", "Pricing", "Contact"],
	primary_cta: "Start free trial",
	secondary_cta: Some("See pricing"),
	services: &[
		("Onboarding", "We help you get set up in days, not weeks."),
		("Integrations", "Connect the tools your team already uses."),
		("Support", "Real people, fast answers."),
	],
	faq: &[
		(
			"Is there a free trial?",
			"Yes, every plan starts with a 14-day free trial.",
		),
		(
			"Can I cancel at any time?",
			"Yes, there is no lock-in on any plan.",
		),
	],
};

static GYM: IndustryPreset = IndustryPreset {
	nav: &["Home", "Classes", "Pricing", "Contact"],
	primary_cta: "Book a free session",
	secondary_cta: Some("View classes"),
	services: &[
		("Personal training", "One-to-one sessions built around your goals."),
		("Group classes", "Strength, cardio and mobility every day."),
		("Nutrition coaching", "Simple habits that make training pay off."),
	],
	faq: &[
		(
			"Do I need experience?",
			"No, every programme starts from where you are today.",
		),
		(
			"Is there a binding period?",
			"Memberships can be paused or cancelled monthly.",
		),
	],
};

static GENERIC: IndustryPreset = IndustryPreset {
	nav: &["Home", "Products", "About", "Contact"],
	primary_cta: "Get in touch",
	secondary_cta: None,
	services: &[
		("Consulting", "Tell us what you need and we will plan it with you."),
		("Delivery", "A dedicated team that ships on time."),
		("Support", "We stay around after launch."),
	],
	faq: &[
		(
			"How do we get started?",
			"Send us a message and we will reply within one business day.",
		),
		(
			"What does it cost?",
			"Every project gets a transparent estimate up front.",
		),
	],
};
