//! Section descriptors.
//!
//! A [`SectionDescriptor`] is a tagged union keyed by its JSON `type` field.
//! Types the compiler does not know, including ones arriving from serialized
//! documents, are kept as [`SectionDescriptor::Unknown`] so the renderer can
//! show a visible fallback instead of silently dropping them.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use sitemaker_core::{ContentItem, FaqItem, PricingTier, Quote};

use crate::site::NavItem;

const TYPE_KEY: &str = "type";

/// One section of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionDescriptor {
	/// Top bar with brand, navigation and a contact button.
	Header(HeaderSection),
	/// Title, tagline and calls to action.
	Hero(HeroSection),
	/// "What you'll get" cards.
	Features(ItemsSection),
	/// Service cards with enquiry links.
	Services(ItemsSection),
	/// Image grid.
	Gallery(GallerySection),
	/// Customer quotes.
	Testimonials(TestimonialsSection),
	/// Pricing tiers with "Choose" buttons.
	Pricing(PricingSection),
	/// Questions and answers.
	Faq(FaqSection),
	/// Contact details and form.
	Contact(ContactSection),
	/// Bottom bar.
	Footer(FooterSection),
	/// A section type this version does not know how to render.
	Unknown {
		/// The unrecognised section key.
		kind: String,
	},
}

impl SectionDescriptor {
	/// The `type` discriminant.
	pub fn kind(&self) -> &str {
		match self {
			Self::Header(_) => "header",
			Self::Hero(_) => "hero",
			Self::Features(_) => "features",
			Self::Services(_) => "services",
			Self::Gallery(_) => "gallery",
			Self::Testimonials(_) => "testimonials",
			Self::Pricing(_) => "pricing",
			Self::Faq(_) => "faq",
			Self::Contact(_) => "contact",
			Self::Footer(_) => "footer",
			Self::Unknown { kind } => kind,
		}
	}

	/// Whether this is the [`Unknown`](Self::Unknown) fallback.
	pub fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown { .. })
	}

	fn payload(&self) -> serde_json::Result<Value> {
		match self {
			Self::Header(section) => serde_json::to_value(section),
			Self::Hero(section) => serde_json::to_value(section),
			Self::Features(section) | Self::Services(section) => serde_json::to_value(section),
			Self::Gallery(section) => serde_json::to_value(section),
			Self::Testimonials(section) => serde_json::to_value(section),
			Self::Pricing(section) => serde_json::to_value(section),
			Self::Faq(section) => serde_json::to_value(section),
			Self::Contact(section) => serde_json::to_value(section),
			Self::Footer(section) => serde_json::to_value(section),
			Self::Unknown { .. } => Ok(Value::Object(Map::new())),
		}
	}

	fn from_tagged(kind: &str, payload: Value) -> serde_json::Result<Self> {
		Ok(match kind {
			"header" => Self::Header(serde_json::from_value(payload)?),
			"hero" => Self::Hero(serde_json::from_value(payload)?),
			"features" => Self::Features(serde_json::from_value(payload)?),
			"services" => Self::Services(serde_json::from_value(payload)?),
			"gallery" => Self::Gallery(serde_json::from_value(payload)?),
			"testimonials" => Self::Testimonials(serde_json::from_value(payload)?),
			"pricing" => Self::Pricing(serde_json::from_value(payload)?),
			"faq" => Self::Faq(serde_json::from_value(payload)?),
			"contact" => Self::Contact(serde_json::from_value(payload)?),
			"footer" => Self::Footer(serde_json::from_value(payload)?),
			other => Self::Unknown {
				kind: other.to_string(),
			},
		})
	}
}

impl Serialize for SectionDescriptor {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut value = self.payload().map_err(S::Error::custom)?;
		if let Value::Object(map) = &mut value {
			map.insert(TYPE_KEY.to_string(), Value::String(self.kind().to_string()));
		}
		value.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for SectionDescriptor {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let mut value = Value::deserialize(deserializer)?;
		let kind = match value.as_object_mut().and_then(|map| map.remove(TYPE_KEY)) {
			Some(Value::String(kind)) => kind,
			Some(_) => return Err(D::Error::custom("section `type` must be a string")),
			None => return Err(D::Error::missing_field(TYPE_KEY)),
		};
		Self::from_tagged(&kind, value).map_err(D::Error::custom)
	}
}

/// A call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaLink {
	/// Button text.
	pub label: String,
	/// Target anchor or URL.
	pub href: String,
}

impl CtaLink {
	/// Creates a link.
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
		}
	}
}

/// `header` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSection {
	/// Brand name.
	pub brand: String,
	/// Logo URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub logo_url: Option<String>,
	/// Navigation links.
	#[serde(default)]
	pub nav: Vec<NavItem>,
	/// Contact button.
	pub cta: CtaLink,
}

/// `hero` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
	/// `gradient` or `image`.
	pub variant: String,
	/// Headline; the brand name.
	pub title: String,
	/// The tagline.
	#[serde(default)]
	pub subtitle: String,
	/// Locations joined with ` · `.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub badge: Option<String>,
	/// Background image.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hero_image: Option<String>,
	/// Main button.
	pub primary_cta: CtaLink,
	/// Optional second button.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secondary_cta: Option<CtaLink>,
}

/// `features` and `services` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsSection {
	/// Heading.
	pub title: String,
	/// Cards; may be empty.
	#[serde(default)]
	pub items: Vec<ContentItem>,
}

/// `gallery` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySection {
	/// Heading.
	pub title: String,
	/// Image URLs.
	#[serde(default)]
	pub images: Vec<String>,
}

/// `testimonials` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialsSection {
	/// Heading.
	pub title: String,
	/// Quotes.
	#[serde(default)]
	pub quotes: Vec<Quote>,
}

/// `pricing` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSection {
	/// Heading.
	pub title: String,
	/// Small print.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	/// Tiers.
	#[serde(default)]
	pub tiers: Vec<PricingTier>,
}

/// `faq` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqSection {
	/// Heading.
	pub title: String,
	/// Questions.
	#[serde(default)]
	pub items: Vec<FaqItem>,
}

/// `contact` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
	/// Heading.
	pub title: String,
	/// Contact email.
	pub email: String,
	/// Contact phone.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	/// Office locations.
	#[serde(default)]
	pub locations: Vec<String>,
}

/// `footer` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
	/// Company name.
	pub company: String,
	/// Tagline.
	#[serde(default)]
	pub tagline: String,
	/// Navigation links.
	#[serde(default)]
	pub nav: Vec<NavItem>,
}
