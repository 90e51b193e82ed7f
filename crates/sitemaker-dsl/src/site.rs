//! The Site DSL document.

use serde::{Deserialize, Serialize};
use sitemaker_core::{BrandColors, ThemeTokens};

use crate::section::SectionDescriptor;

/// Slug of the single page the compiler produces.
pub const HOME_SLUG: &str = "home";

/// The compiled site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDsl {
	/// Site-wide brand, theme and navigation.
	pub meta: Meta,
	/// Pages; the compiler always emits exactly one, `home`.
	pub pages: Vec<PageDsl>,
}

impl SiteDsl {
	/// The home page, or the first page when none is called `home`.
	pub fn home(&self) -> Option<&PageDsl> {
		self.pages
			.iter()
			.find(|page| page.slug == HOME_SLUG)
			.or_else(|| self.pages.first())
	}

	/// Compact JSON.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	/// Pretty-printed JSON.
	pub fn to_json_pretty(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}

	/// Parses a document previously produced by [`to_json`](Self::to_json).
	/// Unknown section types are kept as [`SectionDescriptor::Unknown`].
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

/// Site-wide metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
	/// Brand identity.
	pub brand: MetaBrand,
	/// Derived theme tokens.
	pub theme: ThemeTokens,
	/// Navigation links.
	pub nav: Vec<NavItem>,
}

/// Brand identity as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaBrand {
	/// Company name.
	pub name: String,
	/// Tagline.
	pub tagline: String,
	/// Logo URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub logo_url: Option<String>,
	/// Palette with defaults applied.
	pub colors: BrandColors,
	/// Resolved industry name.
	pub industry: String,
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
	/// Visible label.
	pub label: String,
	/// In-page anchor, e.g. `#contact`.
	pub href: String,
}

impl NavItem {
	/// Builds a link pointing at the anchor derived from `label`.
	pub fn from_label(label: &str) -> Self {
		Self {
			label: label.to_string(),
			href: format!("#{}", slugify(label)),
		}
	}
}

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDsl {
	/// URL slug.
	pub slug: String,
	/// Sections in display order.
	pub sections: Vec<SectionDescriptor>,
}

/// Lower-cases `label` and joins its alphanumeric runs with `-`.
pub fn slugify(label: &str) -> String {
	label
		.split(|c: char| !c.is_alphanumeric())
		.filter(|part| !part.is_empty())
		.map(str::to_lowercase)
		.collect::<Vec<_>>()
		.join("-")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Contact", "contact")]
	#[case("Our Team", "our-team")]
	#[case("  Q & A  ", "q-a")]
	#[case("Tjenester/Priser", "tjenester-priser")]
	#[case("", "")]
	fn test_slugify(#[case] label: &str, #[case] expected: &str) {
		assert_eq!(slugify(label), expected);
	}

	#[rstest]
	fn test_nav_item_points_at_anchor() {
		let item = NavItem::from_label("Practice Areas");

		assert_eq!(item.href, "#practice-areas");
		assert_eq!(item.label, "Practice Areas");
	}
}
