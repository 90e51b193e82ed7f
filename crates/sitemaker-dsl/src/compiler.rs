//! Brief to Site DSL compilation.

use sitemaker_core::brief::{DEFAULT_BRAND_NAME, DEFAULT_TAGLINE, non_empty_or};
use sitemaker_core::{
	Brief, ContentItem, FaqItem, Industry, IndustryPreset, PricingTier, Quote, derive,
};

use crate::section::{
	ContactSection, CtaLink, FaqSection, FooterSection, GallerySection, HeaderSection,
	HeroSection, ItemsSection, PricingSection, SectionDescriptor, TestimonialsSection,
};
use crate::site::{HOME_SLUG, Meta, MetaBrand, NavItem, PageDsl, SiteDsl};

const CONTACT_ANCHOR: &str = "#contact";
const DEFAULT_EMAIL: &str = "hello@example.com";
const DEFAULT_PRICING_NOTE: &str = "Transparent estimates. Fixed-fee options available.";
const LOCATION_SEPARATOR: &str = " · ";

/// Compiles a Brief into a Site DSL document.
///
/// Sections follow `pages.order`, keeping only keys switched on in
/// `pages.enabledByKey`. A key listed twice yields two descriptors. Missing
/// content is filled with placeholder copy; the result never depends on
/// anything but `brief`.
pub fn compile(brief: &Brief) -> SiteDsl {
	let industry = Industry::parse(&brief.brand.industry);
	let ctx = Context::new(brief, industry.preset());

	let sections: Vec<SectionDescriptor> = brief
		.pages
		.enabled_keys()
		.map(|key| ctx.section(key))
		.collect();

	tracing::debug!(
		industry = %industry,
		sections = sections.len(),
		"compiled brief into site DSL"
	);

	SiteDsl {
		meta: Meta {
			brand: MetaBrand {
				name: ctx.brand_name.clone(),
				tagline: ctx.tagline.clone(),
				logo_url: ctx.logo_url.clone(),
				colors: brief.brand.colors.resolved(),
				industry: industry.as_str().to_string(),
			},
			theme: derive(&brief.theme),
			nav: ctx.nav.clone(),
		},
		pages: vec![PageDsl {
			slug: HOME_SLUG.to_string(),
			sections,
		}],
	}
}

/// Values shared by several sections, resolved once per compilation.
struct Context<'a> {
	brief: &'a Brief,
	preset: &'static IndustryPreset,
	brand_name: String,
	tagline: String,
	logo_url: Option<String>,
	nav: Vec<NavItem>,
}

impl<'a> Context<'a> {
	fn new(brief: &'a Brief, preset: &'static IndustryPreset) -> Self {
		let nav = if brief.layout.nav_items.is_empty() {
			preset.nav.iter().map(|label| NavItem::from_label(label)).collect()
		} else {
			brief
				.layout
				.nav_items
				.iter()
				.map(|label| NavItem::from_label(label))
				.collect()
		};
		Self {
			brief,
			preset,
			brand_name: non_empty_or(&brief.brand.name, DEFAULT_BRAND_NAME),
			tagline: non_empty_or(&brief.brand.tagline, DEFAULT_TAGLINE),
			logo_url: present(brief.brand.logo_url.as_deref()),
			nav,
		}
	}

	fn section(&self, key: &str) -> SectionDescriptor {
		match key {
			"header" => SectionDescriptor::Header(self.header()),
			"hero" => SectionDescriptor::Hero(self.hero()),
			"features" => SectionDescriptor::Features(self.features()),
			"services" => SectionDescriptor::Services(self.services()),
			"gallery" => SectionDescriptor::Gallery(self.gallery()),
			"testimonials" => SectionDescriptor::Testimonials(self.testimonials()),
			"pricing" => SectionDescriptor::Pricing(self.pricing()),
			"faq" => SectionDescriptor::Faq(self.faq()),
			"contact" => SectionDescriptor::Contact(self.contact()),
			"footer" => SectionDescriptor::Footer(self.footer()),
			other => {
				tracing::debug!(kind = other, "enabled section has no compiler, emitting fallback");
				SectionDescriptor::Unknown {
					kind: other.to_string(),
				}
			}
		}
	}

	fn header(&self) -> HeaderSection {
		HeaderSection {
			brand: self.brand_name.clone(),
			logo_url: self.logo_url.clone(),
			nav: self.nav.clone(),
			cta: CtaLink::new("Contact", CONTACT_ANCHOR),
		}
	}

	fn hero(&self) -> HeroSection {
		let brand = &self.brief.brand;
		let content = self.brief.content.hero.as_ref();
		let hero_image = present(brand.hero_image.as_deref());

		let variant = content
			.and_then(|hero| present(hero.variant.as_deref()))
			.unwrap_or_else(|| {
				let variant = if hero_image.is_some() { "image" } else { "gradient" };
				variant.to_string()
			});
		let primary = content
			.and_then(|hero| present(hero.primary_cta.as_deref()))
			.unwrap_or_else(|| self.preset.primary_cta.to_string());
		let secondary = content
			.and_then(|hero| present(hero.secondary_cta.as_deref()))
			.or_else(|| self.preset.secondary_cta.map(str::to_string));

		HeroSection {
			variant,
			title: self.brand_name.clone(),
			subtitle: self.tagline.clone(),
			badge: (!brand.locations.is_empty()).then(|| brand.locations.join(LOCATION_SEPARATOR)),
			hero_image,
			primary_cta: CtaLink::new(primary, CONTACT_ANCHOR),
			secondary_cta: secondary.map(|label| CtaLink::new(label, CONTACT_ANCHOR)),
		}
	}

	fn features(&self) -> ItemsSection {
		let content = self.brief.content.features.as_ref();
		ItemsSection {
			title: title_or(content.and_then(|c| c.title.as_deref()), "What you’ll get"),
			items: content
				.and_then(|c| c.items.clone())
				.unwrap_or_else(placeholder_features),
		}
	}

	fn services(&self) -> ItemsSection {
		let content = self.brief.content.services.as_ref();
		ItemsSection {
			title: title_or(content.and_then(|c| c.title.as_deref()), "Services"),
			items: content.and_then(|c| c.items.clone()).unwrap_or_else(|| {
				self.preset
					.services
					.iter()
					.map(|(title, text)| ContentItem::new(*title, *text))
					.collect()
			}),
		}
	}

	fn gallery(&self) -> GallerySection {
		let content = self.brief.content.gallery.as_ref();
		GallerySection {
			title: title_or(content.and_then(|c| c.title.as_deref()), "Gallery"),
			images: content.and_then(|c| c.images.clone()).unwrap_or_default(),
		}
	}

	fn testimonials(&self) -> TestimonialsSection {
		let content = self.brief.content.testimonials.as_ref();
		TestimonialsSection {
			title: title_or(content.and_then(|c| c.title.as_deref()), "Testimonials"),
			quotes: content.and_then(|c| c.quotes.clone()).unwrap_or_else(|| {
				vec![Quote::new(
					"They understood what we needed and delivered it on time.",
					"A happy customer",
				)]
			}),
		}
	}

	fn pricing(&self) -> PricingSection {
		let content = self.brief.content.pricing.as_ref();
		let note = match content.and_then(|c| c.note.as_deref()) {
			Some(note) => present(Some(note)),
			None => Some(DEFAULT_PRICING_NOTE.to_string()),
		};
		PricingSection {
			title: title_or(content.and_then(|c| c.title.as_deref()), "Pricing"),
			note,
			tiers: content
				.and_then(|c| c.tiers.clone())
				.unwrap_or_else(default_tiers),
		}
	}

	fn faq(&self) -> FaqSection {
		let content = self.brief.content.faq.as_ref();
		FaqSection {
			title: title_or(content.and_then(|c| c.title.as_deref()), "FAQ"),
			items: content.and_then(|c| c.items.clone()).unwrap_or_else(|| {
				self.preset
					.faq
					.iter()
					.map(|(q, a)| FaqItem::new(*q, *a))
					.collect()
			}),
		}
	}

	fn contact(&self) -> ContactSection {
		let content = self.brief.content.contact.as_ref();
		ContactSection {
			title: title_or(content.and_then(|c| c.title.as_deref()), "Contact"),
			email: content
				.and_then(|c| present(c.email.as_deref()))
				.unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
			phone: content.and_then(|c| present(c.phone.as_deref())),
			locations: content
				.and_then(|c| c.locations.clone())
				.unwrap_or_else(|| self.brief.brand.locations.clone()),
		}
	}

	fn footer(&self) -> FooterSection {
		FooterSection {
			company: self.brand_name.clone(),
			tagline: self.tagline.clone(),
			nav: self.nav.clone(),
		}
	}
}

/// `Some(trimmed)` for non-blank input.
fn present(value: Option<&str>) -> Option<String> {
	value
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.map(str::to_string)
}

fn title_or(value: Option<&str>, fallback: &str) -> String {
	present(value).unwrap_or_else(|| fallback.to_string())
}

fn placeholder_features() -> Vec<ContentItem> {
	vec![
		ContentItem::new("Clear offer", "Say what you do and who it is for in one sentence."),
		ContentItem::new("Proof", "Show results, reviews or the logos of people you work with."),
		ContentItem::new("Easy next step", "Make it obvious how to get in touch."),
	]
}

fn default_tiers() -> Vec<PricingTier> {
	vec![
		PricingTier::new("Starter", "$900", ["2–3 pages", "Responsive", "Lead form"]),
		PricingTier::new(
			"Growth",
			"$2,300",
			["5–7 pages", "SEO + schema", "Booking & Maps", "Integrations"],
		),
		PricingTier::new(
			"Scale",
			"$7,000",
			[
				"10+ pages",
				"Strategy + funnel",
				"Advanced SEO/analytics",
				"CRM / e-com",
			],
		),
	]
}
