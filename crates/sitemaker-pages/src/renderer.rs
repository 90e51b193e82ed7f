//! Site DSL to visual tree.
//!
//! Each section kind has its own render function returning
//! `Result<PageElement, RenderError>`. A failing section is logged and
//! replaced in its slot by a fault node; it never takes the page down.

use std::collections::BTreeMap;

use sitemaker_dsl::{
	ContactSection, FaqSection, FooterSection, GallerySection, HeaderSection, HeroSection,
	ItemsSection, Meta, NavItem, PricingSection, SectionDescriptor, SiteDsl, TestimonialsSection,
};

use crate::action::{ActionBinding, BOOK_CALL, OPEN_CONTACT, SELECT_PLAN};
use crate::error::RenderError;
use crate::reveal::REVEAL_ATTR;
use crate::view::{IntoPage, Page, PageElement};

const UNSAFE_SCHEMES: [&str; 2] = ["javascript:", "vbscript:"];
const EMPTY_PLACEHOLDER: &str = "Add items to show them here.";

/// Renderer options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
	/// Whether section roots carry the `data-reveal` marker.
	pub reveal: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self { reveal: true }
	}
}

impl RenderOptions {
	/// Creates default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Turns reveal markers on or off.
	pub fn reveal(mut self, reveal: bool) -> Self {
		self.reveal = reveal;
		self
	}
}

/// Renders Site DSL documents into [`Page`] trees.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	options: RenderOptions,
}

impl Renderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// The options in use.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders the home page of `dsl`.
	///
	/// Every descriptor yields exactly one slot, in order. Repeated kinds get
	/// ids `kind`, `kind-2`, `kind-3`, and so on.
	pub fn render(&self, dsl: &SiteDsl) -> Page {
		let mut root = Page::element("main")
			.class("site")
			.attr("data-card-style", dsl.meta.theme.card_style.as_str());

		let Some(home) = dsl.home() else {
			tracing::debug!("site has no pages, rendering an empty shell");
			return root.into_page();
		};

		let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
		let mut faults = 0usize;
		for section in &home.sections {
			let kind = section.kind();
			let seen = occurrences.entry(kind).or_insert(0);
			*seen += 1;
			let id = if *seen == 1 {
				kind.to_string()
			} else {
				format!("{kind}-{seen}")
			};

			let node = match render_section(section, &dsl.meta) {
				Ok(node) => node,
				Err(err) => {
					faults += 1;
					tracing::warn!(
						section = kind,
						error = %err,
						"section failed to render, showing a fault in its place"
					);
					fault_node(kind)
				}
			};

			let mut node = node.attr("id", id);
			if self.options.reveal {
				node = node.attr(REVEAL_ATTR, kind.to_string());
			}
			root = root.child(node);
		}

		tracing::debug!(
			sections = home.sections.len(),
			faults,
			"rendered site"
		);
		root.into_page()
	}
}

/// Renders `dsl` with default options.
pub fn render(dsl: &SiteDsl) -> Page {
	Renderer::new().render(dsl)
}

/// Renders one section without its `id` and reveal marker.
pub fn render_section(
	section: &SectionDescriptor,
	meta: &Meta,
) -> Result<PageElement, RenderError> {
	match section {
		SectionDescriptor::Header(header) => render_header(header),
		SectionDescriptor::Hero(hero) => render_hero(hero),
		SectionDescriptor::Features(features) => Ok(render_features(features)),
		SectionDescriptor::Services(services) => Ok(render_services(services)),
		SectionDescriptor::Gallery(gallery) => render_gallery(gallery),
		SectionDescriptor::Testimonials(testimonials) => Ok(render_testimonials(testimonials)),
		SectionDescriptor::Pricing(pricing) => Ok(render_pricing(pricing)),
		SectionDescriptor::Faq(faq) => Ok(render_faq(faq)),
		SectionDescriptor::Contact(contact) => render_contact(contact),
		SectionDescriptor::Footer(footer) => render_footer(footer, meta),
		SectionDescriptor::Unknown { kind } => Ok(unknown_node(kind)),
	}
}

fn render_header(header: &HeaderSection) -> Result<PageElement, RenderError> {
	let logo = header
		.logo_url
		.as_deref()
		.map(|url| checked_url("header", "logoUrl", url))
		.transpose()?
		.map(|src| {
			Page::element("img")
				.class("brand-logo")
				.attr("src", src)
				.attr("alt", "")
		});

	Ok(Page::element("header")
		.class("site-header")
		.child(
			Page::element("a")
				.class("brand")
				.attr("href", "#hero")
				.child(logo)
				.child(header.brand.clone()),
		)
		.child(nav_node("header", &header.nav)?)
		.child(
			Page::element("a")
				.class("button button--primary")
				.attr("href", checked_url("header", "cta", &header.cta.href)?)
				.action(ActionBinding::new(OPEN_CONTACT))
				.child(header.cta.label.clone()),
		))
}

fn render_hero(hero: &HeroSection) -> Result<PageElement, RenderError> {
	if hero.title.trim().is_empty() {
		return Err(RenderError::MissingField {
			section: "hero".to_string(),
			field: "title",
		});
	}
	let image = hero
		.hero_image
		.as_deref()
		.map(|url| checked_url("hero", "heroImage", url))
		.transpose()?
		.map(|src| {
			Page::element("img")
				.class("hero-image")
				.attr("src", src)
				.attr("alt", "")
		});
	let badge = hero
		.badge
		.clone()
		.map(|badge| Page::element("p").class("badge").child(badge));

	let primary = Page::element("a")
		.class("button button--primary")
		.attr("href", checked_url("hero", "primaryCta", &hero.primary_cta.href)?)
		.action(ActionBinding::new(OPEN_CONTACT))
		.child(hero.primary_cta.label.clone());
	let secondary = match &hero.secondary_cta {
		Some(cta) => Some(
			Page::element("a")
				.class("button button--ghost")
				.attr("href", checked_url("hero", "secondaryCta", &cta.href)?)
				.child(cta.label.clone()),
		),
		None => None,
	};

	Ok(Page::element("section")
		.class(format!("hero hero--{}", hero.variant))
		.child(image)
		.child(badge)
		.child(Page::element("h1").child(hero.title.clone()))
		.child(Page::element("p").class("subtitle").child(hero.subtitle.clone()))
		.child(
			Page::element("div")
				.class("actions")
				.child(primary)
				.child(secondary),
		))
}

fn render_features(features: &ItemsSection) -> PageElement {
	let cards = features.items.iter().map(|item| {
		Page::element("article")
			.class("card")
			.child(Page::element("h3").child(item.title.clone()))
			.child(Page::element("p").child(item.text.clone()))
	});
	section_shell("features", &features.title).child(grid_or_placeholder(cards.collect()))
}

fn render_services(services: &ItemsSection) -> PageElement {
	let cards = services.items.iter().map(|item| {
		Page::element("article")
			.class("card")
			.child(Page::element("h3").child(item.title.clone()))
			.child(Page::element("p").child(item.text.clone()))
			.child(
				Page::element("a")
					.class("link")
					.attr("href", "#contact")
					.action(ActionBinding::new(OPEN_CONTACT).param("service", item.title.clone()))
					.child("Enquire →"),
			)
	});
	section_shell("services", &services.title).child(grid_or_placeholder(cards.collect()))
}

fn render_gallery(gallery: &GallerySection) -> Result<PageElement, RenderError> {
	let images = gallery
		.images
		.iter()
		.enumerate()
		.map(|(index, url)| {
			checked_url("gallery", "images", url).map(|src| {
				Page::element("img")
					.attr("src", src)
					.attr("alt", format!("Gallery image {}", index + 1))
					.attr("loading", "lazy")
			})
		})
		.collect::<Result<Vec<_>, _>>()?;
	Ok(section_shell("gallery", &gallery.title).child(grid_or_placeholder(images)))
}

fn render_testimonials(testimonials: &TestimonialsSection) -> PageElement {
	let quotes = testimonials.quotes.iter().map(|quote| {
		Page::element("blockquote")
			.class("quote")
			.child(Page::element("p").child(quote.quote.clone()))
			.child(Page::element("cite").child(quote.author.clone()))
	});
	section_shell("testimonials", &testimonials.title).child(grid_or_placeholder(quotes.collect()))
}

fn render_pricing(pricing: &PricingSection) -> PageElement {
	let note = pricing
		.note
		.clone()
		.map(|note| Page::element("p").class("note").child(note));
	let tiers = pricing.tiers.iter().map(|tier| {
		Page::element("article")
			.class("card tier")
			.child(Page::element("h3").child(tier.name.clone()))
			.child(Page::element("p").class("price").child(tier.price.clone()))
			.child(
				Page::element("ul").children(
					tier.items
						.iter()
						.map(|item| Page::element("li").child(item.clone())),
				),
			)
			.child(
				Page::element("button")
					.class("button button--primary")
					.attr("type", "button")
					.action(ActionBinding::new(SELECT_PLAN).param("plan-name", tier.name.clone()))
					.child(format!("Choose {}", tier.name)),
			)
	});
	section_shell("pricing", &pricing.title)
		.child(note)
		.child(grid_or_placeholder(tiers.collect()))
}

fn render_faq(faq: &FaqSection) -> PageElement {
	let items = faq.items.iter().map(|item| {
		Page::element("details")
			.child(Page::element("summary").child(item.q.clone()))
			.child(Page::element("p").child(item.a.clone()))
	});
	section_shell("faq", &faq.title).child(grid_or_placeholder(items.collect()))
}

fn render_contact(contact: &ContactSection) -> Result<PageElement, RenderError> {
	let mut details = Page::element("div").class("contact-details");
	if !contact.email.trim().is_empty() {
		details = details.child(
			Page::element("p").child(
				Page::element("a")
					.attr("href", checked_url("contact", "email", &format!("mailto:{}", contact.email))?)
					.child(contact.email.clone()),
			),
		);
	}
	if let Some(phone) = &contact.phone {
		details = details.child(
			Page::element("p").child(
				Page::element("a")
					.attr("href", format!("tel:{}", phone.replace(' ', "")))
					.child(phone.clone()),
			),
		);
	}
	if !contact.locations.is_empty() {
		details = details.child(
			Page::element("ul").class("locations").children(
				contact
					.locations
					.iter()
					.map(|location| Page::element("li").child(location.clone())),
			),
		);
	}

	let form = Page::element("form")
		.class("contact-form")
		.child(
			Page::element("input")
				.attr("name", "name")
				.attr("placeholder", "Name"),
		)
		.child(
			Page::element("input")
				.attr("name", "email")
				.attr("type", "email")
				.attr("placeholder", "Email"),
		)
		.child(
			Page::element("textarea")
				.attr("name", "message")
				.attr("rows", "5")
				.attr("placeholder", "Message"),
		)
		.child(
			Page::element("div")
				.class("actions")
				.child(
					Page::element("button")
						.class("button button--primary")
						.attr("type", "button")
						.action(ActionBinding::new(OPEN_CONTACT))
						.child("Send message"),
				)
				.child(
					Page::element("button")
						.class("button button--ghost")
						.attr("type", "button")
						.action(ActionBinding::new(BOOK_CALL))
						.child("Book a call"),
				),
		);

	Ok(section_shell("contact", &contact.title).child(details).child(form))
}

fn render_footer(footer: &FooterSection, meta: &Meta) -> Result<PageElement, RenderError> {
	Ok(Page::element("footer")
		.class("site-footer")
		.child(
			Page::element("p")
				.class("company")
				.child(format!("© {}", footer.company)),
		)
		.child(Page::element("p").class("tagline").child(footer.tagline.clone()))
		.child(nav_node("footer", &footer.nav)?)
		.attr("data-industry", meta.brand.industry.clone()))
}

fn unknown_node(kind: &str) -> PageElement {
	Page::element("section")
		.class("section section--unknown")
		.child(Page::element("h2").child(kind.to_string()))
		.child(Page::element("p").child("This section type is not supported yet."))
}

fn fault_node(kind: &str) -> PageElement {
	Page::element("section")
		.class("section section--fault")
		.attr("data-fault", kind.to_string())
		.attr("role", "alert")
		.child(Page::element("p").child("This section could not be displayed."))
}

fn section_shell(kind: &'static str, title: &str) -> PageElement {
	Page::element("section")
		.class(format!("section section--{kind}"))
		.child(Page::element("h2").child(title.to_string()))
}

fn grid_or_placeholder(children: Vec<PageElement>) -> PageElement {
	if children.is_empty() {
		Page::element("p")
			.class("placeholder")
			.child(EMPTY_PLACEHOLDER)
	} else {
		Page::element("div").class("grid").children(children)
	}
}

fn nav_node(section: &str, items: &[NavItem]) -> Result<PageElement, RenderError> {
	let links = items
		.iter()
		.map(|item| {
			checked_url(section, "nav", &item.href)
				.map(|href| Page::element("a").attr("href", href).child(item.label.clone()))
		})
		.collect::<Result<Vec<_>, _>>()?;
	Ok(Page::element("nav").children(links))
}

/// Rejects URLs whose scheme would execute script, ignoring case and
/// embedded whitespace.
fn checked_url(section: &str, field: &'static str, url: &str) -> Result<String, RenderError> {
	let normalized: String = url
		.chars()
		.filter(|c| !c.is_whitespace() && !c.is_control())
		.collect::<String>()
		.to_ascii_lowercase();
	if UNSAFE_SCHEMES
		.iter()
		.any(|scheme| normalized.starts_with(scheme))
	{
		return Err(RenderError::UnsafeUrl {
			section: section.to_string(),
			field,
			url: url.to_string(),
		});
	}
	Ok(url.trim().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;
	use sitemaker_core::{Brief, BriefPatch, merge};
	use sitemaker_dsl::compile;

	#[fixture]
	fn dsl() -> SiteDsl {
		compile(&Brief::default())
	}

	fn dsl_with(patch: serde_json::Value) -> SiteDsl {
		compile(&merge(&Brief::default(), &BriefPatch::from_value(patch)))
	}

	fn section_ids(page: &Page) -> Vec<String> {
		page.child_nodes()
			.iter()
			.filter_map(Page::as_element)
			.filter_map(|element| element.attr_value("id").map(str::to_string))
			.collect()
	}

	#[rstest]
	fn test_every_section_gets_an_id_and_reveal_marker(dsl: SiteDsl) {
		let page = render(&dsl);

		assert_eq!(
			section_ids(&page),
			["header", "hero", "features", "testimonials", "faq", "contact", "footer"]
		);
		for node in page.child_nodes() {
			assert!(node.as_element().unwrap().attr_value(REVEAL_ATTR).is_some());
		}
	}

	#[rstest]
	fn test_reveal_markers_can_be_disabled(dsl: SiteDsl) {
		let page = Renderer::with_options(RenderOptions::new().reveal(false)).render(&dsl);

		assert!(!page.render_to_string().contains(REVEAL_ATTR));
	}

	#[rstest]
	fn test_duplicate_sections_get_distinct_ids() {
		let dsl = dsl_with(json!({ "pages": { "order": ["faq", "contact", "faq"] } }));

		let page = render(&dsl);

		assert_eq!(section_ids(&page), ["faq", "contact", "faq-2"]);
	}

	#[rstest]
	fn test_unknown_kind_renders_fallback() {
		let dsl = dsl_with(json!({
			"pages": { "order": ["hero", "blog"], "enabledByKey": { "blog": true } }
		}));

		let page = render(&dsl);

		let blog = page.find_by_id("blog").unwrap();
		assert_eq!(blog.attr_value("class"), Some("section section--unknown"));
		assert!(Page::Element(blog.clone()).text_content().contains("blog"));
	}

	#[rstest]
	fn test_pricing_buttons_select_their_plan() {
		let dsl = dsl_with(json!({ "pages": { "enabledByKey": { "pricing": true } } }));

		let html = render(&dsl).render_to_string();

		assert!(html.contains(
			"<button class=\"button button--primary\" type=\"button\" data-action=\"select-plan\" data-plan-name=\"Growth\">Choose Growth</button>"
		));
	}

	#[rstest]
	fn test_services_enquire_links_carry_the_service() {
		let dsl = dsl_with(json!({
			"pages": { "order": ["services"], "enabledByKey": { "services": true } },
			"content": { "services": { "items": [{ "title": "Audit", "text": "We look." }] } }
		}));

		let page = render(&dsl);

		let mut bindings = Vec::new();
		page.walk_elements(&mut |_, element| {
			if let Some(binding) = element.binding() {
				bindings.push(binding.clone());
			}
		});
		assert_eq!(
			bindings,
			vec![ActionBinding::new(OPEN_CONTACT).param("service", "Audit")]
		);
	}

	#[rstest]
	fn test_contact_form_offers_both_actions(dsl: SiteDsl) {
		let page = render(&dsl);
		let contact = Page::Element(page.find_by_id("contact").unwrap().clone());

		let mut names = Vec::new();
		contact.walk_elements(&mut |_, element| {
			if let Some(binding) = element.binding() {
				names.push(binding.name.clone());
			}
		});

		assert_eq!(names, [OPEN_CONTACT, BOOK_CALL]);
	}

	#[rstest]
	fn test_empty_items_show_placeholder() {
		let dsl = dsl_with(json!({ "content": { "features": { "items": [] } } }));

		let page = render(&dsl);

		let features = Page::Element(page.find_by_id("features").unwrap().clone());
		assert!(features.text_content().contains(EMPTY_PLACEHOLDER));
	}

	#[rstest]
	fn test_unsafe_image_faults_only_its_own_section() {
		let dsl = dsl_with(json!({ "brand": { "heroImage": " JavaScript:alert(1)" } }));

		let page = render(&dsl);

		let hero = page.find_by_id("hero").unwrap();
		assert_eq!(hero.attr_value("data-fault"), Some("hero"));
		assert!(!page.render_to_string().contains("alert(1)"));
		assert_eq!(section_ids(&page).len(), 7);
		assert!(page.find_by_id("features").unwrap().attr_value("data-fault").is_none());
	}

	#[rstest]
	#[case("javascript:alert(1)", false)]
	#[case("java\tscript:alert(1)", false)]
	#[case("VBScript:msgbox", false)]
	#[case("https://example.com/a.png", true)]
	#[case("/images/hero.jpg", true)]
	#[case("#contact", true)]
	fn test_checked_url(#[case] url: &str, #[case] accepted: bool) {
		assert_eq!(checked_url("hero", "heroImage", url).is_ok(), accepted);
	}

	#[rstest]
	fn test_blank_hero_title_is_a_missing_field(dsl: SiteDsl) {
		let SectionDescriptor::Hero(mut hero) = dsl.home().unwrap().sections[1].clone() else {
			panic!("expected hero");
		};
		hero.title = "  ".to_string();

		let result = render_section(&SectionDescriptor::Hero(hero), &dsl.meta);

		assert_eq!(
			result.unwrap_err(),
			RenderError::MissingField {
				section: "hero".to_string(),
				field: "title"
			}
		);
	}
}
