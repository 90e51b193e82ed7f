//! # Sitemaker DSL
//!
//! The Site DSL is the compiled, renderer-ready description of a site: a
//! `meta` block (brand, derived theme tokens, navigation) and a list of pages,
//! each holding an ordered list of [`SectionDescriptor`]s.
//!
//! [`compile`] turns a [`Brief`](sitemaker_core::Brief) into a [`SiteDsl`].
//! It is pure, deterministic and never fails.
//!
//! ## Example
//!
//! ```rust
//! use sitemaker_core::Brief;
//! use sitemaker_dsl::compile;
//!
//! let dsl = compile(&Brief::default());
//! let kinds: Vec<&str> = dsl.home().unwrap().sections.iter().map(|s| s.kind()).collect();
//!
//! assert_eq!(kinds, ["header", "hero", "features", "testimonials", "faq", "contact", "footer"]);
//! ```

pub mod compiler;
pub mod section;
pub mod site;

pub use compiler::compile;
pub use section::{
	ContactSection, CtaLink, FaqSection, FooterSection, GallerySection, HeaderSection,
	HeroSection, ItemsSection, PricingSection, SectionDescriptor, TestimonialsSection,
};
pub use site::{Meta, MetaBrand, NavItem, PageDsl, SiteDsl};
