//! # Sitemaker Core
//!
//! The configuration layer of sitemaker: the Brief an operator edits, the
//! recursive merge used to apply partial patches to it, and the theme token
//! deriver that turns a handful of raw knobs into a complete set of visual
//! constants.
//!
//! ## Overview
//!
//! - [`brief`]: the [`Brief`] record and its total defaults
//! - [`merge`]: [`merge()`](merge::merge) and the value-level [`deep_merge`](merge::deep_merge)
//! - [`theme`]: [`derive()`](theme::derive) and [`ThemeTokens`]
//! - [`industry`]: the fixed industry preset table used by the compiler
//! - [`exception`]: error type for the fallible parsing entry points
//!
//! ## Example
//!
//! ```rust
//! use sitemaker_core::{Brief, BriefPatch, merge};
//!
//! let base = Brief::default();
//! let patch = BriefPatch::new().set(&["brand", "name"], "Harbor & Sage");
//! let next = merge(&base, &patch);
//!
//! assert_eq!(next.brand.name, "Harbor & Sage");
//! assert_eq!(next.brand.tagline, base.brand.tagline);
//! ```

#![warn(missing_docs)]

pub mod brief;
pub mod exception;
pub mod industry;
pub mod merge;
pub mod theme;

pub use brief::{
	BrandColors, BrandConfig, Brief, ContactContent, ContentConfig, ContentItem, FaqContent,
	FaqItem, GalleryContent, HeroContent, ItemsContent, LayoutConfig, PagesConfig, PricingContent,
	PricingTier, Quote, SECTION_KEYS, TestimonialsContent, ThemeKnobs,
};
pub use exception::{Error, Result};
pub use industry::{Industry, IndustryPreset};
pub use merge::{BriefPatch, deep_merge, merge};
pub use theme::{AnimationLevel, AnimationTiming, CardStyle, ThemeTokens, derive};
