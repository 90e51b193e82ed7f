//! # Sitemaker Pages
//!
//! Turns a compiled [`SiteDsl`](sitemaker_dsl::SiteDsl) into a visual tree
//! and, for export, into a standalone HTML document.
//!
//! ## Overview
//!
//! - [`view`]: the [`Page`] tree, HTML serialization and nearest-marker lookup
//! - [`action`]: typed [`ActionBinding`]s carried by interactive elements
//! - [`renderer`]: per-section rendering with fault isolation
//! - [`reveal`]: reveal-on-scroll target discovery and registration
//! - [`ssr`]: the [`SsrRenderer`] document exporter
//!
//! ## Example
//!
//! ```rust
//! use sitemaker_core::Brief;
//! use sitemaker_dsl::compile;
//! use sitemaker_pages::{SsrRenderer, render};
//!
//! let dsl = compile(&Brief::default());
//! let page = render(&dsl);
//! assert!(page.find_by_id("hero").is_some());
//!
//! let html = SsrRenderer::new().render_document(&dsl);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod error;
pub mod renderer;
pub mod reveal;
pub mod ssr;
pub mod view;

pub use action::ActionBinding;
pub use error::RenderError;
pub use renderer::{RenderOptions, Renderer, render, render_section};
pub use reveal::{RevealObserver, RevealTarget, collect_reveal_targets, mount_reveal};
pub use ssr::{SsrOptions, SsrRenderer};
pub use view::{IntoPage, Page, PageElement};
