//! Visual tree, renderer and standalone export.
//!
//! ## Example
//!
//! ```rust
//! use sitemaker::dsl::compile;
//! use sitemaker::core::Brief;
//! use sitemaker::pages::{SsrOptions, SsrRenderer};
//!
//! let dsl = compile(&Brief::default());
//! let html = SsrRenderer::with_options(SsrOptions::new().minify()).render_document(&dsl);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

// Re-export all sitemaker-pages functionality
pub use sitemaker_pages::*;
