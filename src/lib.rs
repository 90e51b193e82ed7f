//! # Sitemaker
//!
//! Turns a business description into a live, structured preview of a
//! marketing site, exportable as a standalone document.
//!
//! ## Pipeline
//!
//! ```text
//! text ─ interpret ─┐
//!                   ▼
//! Brief ◀─ merge ─ BriefPatch
//!   │
//!   ▼ compile (+ theme tokens)
//! SiteDsl ─ render ─▶ Page (action markers) ─ interaction ─▶ ActionDispatcher
//!   │                                                            │
//!   └─ export ─▶ HTML document              modal / scroll / navigate / toast
//! ```
//!
//! ## Feature Flags
//!
//! - `prompt` (default) - free-text interpreter and [`MakerStore::apply_prompt`]
//! - `conf` (default) - layered settings and [`MakerStore::from_settings`]
//!
//! ## Quick Example
//!
//! ```rust
//! use sitemaker::{BriefPatch, MakerStore};
//!
//! let mut store = MakerStore::new();
//! store.apply_patch(&BriefPatch::new().set(&["brand", "name"], "Harbor & Sage"));
//!
//! let bundle = store.export().unwrap();
//! assert!(bundle.html.contains("Harbor &amp; Sage"));
//! ```

pub mod core;
pub mod dispatch;
pub mod dsl;
pub mod pages;
pub mod store;

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "prompt")]
pub mod prompt;

// Re-export the pipeline entry points
pub use sitemaker_core::{Brief, BriefPatch, Error, Result, ThemeTokens, merge};
pub use sitemaker_dispatch::{ActionDispatcher, Capabilities, DispatchOutcome, ModalContent};
pub use sitemaker_dsl::{SectionDescriptor, SiteDsl, compile};
pub use sitemaker_pages::{Page, RenderOptions, SsrOptions, render};

#[cfg(feature = "conf")]
pub use sitemaker_conf::{Settings, SettingsError};
#[cfg(feature = "prompt")]
pub use sitemaker_prompt::interpret;

pub use store::{ExportBundle, MakerState, MakerStore, UiSnapshot, UiState, reduce};
#[cfg(feature = "conf")]
pub use store::export_options;
