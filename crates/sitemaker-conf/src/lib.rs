//! # Sitemaker Conf
//!
//! Layered settings for the `sitemaker` binary and the preview store.
//!
//! ## Sources
//!
//! | Source | Priority | Notes |
//! |---|---|---|
//! | [`DefaultSource`](sources::DefaultSource) | 0 | `Settings::default()` |
//! | [`TomlFileSource`](sources::TomlFileSource) | 50 | missing file is empty unless required |
//! | [`EnvSource`](sources::EnvSource) | 100 | `SITEMAKER_` prefix, `__` nests |
//!
//! Layers are merged with the same recursive merge the brief uses, then
//! deserialized into [`Settings`].
//!
//! ```toml
//! log_filter = "sitemaker=debug"
//!
//! [export]
//! lang = "nb"
//! minify = true
//!
//! [preview]
//! reveal = false
//! ```

pub mod builder;
pub mod settings;
pub mod sources;

pub use builder::{SettingsBuilder, SettingsError};
pub use settings::{DEFAULT_LOG_FILTER, ExportSettings, PreviewSettings, Settings};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
