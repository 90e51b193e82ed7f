//! Layered operator settings.

#[cfg(feature = "conf")]
pub use sitemaker_conf::*;
