//! Brief model, merge and theme tokens.
//!
//! ```rust
//! use sitemaker::core::{Brief, BriefPatch, merge};
//!
//! let brief = merge(&Brief::default(), &BriefPatch::new().set(&["theme", "radius"], 8));
//! assert_eq!(brief.theme.radius, 8.0);
//! ```

pub use sitemaker_core::*;
