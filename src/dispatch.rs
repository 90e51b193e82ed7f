//! Action dispatch.

pub use sitemaker_dispatch::*;
