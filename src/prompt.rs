//! Deterministic free-text interpreter.

#[cfg(feature = "prompt")]
pub use sitemaker_prompt::*;
