//! # Sitemaker Prompt
//!
//! A deterministic keyword interpreter: free text in, brief patch out.
//!
//! There is no model behind it. Each field of the patch is filled from an
//! ordered, case-insensitive rule table (see [`rules`]); a field with no
//! matching rule stays unset, so applying the patch never clobbers
//! anything the operator did not mention.
//!
//! | Bucket | Patch path |
//! |---|---|
//! | industry | `brand.industry` (always set) |
//! | name | `brand.name` |
//! | animation | `theme.animationLevel` |
//! | accent / dark | `brand.colors.accent` / `brand.colors.neutral` |
//! | goal | `content.hero.primaryCta` |
//! | must-have sections | `pages.enabledByKey.*` |
//!
//! ## Example
//!
//! ```rust
//! use sitemaker_core::{Brief, merge};
//! use sitemaker_prompt::interpret;
//!
//! let patch = interpret("a calm dental clinic called Bright Smile").unwrap();
//! let brief = merge(&Brief::default(), &patch);
//! assert_eq!(brief.brand.industry, "clinic");
//! assert_eq!(brief.brand.name, "Bright Smile");
//! ```

pub mod interpreter;
pub mod name;
pub mod rules;

pub use interpreter::{MAX_PROMPT_CHARS, interpret};
pub use name::extract_name;
