//! Site DSL and the compiler.

pub use sitemaker_dsl::*;
