//! # Sitemaker Dispatch
//!
//! Routes interactions on a rendered preview to named action handlers.
//!
//! ## Overview
//!
//! The dispatch system handles:
//! - Resolving the nearest marked element for an interaction
//! - Normalizing hyphen-case parameter keys to camelCase
//! - Running exactly one handler per interaction
//! - Containing handler failures behind a toast
//!
//! ## Architecture
//!
//! ```text
//! Interaction → Page::action_at → ActionEvent → ActionDispatcher → ActionHandler
//!                                                      ↓                ↓
//!                                               warn (unknown)    Capabilities
//! ```
//!
//! Handlers never see the Brief or the DSL; their only reach into the world
//! is the [`Capabilities`] trait.
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use sitemaker_dispatch::{ActionDispatcher, Capabilities, DispatchOutcome, ModalContent};
//!
//! struct Quiet;
//!
//! impl Capabilities for Quiet {
//! 	fn open_modal(&self, _content: ModalContent) {}
//! 	fn close_modal(&self) {}
//! 	fn scroll_to(&self, _id: &str) {}
//! 	fn navigate(&self, _hash: &str) {}
//! 	fn toast(&self, _message: &str) {}
//! }
//!
//! # futures::executor::block_on(async {
//! let dispatcher = ActionDispatcher::with_builtins();
//! let outcome = dispatcher.dispatch("toast", &BTreeMap::new(), &Quiet).await;
//! assert_eq!(outcome, DispatchOutcome::Handled);
//! # });
//! ```

pub mod builtin;
pub mod capabilities;
pub mod dispatcher;
pub mod event;
pub mod handler;

pub use builtin::{BookCall, CloseModal, DEFAULT_CALENDAR_URL, OpenContact, SelectPlan, Toast};
pub use capabilities::{Capabilities, ModalContent, ModalLink};
pub use dispatcher::{ActionDispatcher, DispatchOutcome};
pub use event::{ActionEvent, normalize_param_key};
pub use handler::{ActionHandler, FnHandler, handler_fn};

/// Errors a handler can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
	/// A required parameter was absent
	#[error("missing parameter: {0}")]
	MissingParameter(String),

	/// The handler could not complete
	#[error("action failed: {0}")]
	Failed(String),

	/// The handler panicked; the payload message is kept
	#[error("action panicked: {0}")]
	Panicked(String),
}
