//! Name-to-handler routing with a failure boundary.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use sitemaker_pages::Page;
use sitemaker_pages::action::{BOOK_CALL, CLOSE_MODAL, OPEN_CONTACT, SELECT_PLAN, TOAST};

use crate::ActionError;
use crate::builtin::{BookCall, CloseModal, OpenContact, SelectPlan, Toast};
use crate::capabilities::Capabilities;
use crate::event::ActionEvent;
use crate::handler::ActionHandler;

/// What happened to one dispatched interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
	/// The handler ran to completion.
	Handled,
	/// No handler is registered under the name; nothing happened.
	Unknown,
	/// The handler failed or panicked; the user was shown a toast.
	Failed(ActionError),
	/// The interaction hit no marked element.
	NoAction,
}

/// Routes action names to handlers.
#[derive(Clone)]
pub struct ActionDispatcher {
	handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl std::fmt::Debug for ActionDispatcher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActionDispatcher")
			.field("actions", &self.names())
			.finish()
	}
}

impl Default for ActionDispatcher {
	fn default() -> Self {
		Self::with_builtins()
	}
}

impl ActionDispatcher {
	/// Creates a dispatcher with no handlers.
	pub fn new() -> Self {
		Self {
			handlers: HashMap::new(),
		}
	}

	/// Creates a dispatcher with the built-in handlers registered.
	pub fn with_builtins() -> Self {
		let mut dispatcher = Self::new();
		dispatcher.register(BOOK_CALL, Arc::new(BookCall::default()));
		dispatcher.register(SELECT_PLAN, Arc::new(SelectPlan));
		dispatcher.register(OPEN_CONTACT, Arc::new(OpenContact));
		dispatcher.register(TOAST, Arc::new(Toast));
		dispatcher.register(CLOSE_MODAL, Arc::new(CloseModal));
		dispatcher
	}

	/// Registers `handler` under `name`, replacing any previous handler.
	pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn ActionHandler>) {
		let name = name.into();
		if self.handlers.insert(name.clone(), handler).is_some() {
			tracing::debug!(action = %name, "replaced action handler");
		}
	}

	/// Removes the handler under `name`.
	pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn ActionHandler>> {
		self.handlers.remove(name)
	}

	/// Whether a handler is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.handlers.contains_key(name)
	}

	/// Registered action names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Dispatches `name` with hyphen-case `params`.
	pub async fn dispatch(
		&self,
		name: &str,
		params: &BTreeMap<String, String>,
		caps: &dyn Capabilities,
	) -> DispatchOutcome {
		self.dispatch_event(&ActionEvent::new(name, params), caps)
			.await
	}

	/// Dispatches an already-normalized event.
	///
	/// Handler errors and panics are caught here: they are logged, reported
	/// with a toast and turned into [`DispatchOutcome::Failed`].
	pub async fn dispatch_event(&self, event: &ActionEvent, caps: &dyn Capabilities) -> DispatchOutcome {
		let Some(handler) = self.handlers.get(&event.name) else {
			tracing::warn!(action = %event.name, "unknown action");
			return DispatchOutcome::Unknown;
		};

		tracing::debug!(action = %event.name, params = ?event.parameters, "dispatching action");

		let result = AssertUnwindSafe(handler.handle(event, caps))
			.catch_unwind()
			.await
			.unwrap_or_else(|payload| Err(ActionError::Panicked(panic_message(payload.as_ref()))));

		match result {
			Ok(()) => DispatchOutcome::Handled,
			Err(err) => {
				tracing::error!(action = %event.name, error = %err, "action handler failed");
				caps.toast(&format!("Something went wrong: {err}"));
				DispatchOutcome::Failed(err)
			}
		}
	}

	/// Dispatches the action of the nearest marked ancestor of the node at
	/// `path`, if any. At most one handler runs per interaction.
	pub async fn dispatch_interaction(
		&self,
		page: &Page,
		path: &[usize],
		caps: &dyn Capabilities,
	) -> DispatchOutcome {
		match page.action_at(path) {
			Some(binding) => {
				self.dispatch_event(&ActionEvent::from_binding(binding), caps)
					.await
			}
			None => {
				tracing::debug!(?path, "interaction hit no action");
				DispatchOutcome::NoAction
			}
		}
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"handler panicked".to_string()
	}
}
