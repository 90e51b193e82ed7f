//! The action handler trait and a closure adapter.

use std::sync::Arc;

use async_trait::async_trait;

use crate::ActionError;
use crate::capabilities::Capabilities;
use crate::event::ActionEvent;

/// Performs one named action.
///
/// Handlers receive the event with camelCase parameter keys and act only
/// through `caps`. Returning `Err` (or panicking) is reported to the user by
/// the dispatcher; it never propagates further.
#[async_trait]
pub trait ActionHandler: Send + Sync {
	/// Handles `event`.
	async fn handle(&self, event: &ActionEvent, caps: &dyn Capabilities) -> Result<(), ActionError>;
}

/// A handler backed by a synchronous closure.
pub struct FnHandler<F> {
	f: F,
}

#[async_trait]
impl<F> ActionHandler for FnHandler<F>
where
	F: Fn(&ActionEvent, &dyn Capabilities) -> Result<(), ActionError> + Send + Sync,
{
	async fn handle(&self, event: &ActionEvent, caps: &dyn Capabilities) -> Result<(), ActionError> {
		(self.f)(event, caps)
	}
}

/// Wraps a closure as a shareable [`ActionHandler`].
///
/// ```rust
/// use sitemaker_dispatch::{ActionDispatcher, handler_fn};
///
/// let mut dispatcher = ActionDispatcher::new();
/// dispatcher.register(
/// 	"say-hi",
/// 	handler_fn(|event, caps| {
/// 		caps.toast(event.param_or("name", "there"));
/// 		Ok(())
/// 	}),
/// );
/// assert!(dispatcher.contains("say-hi"));
/// ```
pub fn handler_fn<F>(f: F) -> Arc<dyn ActionHandler>
where
	F: Fn(&ActionEvent, &dyn Capabilities) -> Result<(), ActionError> + Send + Sync + 'static,
{
	Arc::new(FnHandler { f })
}
