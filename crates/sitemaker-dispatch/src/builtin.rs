//! Built-in action handlers.

use async_trait::async_trait;
use sitemaker_pages::action::{BOOK_CALL, OPEN_CONTACT, SELECT_PLAN};

use crate::ActionError;
use crate::capabilities::{Capabilities, ModalContent, ModalLink};
use crate::event::ActionEvent;
use crate::handler::ActionHandler;

/// Default scheduling link shown by [`BookCall`].
pub const DEFAULT_CALENDAR_URL: &str = "https://cal.com/your-handle";

const CONTACT_ID: &str = "contact";

/// `book-call`: opens a modal with a calendar link and a contact link.
#[derive(Debug, Clone)]
pub struct BookCall {
	calendar_url: String,
}

impl Default for BookCall {
	fn default() -> Self {
		Self::new(DEFAULT_CALENDAR_URL)
	}
}

impl BookCall {
	/// Uses `calendar_url` for the "Open calendar" link.
	pub fn new(calendar_url: impl Into<String>) -> Self {
		Self {
			calendar_url: calendar_url.into(),
		}
	}
}

#[async_trait]
impl ActionHandler for BookCall {
	async fn handle(&self, _event: &ActionEvent, caps: &dyn Capabilities) -> Result<(), ActionError> {
		caps.open_modal(
			ModalContent::new("Book a call", "Pick a time and we’ll confirm by email.")
				.with_id(BOOK_CALL)
				.with_link(ModalLink::new("Open calendar", self.calendar_url.clone()))
				.with_link(ModalLink::new("Or write to us", "#contact").with_action(OPEN_CONTACT)),
		);
		Ok(())
	}
}

/// `select-plan`: confirms the chosen tier (`planName`, default `Plan`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectPlan;

#[async_trait]
impl ActionHandler for SelectPlan {
	async fn handle(&self, event: &ActionEvent, caps: &dyn Capabilities) -> Result<(), ActionError> {
		let plan = event.param_or("planName", "Plan");
		caps.open_modal(
			ModalContent::new(
				format!("Selected: {plan}"),
				format!("We’ll pre-fill your brief with the {plan} tier."),
			)
			.with_id(SELECT_PLAN)
			.with_link(ModalLink::new("Continue to contact", "#contact").with_action(OPEN_CONTACT)),
		);
		Ok(())
	}
}

/// `open-contact`: jumps to the contact section.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenContact;

#[async_trait]
impl ActionHandler for OpenContact {
	async fn handle(&self, _event: &ActionEvent, caps: &dyn Capabilities) -> Result<(), ActionError> {
		caps.close_modal();
		caps.navigate("#contact");
		caps.scroll_to(CONTACT_ID);
		Ok(())
	}
}

/// `toast`: shows the `message` parameter (default `Done`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Toast;

#[async_trait]
impl ActionHandler for Toast {
	async fn handle(&self, event: &ActionEvent, caps: &dyn Capabilities) -> Result<(), ActionError> {
		caps.toast(event.param_or("message", "Done"));
		Ok(())
	}
}

/// `close-modal`: clears the modal slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseModal;

#[async_trait]
impl ActionHandler for CloseModal {
	async fn handle(&self, _event: &ActionEvent, caps: &dyn Capabilities) -> Result<(), ActionError> {
		caps.close_modal();
		Ok(())
	}
}
