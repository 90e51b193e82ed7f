//! The capability set handlers act through.

use serde::{Deserialize, Serialize};

/// Side effects a handler may perform on the preview UI.
///
/// Handlers see nothing but this trait: no Brief, no DSL, no renderer.
pub trait Capabilities: Send + Sync {
	/// Shows `content` in the single modal slot, replacing whatever was there.
	fn open_modal(&self, content: ModalContent);

	/// Clears the modal slot.
	fn close_modal(&self);

	/// Scrolls the element with `id` into view.
	fn scroll_to(&self, id: &str);

	/// Sets the location hash, e.g. `#contact`.
	fn navigate(&self, hash: &str);

	/// Shows a transient notification.
	fn toast(&self, message: &str);
}

/// Content of the modal slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalContent {
	/// Identifies which action opened the modal.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Heading.
	pub title: String,
	/// Body text.
	pub body: String,
	/// Call-to-action links under the body.
	#[serde(default)]
	pub links: Vec<ModalLink>,
}

impl ModalContent {
	/// Creates a modal with a title and body.
	pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			id: None,
			title: title.into(),
			body: body.into(),
			links: Vec::new(),
		}
	}

	/// Sets the id.
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Appends a link.
	pub fn with_link(mut self, link: ModalLink) -> Self {
		self.links.push(link);
		self
	}
}

/// A link rendered under the modal body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalLink {
	/// Visible label.
	pub label: String,
	/// Target URL or anchor.
	pub href: String,
	/// Action triggered when the link is activated, if any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
}

impl ModalLink {
	/// Creates a plain link.
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
			action: None,
		}
	}

	/// Makes the link trigger `action`.
	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}
}
