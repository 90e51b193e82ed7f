//! Dispatcher integration tests
//!
//! Interactions on real rendered pages, the unknown-action log and the
//! failure boundary around misbehaving handlers.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use parking_lot::Mutex as StateMutex;
use rstest::*;
use serde_json::json;
use serial_test::serial;
use sitemaker_core::{Brief, BriefPatch, merge};
use sitemaker_dispatch::{
	ActionDispatcher, ActionError, Capabilities, DispatchOutcome, ModalContent, handler_fn,
};
use sitemaker_dsl::compile;
use sitemaker_pages::{Page, render};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// A tracing layer that captures log messages to a Vec<String>
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		let mut logs = self.logs.lock().unwrap();
		logs.push(format!("[{}] {}", event.metadata().level(), visitor.message));
	}
}

/// Preview state as a host would keep it: one modal slot and some logs.
#[derive(Default)]
struct PreviewState {
	modal: StateMutex<Option<ModalContent>>,
	toasts: StateMutex<Vec<String>>,
	hashes: StateMutex<Vec<String>>,
	scrolled: StateMutex<Vec<String>>,
}

impl Capabilities for PreviewState {
	fn open_modal(&self, content: ModalContent) {
		*self.modal.lock() = Some(content);
	}

	fn close_modal(&self) {
		*self.modal.lock() = None;
	}

	fn scroll_to(&self, id: &str) {
		self.scrolled.lock().push(id.to_string());
	}

	fn navigate(&self, hash: &str) {
		self.hashes.lock().push(hash.to_string());
	}

	fn toast(&self, message: &str) {
		self.toasts.lock().push(message.to_string());
	}
}

#[fixture]
fn page() -> Page {
	let brief = merge(
		&Brief::default(),
		&BriefPatch::from_value(json!({
			"pages": {
				"order": ["header", "services", "pricing", "contact"],
				"enabledByKey": { "services": true, "pricing": true, "contact": true }
			}
		})),
	);
	render(&compile(&brief))
}

/// Path of the first element inside `section_id` whose text contains `label`
/// and which carries an action.
fn marked_path(page: &Page, section_id: &str, label: &str) -> Vec<usize> {
	let mut section_path = None;
	page.walk_elements(&mut |path, element| {
		if section_path.is_none() && element.attr_value("id") == Some(section_id) {
			section_path = Some(path.to_vec());
		}
	});
	let section_path = section_path.unwrap();

	let mut found = None;
	page.walk_elements(&mut |path, element| {
		if found.is_none()
			&& path.starts_with(&section_path)
			&& element.binding().is_some()
			&& Page::Element(element.clone()).text_content().contains(label)
		{
			found = Some(path.to_vec());
		}
	});
	found.unwrap()
}

#[rstest]
#[tokio::test]
async fn test_choose_growth_opens_selected_modal(page: Page) {
	// Arrange
	let dispatcher = ActionDispatcher::with_builtins();
	let state = PreviewState::default();
	let mut path = marked_path(&page, "pricing", "Choose Growth");
	// The button's text node, one level below the marked element
	path.push(0);

	// Act
	let outcome = dispatcher.dispatch_interaction(&page, &path, &state).await;

	// Assert
	assert_eq!(outcome, DispatchOutcome::Handled);
	let modal = state.modal.lock().clone().unwrap();
	assert_eq!(modal.title, "Selected: Growth");
	assert!(state.toasts.lock().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_book_call_then_continue_to_contact(page: Page) {
	let dispatcher = ActionDispatcher::with_builtins();
	let state = PreviewState::default();
	let path = marked_path(&page, "contact", "Book a call");

	dispatcher.dispatch_interaction(&page, &path, &state).await;
	let modal = state.modal.lock().clone().unwrap();
	let follow_up = modal
		.links
		.iter()
		.find_map(|link| link.action.clone())
		.unwrap();
	dispatcher.dispatch(&follow_up, &BTreeMap::new(), &state).await;

	assert_eq!(modal.title, "Book a call");
	assert!(state.modal.lock().is_none());
	assert_eq!(*state.hashes.lock(), vec!["#contact".to_string()]);
	assert_eq!(*state.scrolled.lock(), vec!["contact".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_enquire_on_a_service_goes_to_contact(page: Page) {
	let dispatcher = ActionDispatcher::with_builtins();
	let state = PreviewState::default();
	let path = marked_path(&page, "services", "Enquire");

	let outcome = dispatcher.dispatch_interaction(&page, &path, &state).await;

	assert_eq!(outcome, DispatchOutcome::Handled);
	assert_eq!(*state.scrolled.lock(), vec!["contact".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_interaction_outside_any_marker_does_nothing(page: Page) {
	let dispatcher = ActionDispatcher::with_builtins();
	let state = PreviewState::default();

	let outcome = dispatcher.dispatch_interaction(&page, &[], &state).await;

	assert_eq!(outcome, DispatchOutcome::NoAction);
	assert!(state.modal.lock().is_none());
	assert!(state.toasts.lock().is_empty());
}

#[rstest]
#[serial(tracing_capture)]
#[tokio::test]
async fn test_unknown_action_is_logged_without_effects() {
	// Arrange
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	let _guard = tracing_subscriber::registry().with(capture).set_default();
	let dispatcher = ActionDispatcher::with_builtins();
	let state = PreviewState::default();

	// Act
	let outcome = dispatcher
		.dispatch("teleport", &BTreeMap::new(), &state)
		.await;

	// Assert
	assert_eq!(outcome, DispatchOutcome::Unknown);
	assert!(state.modal.lock().is_none());
	assert!(state.toasts.lock().is_empty());
	let captured = logs.lock().unwrap();
	assert!(
		captured
			.iter()
			.any(|log| log.contains("WARN") && log.contains("unknown action")),
		"Expected a warning for the unknown action, but got: {:?}",
		*captured
	);
}

#[rstest]
#[tokio::test]
async fn test_panicking_handler_leaves_preview_usable(page: Page) {
	let mut dispatcher = ActionDispatcher::with_builtins();
	dispatcher.register(
		"select-plan",
		handler_fn(|event, _| match event.param("planName") {
			Some("Scale") => panic!("scale tier is not wired up"),
			_ => Err(ActionError::MissingParameter("planName".to_string())),
		}),
	);
	let state = PreviewState::default();
	let path = marked_path(&page, "pricing", "Choose Scale");

	let outcome = dispatcher.dispatch_interaction(&page, &path, &state).await;
	let after = dispatcher.dispatch("toast", &BTreeMap::new(), &state).await;

	assert_eq!(
		outcome,
		DispatchOutcome::Failed(ActionError::Panicked(
			"scale tier is not wired up".to_string()
		))
	);
	assert_eq!(after, DispatchOutcome::Handled);
	let toasts = state.toasts.lock().clone();
	assert_eq!(toasts.len(), 2);
	assert!(toasts[0].starts_with("Something went wrong"));
	assert_eq!(toasts[1], "Done");
}
