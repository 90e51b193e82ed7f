//! Reveal-on-scroll hooks.
//!
//! Every section root carries a `data-reveal` marker. The animation itself is
//! driven by an external observer; this module only finds the marked
//! elements and hands them over.

use crate::view::Page;

/// Attribute marking an element as a reveal target.
pub const REVEAL_ATTR: &str = "data-reveal";

/// An element that should animate in when scrolled into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
	/// The element id.
	pub id: String,
	/// The section kind stored in the marker.
	pub kind: String,
	/// Child-index path from the page root.
	pub path: Vec<usize>,
}

/// The external collaborator that triggers reveal animations.
pub trait RevealObserver {
	/// Starts observing `target`.
	fn observe(&self, target: &RevealTarget);
}

/// Lists every reveal target in document order.
pub fn collect_reveal_targets(page: &Page) -> Vec<RevealTarget> {
	let mut targets = Vec::new();
	page.walk_elements(&mut |path, element| {
		if let Some(kind) = element.attr_value(REVEAL_ATTR) {
			targets.push(RevealTarget {
				id: element.attr_value("id").unwrap_or_default().to_string(),
				kind: kind.to_string(),
				path: path.to_vec(),
			});
		}
	});
	targets
}

/// Registers every reveal target with `observer` and returns how many were
/// registered.
pub fn mount_reveal(page: &Page, observer: &dyn RevealObserver) -> usize {
	let targets = collect_reveal_targets(page);
	for target in &targets {
		observer.observe(target);
	}
	tracing::debug!(count = targets.len(), "registered reveal targets");
	targets.len()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::IntoPage;
	use rstest::rstest;
	use std::cell::RefCell;

	#[derive(Default)]
	struct RecordingObserver {
		seen: RefCell<Vec<String>>,
	}

	impl RevealObserver for RecordingObserver {
		fn observe(&self, target: &RevealTarget) {
			self.seen.borrow_mut().push(target.id.clone());
		}
	}

	fn page() -> Page {
		Page::element("main")
			.child(
				Page::element("section")
					.attr("id", "hero")
					.attr(REVEAL_ATTR, "hero"),
			)
			.child(Page::element("div").child("not a section"))
			.child(
				Page::element("section")
					.attr("id", "faq")
					.attr(REVEAL_ATTR, "faq"),
			)
			.into_page()
	}

	#[rstest]
	fn test_collect_reveal_targets() {
		let targets = collect_reveal_targets(&page());

		assert_eq!(targets.len(), 2);
		assert_eq!(targets[1].id, "faq");
		assert_eq!(targets[1].path, vec![2]);
	}

	#[rstest]
	fn test_mount_reveal_registers_in_order() {
		let observer = RecordingObserver::default();

		let count = mount_reveal(&page(), &observer);

		assert_eq!(count, 2);
		assert_eq!(*observer.seen.borrow(), vec!["hero", "faq"]);
	}
}
