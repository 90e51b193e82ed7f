//! The visual tree produced by the renderer.
//!
//! [`Page`] is a plain, owned tree of elements and text. It can be inspected
//! (tests, interaction resolution, reveal registration) and serialized to
//! HTML with [`Page::render_to_string`].

use std::borrow::Cow;

use serde::Serialize;

use crate::action::ActionBinding;

/// A node of the visual tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Page {
	/// An element.
	Element(PageElement),
	/// A text node.
	Text {
		/// The text.
		text: Cow<'static, str>,
	},
	/// Several nodes without a wrapper element.
	Fragment {
		/// The nodes.
		children: Vec<Page>,
	},
	/// Renders nothing.
	Empty,
}

/// An element of the visual tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	#[serde(skip_serializing_if = "Option::is_none")]
	action: Option<ActionBinding>,
	#[serde(skip)]
	is_void: bool,
}

impl PageElement {
	/// Creates an element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			action: None,
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a `class` attribute.
	pub fn class(self, class: impl Into<Cow<'static, str>>) -> Self {
		self.attr("class", class)
	}

	/// Adds a child.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoPage::into_page));
		self
	}

	/// Marks the element with an action.
	pub fn action(mut self, binding: ActionBinding) -> Self {
		self.action = Some(binding);
		self
	}

	/// The tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// The attributes, excluding the action binding.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// The value of attribute `name`, if present.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_ref())
	}

	/// The children.
	pub fn child_nodes(&self) -> &[Page] {
		&self.children
	}

	/// The action binding, if the element is interactive.
	pub fn binding(&self) -> Option<&ActionBinding> {
		self.action.as_ref()
	}

	/// Whether the element has no closing tag.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl Page {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text {
			text: content.into(),
		}
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment {
			children: children.into_iter().map(IntoPage::into_page).collect(),
		}
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// The element, when this node is one.
	pub fn as_element(&self) -> Option<&PageElement> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	/// The children of an element or fragment; empty otherwise.
	pub fn child_nodes(&self) -> &[Page] {
		match self {
			Self::Element(element) => &element.children,
			Self::Fragment { children } => children,
			Self::Text { .. } | Self::Empty => &[],
		}
	}

	/// The node reached by following child indices from this node.
	pub fn node_at(&self, path: &[usize]) -> Option<&Page> {
		path.iter()
			.try_fold(self, |node, &index| node.child_nodes().get(index))
	}

	/// The action of the nearest marked ancestor of the node at `path`,
	/// the node itself included.
	///
	/// Returns `None` when no node on the way is marked or the path does not
	/// lead to a node. At most one binding is ever returned, so a click
	/// inside nested interactive elements triggers only the innermost one.
	pub fn action_at(&self, path: &[usize]) -> Option<&ActionBinding> {
		let mut node = self;
		let mut nearest = node.as_element().and_then(PageElement::binding);
		for &index in path {
			node = node.child_nodes().get(index)?;
			if let Some(binding) = node.as_element().and_then(PageElement::binding) {
				nearest = Some(binding);
			}
		}
		nearest
	}

	/// Depth-first search for the element with `id`.
	pub fn find_by_id(&self, id: &str) -> Option<&PageElement> {
		if let Some(element) = self.as_element()
			&& element.attr_value("id") == Some(id)
		{
			return Some(element);
		}
		self.child_nodes()
			.iter()
			.find_map(|child| child.find_by_id(id))
	}

	/// Calls `visit` for every element, depth first, with its child-index path.
	pub fn walk_elements<'a>(&'a self, visit: &mut dyn FnMut(&[usize], &'a PageElement)) {
		let mut path = Vec::new();
		self.walk_inner(&mut path, visit);
	}

	fn walk_inner<'a>(
		&'a self,
		path: &mut Vec<usize>,
		visit: &mut dyn FnMut(&[usize], &'a PageElement),
	) {
		if let Some(element) = self.as_element() {
			visit(path, element);
		}
		for (index, child) in self.child_nodes().iter().enumerate() {
			path.push(index);
			child.walk_inner(path, visit);
			path.pop();
		}
	}

	/// All text below this node, concatenated.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.text_content_inner(&mut output);
		output
	}

	fn text_content_inner(&self, output: &mut String) {
		match self {
			Self::Text { text } => output.push_str(text),
			_ => {
				for child in self.child_nodes() {
					child.text_content_inner(output);
				}
			}
		}
	}

	/// Renders the tree to HTML. Text and attribute values are escaped.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					push_attr(output, name, value);
				}
				if let Some(binding) = el.binding() {
					for (name, value) in binding.to_attrs() {
						push_attr(output, &name, &value);
					}
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_nodes() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text { text } => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment { children } => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

fn push_attr(output: &mut String, name: &str, value: &str) {
	output.push(' ');
	output.push_str(name);
	output.push_str("=\"");
	output.push_str(&html_escape(value));
	output.push('"');
}

/// Escapes text for HTML content and double-quoted attribute values.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Conversion into a [`Page`] node.
pub trait IntoPage {
	/// Converts self into a node.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::text(self)
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::text(self)
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(node) => node.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::fragment(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::action::{OPEN_CONTACT, TOAST};
	use rstest::rstest;

	fn sample() -> Page {
		Page::element("section")
			.attr("id", "services")
			.child(
				Page::element("article")
					.action(ActionBinding::new(OPEN_CONTACT).param("service", "Audit"))
					.child(Page::element("h3").child("Audit"))
					.child(
						Page::element("button")
							.action(ActionBinding::new(TOAST).param("message", "Saved"))
							.child("Save"),
					),
			)
			.child(Page::element("p").child("Plain"))
			.into_page()
	}

	#[rstest]
	#[case(&[0, 0, 0], Some(OPEN_CONTACT))]
	#[case(&[0, 0], Some(OPEN_CONTACT))]
	#[case(&[0, 1], Some(TOAST))]
	#[case(&[0, 1, 0], Some(TOAST))]
	#[case(&[1, 0], None)]
	#[case(&[], None)]
	#[case(&[7], None)]
	fn test_action_at_resolves_nearest_marker(
		#[case] path: &[usize],
		#[case] expected: Option<&str>,
	) {
		let page = sample();

		let found = page.action_at(path).map(|binding| binding.name.as_str());

		assert_eq!(found, expected);
	}

	#[rstest]
	fn test_render_escapes_text_and_attributes() {
		let page = Page::element("p")
			.attr("title", "\"quoted\" & <tag>")
			.child("Harbor & Sage <script>")
			.into_page();

		assert_eq!(
			page.render_to_string(),
			"<p title=\"&quot;quoted&quot; &amp; &lt;tag&gt;\">Harbor &amp; Sage &lt;script&gt;</p>"
		);
	}

	#[rstest]
	fn test_render_flattens_bindings_into_data_attributes() {
		let page = Page::element("button")
			.action(ActionBinding::new("select-plan").param("plan-name", "Growth"))
			.child("Choose Growth")
			.into_page();

		assert_eq!(
			page.render_to_string(),
			"<button data-action=\"select-plan\" data-plan-name=\"Growth\">Choose Growth</button>"
		);
	}

	#[rstest]
	fn test_void_elements_self_close() {
		let page = Page::element("img").attr("src", "/a.png").into_page();

		assert_eq!(page.render_to_string(), "<img src=\"/a.png\" />");
	}

	#[rstest]
	fn test_find_by_id_and_text_content() {
		let page = Page::fragment(vec![Page::empty(), sample()]);

		let section = page.find_by_id("services").unwrap();

		assert_eq!(section.tag_name(), "section");
		assert_eq!(page.text_content(), "AuditSavePlain");
	}

	#[rstest]
	fn test_walk_elements_reports_paths() {
		let page = sample();
		let mut marked = Vec::new();

		page.walk_elements(&mut |path, element| {
			if element.binding().is_some() {
				marked.push(path.to_vec());
			}
		});

		assert_eq!(marked, vec![vec![0], vec![0, 1]]);
	}
}
