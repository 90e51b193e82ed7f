//! Preview controller.
//!
//! [`MakerStore`] owns the current [`Brief`], the compiled [`SiteDsl`]
//! snapshot and the UI state handlers act on. Every Brief change goes through
//! the pure [`reduce`] transition, which recompiles and swaps the snapshot;
//! readers holding an older `Arc<SiteDsl>` keep a consistent document.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use sitemaker_core::{Brief, BriefPatch, merge};
use sitemaker_dispatch::{ActionDispatcher, Capabilities, DispatchOutcome, ModalContent};
use sitemaker_dsl::{SiteDsl, compile};
use sitemaker_pages::{Page, RenderOptions, Renderer, SsrOptions, SsrRenderer};

/// A Brief and the document compiled from it.
#[derive(Debug, Clone, PartialEq)]
pub struct MakerState {
	/// The operator's configuration.
	pub brief: Brief,
	/// `compile(&brief)`, shared with renderers.
	pub dsl: Arc<SiteDsl>,
}

impl MakerState {
	/// Compiles `brief` into a fresh state.
	pub fn new(brief: Brief) -> Self {
		let dsl = Arc::new(compile(&brief));
		Self { brief, dsl }
	}
}

impl Default for MakerState {
	fn default() -> Self {
		Self::new(Brief::default())
	}
}

/// Applies `patch` to `state` and recompiles.
///
/// Pure: `state` is left untouched. An empty patch reuses the existing
/// snapshot.
pub fn reduce(state: &MakerState, patch: &BriefPatch) -> MakerState {
	if patch.is_empty() {
		return state.clone();
	}
	MakerState::new(merge(&state.brief, patch))
}

/// What the preview currently shows besides the page itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
	/// The single modal slot.
	pub modal: Option<ModalContent>,
	/// Toasts in the order they were raised.
	pub toasts: Vec<String>,
	/// Last location hash set by `navigate`.
	pub location_hash: Option<String>,
	/// Element ids scrolled to, in order.
	pub scrolled_to: Vec<String>,
}

/// Preview UI state, shared with action handlers as their [`Capabilities`].
///
/// The modal slot is last-writer-wins.
#[derive(Debug, Default)]
pub struct UiState {
	inner: Mutex<UiSnapshot>,
}

impl UiState {
	pub fn new() -> Self {
		Self::default()
	}

	/// A copy of the current state.
	pub fn snapshot(&self) -> UiSnapshot {
		self.inner.lock().clone()
	}

	/// The modal currently shown, if any.
	pub fn modal(&self) -> Option<ModalContent> {
		self.inner.lock().modal.clone()
	}

	/// Drains raised toasts.
	pub fn take_toasts(&self) -> Vec<String> {
		std::mem::take(&mut self.inner.lock().toasts)
	}

	/// Clears everything.
	pub fn clear(&self) {
		*self.inner.lock() = UiSnapshot::default();
	}
}

impl Capabilities for UiState {
	fn open_modal(&self, content: ModalContent) {
		self.inner.lock().modal = Some(content);
	}

	fn close_modal(&self) {
		self.inner.lock().modal = None;
	}

	fn scroll_to(&self, id: &str) {
		self.inner.lock().scrolled_to.push(id.to_string());
	}

	fn navigate(&self, hash: &str) {
		self.inner.lock().location_hash = Some(hash.to_string());
	}

	fn toast(&self, message: &str) {
		self.inner.lock().toasts.push(message.to_string());
	}
}

/// A standalone export: the document and its HTML, from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
	/// Pretty-printed Site DSL.
	pub dsl_json: String,
	/// Self-contained HTML document.
	pub html: String,
}

/// The preview controller.
pub struct MakerStore {
	state: MakerState,
	ui: UiState,
	dispatcher: ActionDispatcher,
	renderer: Renderer,
	exporter: SsrRenderer,
}

impl Default for MakerStore {
	fn default() -> Self {
		Self::new()
	}
}

impl MakerStore {
	/// A store on the default Brief with built-in actions.
	pub fn new() -> Self {
		Self::with_brief(Brief::default())
	}

	/// A store on `brief` with built-in actions.
	pub fn with_brief(brief: Brief) -> Self {
		Self {
			state: MakerState::new(brief),
			ui: UiState::new(),
			dispatcher: ActionDispatcher::with_builtins(),
			renderer: Renderer::new(),
			exporter: SsrRenderer::new(),
		}
	}

	/// Replaces the export options. Their render options also drive
	/// [`render`](Self::render).
	pub fn with_export_options(mut self, options: SsrOptions) -> Self {
		self.renderer = Renderer::with_options(options.render.clone());
		self.exporter = SsrRenderer::with_options(options);
		self
	}

	/// Replaces the preview render options.
	pub fn with_render_options(mut self, options: RenderOptions) -> Self {
		self.renderer = Renderer::with_options(options);
		self
	}

	pub fn brief(&self) -> &Brief {
		&self.state.brief
	}

	/// The current snapshot.
	pub fn dsl(&self) -> Arc<SiteDsl> {
		Arc::clone(&self.state.dsl)
	}

	pub fn state(&self) -> &MakerState {
		&self.state
	}

	pub fn ui(&self) -> &UiState {
		&self.ui
	}

	/// For registering custom actions.
	pub fn dispatcher_mut(&mut self) -> &mut ActionDispatcher {
		&mut self.dispatcher
	}

	/// Merges `patch` into the Brief and recompiles.
	pub fn apply_patch(&mut self, patch: &BriefPatch) -> Arc<SiteDsl> {
		self.state = reduce(&self.state, patch);
		tracing::debug!(sections = self.state.dsl.home().map_or(0, |page| page.sections.len()), "brief updated");
		self.dsl()
	}

	/// Replaces the Brief wholesale.
	pub fn replace_brief(&mut self, brief: Brief) -> Arc<SiteDsl> {
		self.state = MakerState::new(brief);
		self.dsl()
	}

	/// Interprets `text` and applies the resulting patch.
	///
	/// Returns `false`, changing nothing, when the text is blank.
	#[cfg(feature = "prompt")]
	pub fn apply_prompt(&mut self, text: &str) -> bool {
		match sitemaker_prompt::interpret(text) {
			Some(patch) => {
				self.apply_patch(&patch);
				true
			}
			None => false,
		}
	}

	/// Restores the default Brief and clears the UI.
	pub fn reset(&mut self) {
		self.state = MakerState::default();
		self.ui.clear();
	}

	/// Renders the current snapshot.
	pub fn render(&self) -> Page {
		self.renderer.render(&self.state.dsl)
	}

	/// Dispatches `name` against this store's UI.
	pub async fn dispatch(&self, name: &str, params: &BTreeMap<String, String>) -> DispatchOutcome {
		self.dispatcher.dispatch(name, params, &self.ui).await
	}

	/// Dispatches the interaction at `path` in `page`.
	pub async fn interact(&self, page: &Page, path: &[usize]) -> DispatchOutcome {
		self.dispatcher.dispatch_interaction(page, path, &self.ui).await
	}

	/// Exports the current snapshot.
	pub fn export(&self) -> sitemaker_core::Result<ExportBundle> {
		let dsl = self.dsl();
		Ok(ExportBundle {
			dsl_json: dsl.to_json_pretty()?,
			html: self.exporter.render_document(&dsl),
		})
	}
}

#[cfg(feature = "conf")]
impl MakerStore {
	/// A store configured from operator settings.
	pub fn from_settings(settings: &sitemaker_conf::Settings) -> Self {
		Self::new().with_export_options(export_options(settings))
	}
}

/// Export options described by `settings`.
#[cfg(feature = "conf")]
pub fn export_options(settings: &sitemaker_conf::Settings) -> SsrOptions {
	let mut options = SsrOptions::new()
		.lang(settings.export.lang.clone())
		.embed_dsl(settings.export.embed_dsl)
		.render_options(RenderOptions::new().reveal(settings.preview.reveal));
	if settings.export.minify {
		options = options.minify();
	}
	if let Some(suffix) = &settings.export.title_suffix {
		options = options.title_suffix(suffix.clone());
	}
	options
}
