//! Standalone HTML export.
//!
//! [`SsrRenderer`] wraps a rendered site in a complete HTML document: theme
//! tokens and brand colors become CSS custom properties in `<head>`, and the
//! Site DSL can optionally be embedded as JSON for later re-hydration.

use sitemaker_dsl::SiteDsl;

use crate::renderer::{RenderOptions, Renderer};
use crate::view::html_escape;

/// Id of the `<script>` element holding the embedded Site DSL.
pub const DSL_SCRIPT_ID: &str = "site-dsl";

/// Options for document export.
#[derive(Debug, Clone)]
pub struct SsrOptions {
	/// Language attribute for the `html` element.
	pub lang: String,
	/// Whether to collapse whitespace in the output.
	pub minify: bool,
	/// Whether to embed the Site DSL as a JSON script.
	pub embed_dsl: bool,
	/// Appended to the brand name in `<title>`.
	pub title_suffix: Option<String>,
	/// Options for the body renderer.
	pub render: RenderOptions,
}

impl Default for SsrOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			minify: false,
			embed_dsl: true,
			title_suffix: None,
			render: RenderOptions::default(),
		}
	}
}

impl SsrOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Enables minification.
	pub fn minify(mut self) -> Self {
		self.minify = true;
		self
	}

	/// Sets whether the Site DSL is embedded.
	pub fn embed_dsl(mut self, embed: bool) -> Self {
		self.embed_dsl = embed;
		self
	}

	/// Sets the title suffix.
	pub fn title_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.title_suffix = Some(suffix.into());
		self
	}

	/// Sets the body render options.
	pub fn render_options(mut self, render: RenderOptions) -> Self {
		self.render = render;
		self
	}
}

/// Exports a Site DSL as a standalone HTML document.
#[derive(Debug, Clone, Default)]
pub struct SsrRenderer {
	options: SsrOptions,
}

impl SsrRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: SsrOptions) -> Self {
		Self { options }
	}

	/// The options in use.
	pub fn options(&self) -> &SsrOptions {
		&self.options
	}

	/// Renders `dsl` to a complete HTML document.
	pub fn render_document(&self, dsl: &SiteDsl) -> String {
		let content = Renderer::with_options(self.options.render.clone())
			.render(dsl)
			.render_to_string();

		let mut html = String::with_capacity(content.len() + 2048);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!(
			"<html lang=\"{}\">\n",
			html_escape(&self.options.lang)
		));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		html.push_str(&format!(
			"<title>{}</title>\n",
			html_escape(&self.title(dsl))
		));
		if !dsl.meta.brand.tagline.is_empty() {
			html.push_str(&format!(
				"<meta name=\"description\" content=\"{}\">\n",
				html_escape(&dsl.meta.brand.tagline)
			));
		}
		html.push_str("<style>\n");
		html.push_str(&theme_stylesheet(dsl));
		html.push_str("</style>\n");
		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str("<div id=\"app\">");
		html.push_str(&content);
		html.push_str("</div>\n");

		if self.options.embed_dsl {
			match dsl.to_json() {
				Ok(json) => html.push_str(&format!(
					"<script id=\"{DSL_SCRIPT_ID}\" type=\"application/json\">{}</script>\n",
					escape_json_for_script(&json)
				)),
				Err(err) => tracing::warn!(error = %err, "could not embed site DSL"),
			}
		}

		html.push_str("</body>\n");
		html.push_str("</html>");

		tracing::debug!(bytes = html.len(), minify = self.options.minify, "exported document");

		if self.options.minify {
			minify_html(&html)
		} else {
			html
		}
	}

	fn title(&self, dsl: &SiteDsl) -> String {
		match &self.options.title_suffix {
			Some(suffix) if !suffix.is_empty() => format!("{}{}", dsl.meta.brand.name, suffix),
			_ => dsl.meta.brand.name.clone(),
		}
	}
}

/// `:root` custom properties for the brand colors and theme tokens.
fn theme_stylesheet(dsl: &SiteDsl) -> String {
	let colors = &dsl.meta.brand.colors;
	let mut vars = vec![
		("--color-primary".to_string(), colors.primary.clone()),
		("--color-accent".to_string(), colors.accent.clone()),
		("--color-neutral".to_string(), colors.neutral.clone()),
	];
	vars.extend(dsl.meta.theme.css_variables());

	let mut css = String::from(":root {\n");
	for (name, value) in vars {
		css.push_str(&format!("  {name}: {};\n", css_value(&value)));
	}
	css.push_str("}\n");
	css
}

/// Drops characters that could end the declaration or the style element.
fn css_value(value: &str) -> String {
	value
		.chars()
		.filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\'' | '\\'))
		.collect()
}

/// Escapes JSON for embedding in a `<script>` element by breaking up `</`.
fn escape_json_for_script(json: &str) -> String {
	json.replace("</", "<\\/")
}

/// Inputs above this size are returned unmodified.
const MINIFY_HTML_MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Elements whose content is copied verbatim by [`minify_html`].
const PRESERVED_ELEMENTS: [&str; 3] = ["pre", "script", "textarea"];

/// Collapses runs of whitespace outside `<pre>`, `<script>` and `<textarea>`
/// elements. The embedded Site DSL lives in a script, so its strings survive.
fn minify_html(html: &str) -> String {
	if html.len() > MINIFY_HTML_MAX_INPUT_SIZE {
		return html.to_string();
	}

	let mut result = String::with_capacity(html.len());
	let mut prev_was_whitespace = false;
	let mut pos = 0;

	while let Some(c) = html[pos..].chars().next() {
		if c == '<'
			&& let Some(end) = preserved_block_end(&html[pos..])
		{
			result.push_str(&html[pos..pos + end]);
			pos += end;
			prev_was_whitespace = false;
			continue;
		}

		if c.is_whitespace() {
			if !prev_was_whitespace {
				result.push(' ');
				prev_was_whitespace = true;
			}
		} else {
			result.push(c);
			prev_was_whitespace = false;
		}
		pos += c.len_utf8();
	}

	result
}

/// Byte length of the preserved element starting at `remaining`, closing tag
/// included. An unclosed element runs to the end of the input.
fn preserved_block_end(remaining: &str) -> Option<usize> {
	PRESERVED_ELEMENTS.iter().find_map(|tag| {
		let after = remaining.strip_prefix('<')?.strip_prefix(tag)?;
		if !(after.is_empty() || after.starts_with(|ch: char| ch == '>' || ch.is_ascii_whitespace())) {
			return None;
		}
		let closing = format!("</{tag}>");
		Some(
			remaining
				.find(&closing)
				.map_or(remaining.len(), |index| index + closing.len()),
		)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_json_for_script() {
		assert_eq!(
			escape_json_for_script(r#"{"name":"</script><b>"}"#),
			r#"{"name":"<\/script><b>"}"#
		);
	}

	#[rstest]
	#[case("#0EA5E9", "#0EA5E9")]
	#[case("red;} body{display:none", "red bodydisplay:none")]
	#[case("</style>", "/style")]
	fn test_css_value(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(css_value(raw), expected);
	}

	#[rstest]
	fn test_minify_preserves_pre() {
		let html = "<div>\n   <p>a   b</p>\n<pre>  keep\n  this</pre>  </div>";

		assert_eq!(
			minify_html(html),
			"<div> <p>a b</p> <pre>  keep\n  this</pre> </div>"
		);
	}

	#[rstest]
	#[case(
		"<form>\n  <textarea name=\"m\">line one\n\n  two</textarea>  </form>",
		"<form> <textarea name=\"m\">line one\n\n  two</textarea> </form>"
	)]
	#[case(
		"<p>x</p>\n<script type=\"application/json\">{\"a\":\"b  c\"}</script>\n",
		"<p>x</p> <script type=\"application/json\">{\"a\":\"b  c\"}</script> "
	)]
	#[case("<prefix>  a</prefix>", "<prefix> a</prefix>")]
	#[case("<pre>  never closed", "<pre>  never closed")]
	fn test_minify_preserves_raw_blocks(#[case] html: &str, #[case] expected: &str) {
		assert_eq!(minify_html(html), expected);
	}

	#[rstest]
	fn test_minified_export_embeds_the_exact_document() {
		let brief = sitemaker_core::Brief::default().apply(
			&sitemaker_core::BriefPatch::new().set(&["brand", "tagline"], "Fast  and   fair"),
		);
		let dsl = sitemaker_dsl::compile(&brief);

		let html = SsrRenderer::with_options(SsrOptions::new().minify()).render_document(&dsl);

		let open = format!("<script id=\"{DSL_SCRIPT_ID}\" type=\"application/json\">");
		let start = html.find(&open).unwrap() + open.len();
		let end = start + html[start..].find("</script>").unwrap();
		let embedded = SiteDsl::from_json(&html[start..end].replace("<\\/", "</")).unwrap();
		assert_eq!(embedded, dsl);
		assert_eq!(embedded.meta.brand.tagline, "Fast  and   fair");
		assert!(!html.contains("\n"));
	}
}
