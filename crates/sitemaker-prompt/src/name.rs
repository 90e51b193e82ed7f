//! Business name extraction ("named X" / "called X").

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of tokens a captured name may span.
pub const MAX_NAME_TOKENS: usize = 6;

/// Maximum length of a captured name, in chars.
pub const MAX_NAME_CHARS: usize = 60;

static NAME_INTRO: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)\b(?:named|called)\s+").expect("NAME_INTRO: invalid regex pattern")
});

const CONNECTORS: &[&str] = &[
	"with", "that", "which", "in", "for", "based", "located", "who",
];

const ARTICLES: &[&str] = &["a", "an", "the"];

fn is_name_char(ch: char) -> bool {
	ch.is_alphanumeric() || matches!(ch, '&' | '-' | '\'' | '.')
}

fn is_one_of(word: &str, list: &[&str]) -> bool {
	list.iter().any(|candidate| word.eq_ignore_ascii_case(candidate))
}

/// Extracts the business name following "named" or "called".
///
/// Captures up to [`MAX_NAME_TOKENS`] word-ish tokens and stops at the
/// first punctuation or connector word. A trailing article is dropped.
pub fn extract_name(text: &str) -> Option<String> {
	let intro = NAME_INTRO.find(text)?;
	let rest = &text[intro.end()..];

	let mut tokens: Vec<&str> = Vec::new();
	for raw in rest.split_whitespace() {
		if tokens.len() == MAX_NAME_TOKENS {
			break;
		}
		let end = raw
			.char_indices()
			.find(|(_, ch)| !is_name_char(*ch))
			.map_or(raw.len(), |(index, _)| index);
		let token = &raw[..end];
		if token.is_empty() || is_one_of(token, CONNECTORS) {
			break;
		}
		tokens.push(token);
		if end < raw.len() {
			break;
		}
	}

	while tokens.last().is_some_and(|last| is_one_of(last, ARTICLES)) {
		tokens.pop();
	}

	let joined = tokens.join(" ");
	let name: String = joined
		.trim_end_matches(['.', '-', '\''])
		.chars()
		.take(MAX_NAME_CHARS)
		.collect();
	let name = name.trim();

	(!name.is_empty()).then(|| name.to_string())
}
