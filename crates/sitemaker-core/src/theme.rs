//! Theme Token Deriver.
//!
//! [`derive`] turns the raw [`ThemeKnobs`] of a Brief into a complete set of
//! visual constants. It is pure and total: nonsensical knobs are clamped to
//! usable values rather than rejected.

use serde::{Deserialize, Serialize};

use crate::brief::ThemeKnobs;

const DEFAULT_BASE_SIZE: f64 = 16.0;
const DEFAULT_SCALE: f64 = 1.25;
const DEFAULT_RADIUS: f64 = 16.0;
const DEFAULT_CONTAINER: f64 = 1200.0;

const MIN_BASE_SIZE: f64 = 4.0;
const MAX_BASE_SIZE: f64 = 256.0;
const MAX_SCALE: f64 = 4.0;
const MAX_RADIUS: f64 = 64.0;
const MIN_CONTAINER: f64 = 320.0;
const MAX_CONTAINER: f64 = 10_000.0;

/// Number of steps in the type scale: body text plus six heading levels.
pub const TYPE_SCALE_STEPS: usize = 7;

/// Card rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
	/// Filled card with a soft shadow.
	#[default]
	Soft,
	/// Transparent card with a border.
	Outline,
	/// No chrome at all.
	Minimal,
}

impl CardStyle {
	/// Parses a style name case-insensitively; anything unknown is `Soft`.
	pub fn parse(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"outline" => Self::Outline,
			"minimal" => Self::Minimal,
			_ => Self::Soft,
		}
	}

	/// The wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Soft => "soft",
			Self::Outline => "outline",
			Self::Minimal => "minimal",
		}
	}
}

/// How much motion the reveal animations use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationLevel {
	/// Short and subtle.
	Low,
	/// The default.
	#[default]
	Medium,
	/// Long and pronounced.
	High,
}

impl AnimationLevel {
	/// Parses a level name case-insensitively; anything unknown is `Medium`.
	pub fn parse(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"low" => Self::Low,
			"high" => Self::High,
			_ => Self::Medium,
		}
	}

	/// The wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::Medium => "medium",
			Self::High => "high",
		}
	}

	/// Duration and travel distance for this level.
	pub fn timing(self) -> AnimationTiming {
		match self {
			Self::Low => AnimationTiming::new(300, 8),
			Self::Medium => AnimationTiming::new(500, 12),
			Self::High => AnimationTiming::new(700, 18),
		}
	}
}

/// Reveal animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTiming {
	/// Duration in milliseconds.
	pub duration_ms: u32,
	/// Vertical travel in pixels.
	pub offset_px: u32,
}

impl AnimationTiming {
	/// Creates a timing.
	pub const fn new(duration_ms: u32, offset_px: u32) -> Self {
		Self {
			duration_ms,
			offset_px,
		}
	}
}

/// Derived visual constants, recomputed on every Brief change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
	/// Font sizes in pixels: body text, then h6 up to h1. Strictly increasing.
	pub type_scale: [u32; TYPE_SCALE_STEPS],
	/// Maximum content width in pixels.
	pub container_width: u32,
	/// Corner radius in pixels.
	pub radius: u32,
	/// Card style.
	pub card_style: CardStyle,
	/// Reveal animation parameters.
	pub animation: AnimationTiming,
}

impl Default for ThemeTokens {
	fn default() -> Self {
		derive(&ThemeKnobs::default())
	}
}

impl ThemeTokens {
	/// Body text size.
	pub fn body(&self) -> u32 {
		self.type_scale[0]
	}

	/// Size of heading level `level` (1 is the largest). Levels outside
	/// `1..=6` are clamped.
	pub fn heading(&self, level: u8) -> u32 {
		let level = usize::from(level.clamp(1, 6));
		self.type_scale[TYPE_SCALE_STEPS - level]
	}

	/// CSS custom properties describing these tokens.
	pub fn css_variables(&self) -> Vec<(String, String)> {
		let mut vars = vec![("--font-body".to_string(), format!("{}px", self.body()))];
		vars.extend((1..=6u8).map(|level| {
			(
				format!("--font-h{level}"),
				format!("{}px", self.heading(level)),
			)
		}));
		vars.push(("--radius".to_string(), format!("{}px", self.radius)));
		vars.push((
			"--container".to_string(),
			format!("{}px", self.container_width),
		));
		vars.push((
			"--reveal-duration".to_string(),
			format!("{}ms", self.animation.duration_ms),
		));
		vars.push((
			"--reveal-offset".to_string(),
			format!("{}px", self.animation.offset_px),
		));
		vars
	}
}

/// Derives theme tokens from raw knobs.
///
/// `step[i] = round(base_size * scale^i)` for `i` in `0..7`, with each step
/// bumped to one more than its predecessor when rounding (or a ratio at or
/// below 1) would otherwise break strict growth.
///
/// ```rust
/// use sitemaker_core::{ThemeKnobs, derive};
///
/// let tokens = derive(&ThemeKnobs::default());
/// assert_eq!(tokens.type_scale, [16, 20, 25, 31, 39, 49, 61]);
/// assert_eq!(tokens.animation.duration_ms, 500);
/// ```
pub fn derive(knobs: &ThemeKnobs) -> ThemeTokens {
	let base = positive_or(knobs.base_size, DEFAULT_BASE_SIZE).clamp(MIN_BASE_SIZE, MAX_BASE_SIZE);
	let scale = positive_or(knobs.scale, DEFAULT_SCALE).min(MAX_SCALE);

	let mut type_scale = [0u32; TYPE_SCALE_STEPS];
	let mut previous: Option<u32> = None;
	for (i, step) in type_scale.iter_mut().enumerate() {
		let exponent = i32::try_from(i).unwrap_or(0);
		let raw = (base * scale.powi(exponent)).round() as u32;
		let value = match previous {
			Some(prev) if raw <= prev => prev + 1,
			_ => raw,
		};
		*step = value;
		previous = Some(value);
	}

	let radius = finite_or(knobs.radius, DEFAULT_RADIUS).clamp(0.0, MAX_RADIUS);
	let container = finite_or(knobs.container, DEFAULT_CONTAINER).clamp(MIN_CONTAINER, MAX_CONTAINER);

	ThemeTokens {
		type_scale,
		container_width: container.round() as u32,
		radius: radius.round() as u32,
		card_style: CardStyle::parse(&knobs.card_style),
		animation: AnimationLevel::parse(&knobs.animation_level).timing(),
	}
}

fn positive_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() && value > 0.0 {
		value
	} else {
		fallback
	}
}

fn finite_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() { value } else { fallback }
}
