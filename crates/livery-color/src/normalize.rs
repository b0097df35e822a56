//! Canonicalization of arbitrary color text into OKLCH form.

use crate::oklch::Oklch;
use crate::rgb::Rgb;

/// Neutral fallback emitted for unparseable color text.
pub const FALLBACK: &str = "oklch(0.5 0.1 250)";

/// Normalize color text into canonical `oklch(L C H)` form.
///
/// Accepts `#rrggbb` / `#rgb` hex, functional `rgb(r, g, b)`, a bare
/// `L C H` triple, or already-canonical `oklch(L C H)` text. Anything
/// unrecognized yields [`FALLBACK`] rather than an error, so malformed
/// tenant data degrades to a neutral color instead of breaking resolution.
/// Idempotent over its own output.
pub fn normalize(input: &str) -> String {
    match parse_color(input) {
        Some(color) => format_oklch(color),
        None => {
            tracing::debug!(input, "unrecognized color text, using neutral fallback");
            FALLBACK.to_string()
        }
    }
}

/// Parse any supported color text into OKLCH, without fallback.
pub fn parse_color(input: &str) -> Option<Oklch> {
    let input = input.trim();
    if input.starts_with('#') {
        return Rgb::from_hex(input).map(Oklch::from_rgb);
    }
    if input.starts_with("oklch(") {
        return parse_oklch_text(input);
    }
    if input.starts_with("rgb") {
        return Rgb::from_functional(input).map(Oklch::from_rgb);
    }
    parse_bare_triple(input)
}

/// Render canonical `oklch(L C H)` text for the given color.
pub fn format_oklch(color: Oklch) -> String {
    format!(
        "oklch({} {} {})",
        format_component(color.l),
        format_component(color.c),
        format_component(color.h)
    )
}

/// Convert canonical (or any parseable) color text to `#rrggbb` display
/// form, falling back to the neutral color for unrecognized input.
pub fn to_hex(input: &str) -> String {
    let color = parse_color(input)
        .or_else(|| parse_oklch_text(FALLBACK));
    match color {
        Some(color) => color.to_rgb().to_hex(),
        // FALLBACK always parses; this arm is unreachable in practice.
        None => "#000000".to_string(),
    }
}

fn parse_oklch_text(input: &str) -> Option<Oklch> {
    let body = input.trim().strip_prefix("oklch(")?.strip_suffix(')')?;
    parse_bare_triple(body)
}

fn parse_bare_triple(input: &str) -> Option<Oklch> {
    let mut parts = input.split_whitespace().map(|part| part.parse::<f32>().ok());

    let l = parts.next()??;
    let c = parts.next()??;
    let h = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    if !(l.is_finite() && c.is_finite() && h.is_finite()) || c < 0.0 {
        return None;
    }
    Some(Oklch::new(l, c, h))
}

/// Print a component with up to four decimal places, trailing zeros
/// trimmed, so reformatting parsed canonical text is a fixed point.
fn format_component(value: f32) -> String {
    let mut text = format!("{value:.4}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}
