//! Binary contrast-color selection for text over arbitrary backgrounds.

use crate::normalize::parse_color;
use crate::rgb::Rgb;

/// The two possible contrasting foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    Black,
    White,
}

impl Contrast {
    /// Canonical OKLCH rendering of the contrast color.
    pub const fn as_oklch(self) -> &'static str {
        match self {
            Self::Black => "oklch(0 0 0)",
            Self::White => "oklch(1 0 0)",
        }
    }
}

/// Pick black or white for text rendered over the given background.
///
/// Hex and functional `rgb()` input is judged by Rec. 601 perceptual
/// luminance; canonical OKLCH input by its parsed lightness channel.
/// Backgrounds lighter than 0.5 take black text; 0.5 exactly, anything
/// darker, and anything unrecognized take white.
pub fn contrast_color(input: &str) -> Contrast {
    let input = input.trim();

    let lightness = if input.starts_with('#') {
        Rgb::from_hex(input).map(Rgb::luminance)
    } else if input.starts_with("rgb") {
        Rgb::from_functional(input).map(Rgb::luminance)
    } else if input.starts_with("oklch(") {
        parse_color(input).map(|color| color.l)
    } else {
        None
    };

    match lightness {
        Some(value) if value > 0.5 => Contrast::Black,
        _ => Contrast::White,
    }
}
