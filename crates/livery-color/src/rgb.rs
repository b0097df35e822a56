//! Display-form sRGB colors and their textual representations.

/// An 8-bit-per-channel sRGB color, the display form used by hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `#rgb` hex string.
    ///
    /// Returns `None` for anything that is not a 3- or 6-digit hex color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#')?;
        // Slicing below is byte-indexed; non-ASCII text can share a byte
        // length with a valid color but never parses as one.
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                // #abc expands to #aabbcc
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    /// Parse a functional `rgb(r, g, b)` string with integer channels.
    pub fn from_functional(input: &str) -> Option<Self> {
        let input = input.trim();
        let body = input
            .strip_prefix("rgb(")
            .or_else(|| input.strip_prefix("rgba("))?
            .strip_suffix(')')?;

        let mut channels = body
            .split([',', ' '])
            .filter(|part| !part.is_empty())
            .map(|part| part.trim().parse::<u8>().ok());

        let r = channels.next()??;
        let g = channels.next()??;
        let b = channels.next()??;
        Some(Self::new(r, g, b))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceptual luminance in `[0, 1]` using the Rec. 601 weights.
    pub fn luminance(self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }
}
