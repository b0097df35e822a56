//! Exact bidirectional sRGB ↔ OKLCH conversion.
//!
//! One transform is used in both directions: gamma-decode sRGB to linear
//! light, map through the fixed OKLab matrices, then convert the Lab point
//! to polar lightness/chroma/hue. The reverse path applies the exact
//! inverse of each step, so hex → OKLCH → hex round-trips within ±2/255
//! per channel.

use crate::rgb::Rgb;

/// A color in OKLCH polar form, the canonical representation.
///
/// `l` is lightness in `[0, 1]`, `c` is chroma (non-negative, in practice
/// below ~0.4 for in-gamut sRGB), `h` is hue in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Oklch {
    /// Create a color from components, normalizing hue into `[0, 360)`.
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self {
            l,
            c,
            h: h.rem_euclid(360.0),
        }
    }

    /// Convert an sRGB display color to OKLCH.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = srgb_decode(rgb.r as f32 / 255.0);
        let g = srgb_decode(rgb.g as f32 / 255.0);
        let b = srgb_decode(rgb.b as f32 / 255.0);

        // Linear RGB → LMS cone response, cube-rooted per OKLab.
        let l = (0.412_221_47 * r + 0.536_332_54 * g + 0.051_445_995 * b).cbrt();
        let m = (0.211_903_5 * r + 0.680_699_55 * g + 0.107_396_96 * b).cbrt();
        let s = (0.088_302_46 * r + 0.281_718_85 * g + 0.629_978_7 * b).cbrt();

        let lab_l = 0.210_454_26 * l + 0.793_617_8 * m - 0.004_072_047 * s;
        let lab_a = 1.977_998_5 * l - 2.428_592_2 * m + 0.450_593_7 * s;
        let lab_b = 0.025_904_037 * l + 0.782_771_77 * m - 0.808_675_77 * s;

        let c = (lab_a * lab_a + lab_b * lab_b).sqrt();
        let h = lab_b.atan2(lab_a).to_degrees();
        Self::new(lab_l, c, h)
    }

    /// Convert back to an sRGB display color, clamping out-of-gamut
    /// channels to the displayable range.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.to_radians();
        let lab_a = self.c * h.cos();
        let lab_b = self.c * h.sin();

        let l = self.l + 0.396_337_78 * lab_a + 0.215_803_76 * lab_b;
        let m = self.l - 0.105_561_346 * lab_a - 0.063_854_17 * lab_b;
        let s = self.l - 0.089_484_18 * lab_a - 1.291_485_5 * lab_b;

        let l = l * l * l;
        let m = m * m * m;
        let s = s * s * s;

        let r = 4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_93 * s;
        let g = -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s;

        Rgb::new(
            channel_encode(r),
            channel_encode(g),
            channel_encode(b),
        )
    }
}

/// sRGB gamma decode: display value in `[0, 1]` to linear light.
fn srgb_decode(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light to sRGB display value.
fn srgb_encode(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn channel_encode(linear: f32) -> u8 {
    (srgb_encode(linear.clamp(0.0, 1.0)) * 255.0).round() as u8
}
