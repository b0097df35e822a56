//! Color primitives for the Livery theming engine.
//!
//! This crate owns the pure, deterministic color math the engine builds on:
//!
//! - **Canonicalization**: arbitrary color text (`#rrggbb`, `rgb(...)`,
//!   bare `L C H` triples) normalized into `oklch(L C H)` form
//! - **Exact conversion**: one bidirectional sRGB ↔ OKLCH transform, so
//!   round-tripping is lossless within display precision
//! - **Contrast**: binary black/white foreground selection for a background
//!
//! Nothing here performs I/O or returns errors; unparseable input degrades
//! to a fixed neutral fallback.
//!
//! # Example
//!
//! ```
//! use livery_color::{normalize, contrast_color, Contrast};
//!
//! let canonical = normalize("#3b82f6");
//! assert!(canonical.starts_with("oklch("));
//! assert_eq!(contrast_color("#3b82f6"), Contrast::White);
//! ```

mod contrast;
mod normalize;
mod oklch;
mod rgb;

pub use contrast::{Contrast, contrast_color};
pub use normalize::{FALLBACK, format_oklch, normalize, parse_color, to_hex};
pub use oklch::Oklch;
pub use rgb::Rgb;
