//! End-to-end conversion properties exercised through the public API.

use livery_color::{Contrast, FALLBACK, Oklch, Rgb, contrast_color, normalize, to_hex};

#[test]
fn hex_round_trip_stays_within_display_tolerance() {
    for hex in [
        "#3b82f6", "#ef4444", "#22c55e", "#eab308", "#a855f7", "#0f172a",
        "#f8fafc", "#64748b", "#7c2d12", "#042f2e",
    ] {
        let original = Rgb::from_hex(hex).unwrap();
        let back = Rgb::from_hex(&to_hex(&normalize(hex))).unwrap();
        assert!(
            (original.r as i16 - back.r as i16).abs() <= 2
                && (original.g as i16 - back.g as i16).abs() <= 2
                && (original.b as i16 - back.b as i16).abs() <= 2,
            "{hex} came back as {}",
            back.to_hex()
        );
    }
}

#[test]
fn tailwind_blue_normalizes_to_expected_region() {
    // The normalized form should place #3B82F6 near L 0.62 with a blue hue,
    // and reversing it should land on (59, 130, 246) within tolerance.
    let canonical = normalize("#3B82F6");
    let parsed = livery_color::parse_color(&canonical).unwrap();
    assert!((parsed.l - 0.62).abs() < 0.02);
    assert!(parsed.h > 240.0 && parsed.h < 280.0);

    let back = Rgb::from_hex(&to_hex(&canonical)).unwrap();
    assert!((back.r as i16 - 59).abs() <= 2);
    assert!((back.g as i16 - 130).abs() <= 2);
    assert!((back.b as i16 - 246).abs() <= 2);
}

#[test]
fn normalize_fixed_point_over_all_accepted_syntaxes() {
    for input in [
        "#fff",
        "#3b82f6",
        "rgb(200, 100, 50)",
        "0.62 0.19 259.8",
        "oklch(0.5 0.1 250)",
        "definitely not a color",
    ] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn fallback_is_canonical_and_neutral() {
    assert_eq!(normalize("bogus"), FALLBACK);
    assert_eq!(normalize(FALLBACK), FALLBACK);
    // The fallback itself sits at the contrast boundary and takes white text.
    assert_eq!(contrast_color(FALLBACK), Contrast::White);
}

#[test]
fn contrast_agrees_between_hex_and_canonical_for_extremes() {
    assert_eq!(contrast_color("#ffffff"), Contrast::Black);
    assert_eq!(contrast_color(&normalize("#ffffff")), Contrast::Black);
    assert_eq!(contrast_color("#000000"), Contrast::White);
    assert_eq!(contrast_color(&normalize("#000000")), Contrast::White);
}

#[test]
fn oklch_struct_round_trips_through_text() {
    let color = Oklch::new(0.7, 0.12, 145.0);
    let text = livery_color::format_oklch(color);
    let parsed = livery_color::parse_color(&text).unwrap();
    assert!((parsed.l - color.l).abs() < 1e-4);
    assert!((parsed.c - color.c).abs() < 1e-4);
    assert!((parsed.h - color.h).abs() < 1e-3);
}
