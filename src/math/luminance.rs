use super::hex::parse_hex_rgb;
use super::Rgb;

/// Luminance above this value classifies a color as light.
pub const LIGHT_THRESHOLD: f64 = 0.5;

/// Perceived brightness on a 0.0-1.0 scale (for in-range channels).
/// L = (0.299 * R + 0.587 * G + 0.114 * B) / 255
pub fn perceived_luminance(rgb: Rgb) -> f64 {
    (0.299 * rgb.r + 0.587 * rgb.g + 0.114 * rgb.b) / 255.0
}

/// Classify channels as light. Strictly greater than the threshold.
pub fn is_light_rgb(rgb: Rgb) -> bool {
    perceived_luminance(rgb) > LIGHT_THRESHOLD
}

/// Classify a hex color as light.
///
/// Malformed input (anything but `#rgb` / `#rrggbb`) is treated as light.
/// That default is policy, not a failure: callers pick dark text, which
/// is the safe choice on an unknown surface.
pub fn is_light(hex: &str) -> bool {
    match parse_hex_rgb(hex) {
        Some(rgb) => is_light_rgb(rgb),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_dark() {
        assert!(!is_light("#000000"));
    }

    #[test]
    fn white_is_light() {
        assert!(is_light("#ffffff"));
    }

    #[test]
    fn threshold_sits_between_7f_and_80() {
        // 128/255 = 0.502, 127/255 = 0.498
        assert!(is_light("#808080"));
        assert!(!is_light("#7f7f7f"));
    }

    #[test]
    fn luminance_of_gray_is_channel_over_255() {
        let l = perceived_luminance(Rgb::from_bytes(128, 128, 128));
        assert!((l - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn green_weighs_more_than_blue() {
        assert!(is_light("#00ff00"));
        assert!(!is_light("#0000ff"));
        assert!(!is_light("#ff0000"));
    }

    #[test]
    fn malformed_defaults_to_light() {
        assert!(is_light("notacolor"));
        assert!(is_light("#12"));
        assert!(is_light(""));
        assert!(is_light("#0000000"));
    }

    #[test]
    fn shorthand_matches_expanded_form() {
        // The earlier shorthand handling parsed "#abc" byte-wise and
        // misread it; shorthand is now expanded first.
        assert_eq!(is_light("#abc"), is_light("#aabbcc"));
        assert!(!is_light("#000"));
        assert!(is_light("#fff"));
        assert!(!is_light("#333"));
        assert!(is_light("#ccc"));
    }

    #[test]
    fn monotonic_in_each_channel() {
        let steps: Vec<u8> = (0..=15).map(|n| n * 17).collect();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let base = is_light(&format!("#{:02x}{:02x}{:02x}", r, g, b));
                    if !base {
                        continue;
                    }
                    for bump in [
                        (r.saturating_add(17), g, b),
                        (r, g.saturating_add(17), b),
                        (r, g, b.saturating_add(17)),
                    ] {
                        let hex = format!("#{:02x}{:02x}{:02x}", bump.0, bump.1, bump.2);
                        assert!(is_light(&hex), "{hex} flipped to dark");
                    }
                }
            }
        }
    }
}
