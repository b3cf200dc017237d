use super::Rgb;

/// Parse `#rgb` or `#rrggbb` (leading `#` optional, any case) to channels.
/// 3-digit shorthand is expanded per digit, so `#abc` reads as `#aabbcc`.
/// Returns None for any other length or non-hex characters.
pub fn parse_hex_rgb(hex: &str) -> Option<Rgb> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match raw.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&raw[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Rgb::from_bytes(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&raw[i..i + 2], 16).ok();
            Some(Rgb::from_bytes(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex_rgb("#ff0000"), Some(Rgb::from_bytes(255, 0, 0)));
        assert_eq!(parse_hex_rgb("#00ff00"), Some(Rgb::from_bytes(0, 255, 0)));
        assert_eq!(parse_hex_rgb("#1e293b"), Some(Rgb::from_bytes(30, 41, 59)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_hex_rgb("#1E293B"), parse_hex_rgb("#1e293b"));
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(parse_hex_rgb("ffffff"), Some(Rgb::from_bytes(255, 255, 255)));
    }

    #[test]
    fn shorthand_is_expanded() {
        assert_eq!(parse_hex_rgb("#abc"), parse_hex_rgb("#aabbcc"));
        assert_eq!(parse_hex_rgb("#f00"), Some(Rgb::from_bytes(255, 0, 0)));
    }

    #[test]
    fn wrong_lengths_rejected() {
        assert_eq!(parse_hex_rgb("#12"), None);
        assert_eq!(parse_hex_rgb("#1234"), None);
        assert_eq!(parse_hex_rgb("#ff000080"), None);
        assert_eq!(parse_hex_rgb(""), None);
        assert_eq!(parse_hex_rgb("#"), None);
    }

    #[test]
    fn non_hex_rejected() {
        assert_eq!(parse_hex_rgb("not-a-color"), None);
        assert_eq!(parse_hex_rgb("#xyz"), None);
        assert_eq!(parse_hex_rgb("#ggggggg"), None);
        // multi-byte chars must not be sliced
        assert_eq!(parse_hex_rgb("#é12"), None);
    }

    #[test]
    fn only_one_hash_stripped() {
        assert_eq!(parse_hex_rgb("##ffffff"), None);
    }
}
