/// A color literal found inside a free-form CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken<'a> {
    /// `#rgb` or `#rrggbb`, including the `#`.
    Hex(&'a str),
    /// `rgb(...)` or `rgba(...)`, through the closing parenthesis.
    Functional(&'a str),
}

impl<'a> ColorToken<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            ColorToken::Hex(s) | ColorToken::Functional(s) => s,
        }
    }
}

/// Scan a CSS value (typically a gradient) and return every color literal
/// in source order.
///
/// This is a lossy scanner: it does not understand CSS structure, it only
/// recognizes the two literal shapes. A hex run longer than six digits
/// yields its first six; a run of four or five yields its first three;
/// shorter runs yield nothing. An `rgb(` without a closing `)` is dropped.
pub fn scan_color_tokens(source: &str) -> Vec<ColorToken<'_>> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        // ── Hex literal ──
        if bytes[i] == b'#' {
            let run = bytes[i + 1..]
                .iter()
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            let digits = match run {
                n if n >= 6 => 6,
                n if n >= 3 => 3,
                _ => 0,
            };
            if digits > 0 {
                tokens.push(ColorToken::Hex(&source[i..i + 1 + digits]));
                i += 1 + digits;
            } else {
                i += 1;
            }
            continue;
        }

        // ── Functional literal: rgb( / rgba( ──
        if let Some(open_len) = functional_prefix(&bytes[i..]) {
            match bytes[i + open_len..].iter().position(|&b| b == b')') {
                Some(close) => {
                    let end = i + open_len + close + 1;
                    tokens.push(ColorToken::Functional(&source[i..end]));
                    i = end;
                }
                None => i += open_len,
            }
            continue;
        }

        i += 1;
    }

    tokens
}

/// Length of a leading `rgb(` or `rgba(` (ASCII case-insensitive).
fn functional_prefix(bytes: &[u8]) -> Option<usize> {
    for prefix in [&b"rgba("[..], &b"rgb("[..]] {
        if bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix) {
            return Some(prefix.len());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_tokens_in_order() {
        let tokens = scan_color_tokens("linear-gradient(#ffffff, #000, #123456)");
        assert_eq!(
            tokens,
            vec![
                ColorToken::Hex("#ffffff"),
                ColorToken::Hex("#000"),
                ColorToken::Hex("#123456"),
            ]
        );
    }

    #[test]
    fn functional_tokens() {
        let tokens = scan_color_tokens("linear-gradient(rgba(255,255,255,0.5), RGB(0, 0, 0))");
        assert_eq!(
            tokens,
            vec![
                ColorToken::Functional("rgba(255,255,255,0.5)"),
                ColorToken::Functional("RGB(0, 0, 0)"),
            ]
        );
    }

    #[test]
    fn mixed_tokens_keep_source_order() {
        let tokens = scan_color_tokens("radial-gradient(rgb(1,2,3), #abcdef)");
        assert_eq!(
            tokens,
            vec![ColorToken::Functional("rgb(1,2,3)"), ColorToken::Hex("#abcdef")]
        );
    }

    #[test]
    fn long_hex_runs_are_truncated() {
        assert_eq!(scan_color_tokens("#aabbccdd"), vec![ColorToken::Hex("#aabbcc")]);
        assert_eq!(scan_color_tokens("#abcd"), vec![ColorToken::Hex("#abc")]);
    }

    #[test]
    fn short_hex_runs_are_ignored() {
        assert!(scan_color_tokens("#ab, #, #zz").is_empty());
    }

    #[test]
    fn unterminated_functional_is_dropped() {
        assert!(scan_color_tokens("linear-gradient(rgb(1, 2, 3").is_empty());
    }

    #[test]
    fn no_colors() {
        assert!(scan_color_tokens("linear-gradient(to right, red, blue)").is_empty());
        assert!(scan_color_tokens("").is_empty());
    }

    #[test]
    fn as_str_returns_source_slice() {
        assert_eq!(ColorToken::Hex("#fff").as_str(), "#fff");
        assert_eq!(ColorToken::Functional("rgb(0,0,0)").as_str(), "rgb(0,0,0)");
    }
}
