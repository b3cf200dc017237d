use super::Rgb;

/// Read the channels of an `rgb(...)` / `rgba(...)` token. Alpha is ignored.
///
/// R, G and B are the first three numeric components inside the parentheses,
/// taken verbatim on the 0-255 scale: no clamping, and a trailing `%` is
/// dropped without rescaling. Comma, space and `/` separators are accepted.
/// Returns None when fewer than three numbers are present.
pub fn parse_functional_rgb(token: &str) -> Option<Rgb> {
    let token = token.trim();
    let open = token.find('(')?;
    let inner = &token[open + 1..];
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    let mut numbers = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.trim_end_matches('%').parse::<f64>().ok());

    Some(Rgb::new(numbers.next()?, numbers.next()?, numbers.next()?))
}
