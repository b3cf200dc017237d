use crate::math::color_parse::parse_functional_rgb;
use crate::math::luminance::{is_light, is_light_rgb};

use super::tokenizer::{scan_color_tokens, ColorToken};

/// How a raw `background` value is interpreted for contrast purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundDescriptor<'a> {
    /// Starts with `#`.
    SolidColor(&'a str),
    /// Contains `gradient` anywhere.
    Gradient(&'a str),
    /// Everything else: image URLs, relative paths, named colors.
    ImageUrl(&'a str),
}

impl<'a> BackgroundDescriptor<'a> {
    pub fn parse(background: &'a str) -> Self {
        if background.starts_with('#') {
            BackgroundDescriptor::SolidColor(background)
        } else if background.contains("gradient") {
            BackgroundDescriptor::Gradient(background)
        } else {
            BackgroundDescriptor::ImageUrl(background)
        }
    }

    /// Light/dark classification of the whole background.
    pub fn is_light(&self) -> bool {
        match self {
            BackgroundDescriptor::SolidColor(hex) => is_light(hex),
            BackgroundDescriptor::Gradient(raw) => {
                let tokens = scan_color_tokens(raw);
                match representative_token(&tokens) {
                    Some(token) => {
                        log::debug!("gradient sampled at {}", token.as_str());
                        token_is_light(token)
                    }
                    None => false,
                }
            }
            // No pixel sampling for images.
            BackgroundDescriptor::ImageUrl(_) => false,
        }
    }
}

/// Pick the color that stands in for a gradient.
///
/// Hex tokens win: the middle one (index `count / 2`). Without any hex
/// token, the first functional token is used.
pub fn representative_token<'a>(tokens: &[ColorToken<'a>]) -> Option<ColorToken<'a>> {
    let hex: Vec<ColorToken<'a>> = tokens
        .iter()
        .copied()
        .filter(|t| matches!(t, ColorToken::Hex(_)))
        .collect();
    if !hex.is_empty() {
        return Some(hex[hex.len() / 2]);
    }

    tokens
        .iter()
        .copied()
        .find(|t| matches!(t, ColorToken::Functional(_)))
}

fn token_is_light(token: ColorToken<'_>) -> bool {
    match token {
        ColorToken::Hex(hex) => is_light(hex),
        // Unreadable channels compare false against the threshold.
        ColorToken::Functional(raw) => parse_functional_rgb(raw).map_or(false, is_light_rgb),
    }
}

/// Classify an arbitrary CSS background value as light.
pub fn is_background_light(background: &str) -> bool {
    let descriptor = BackgroundDescriptor::parse(background);
    let light = descriptor.is_light();
    log::debug!("background {:?} classified as {}", descriptor, if light { "light" } else { "dark" });
    light
}
