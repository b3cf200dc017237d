use crate::math::luminance::is_light;
use crate::parser::background::is_background_light;
use crate::types::Profile;

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

/// CSS filter applied to link icons. Icons are assumed to be dark source
/// images, so both variants first collapse them to solid black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFilter {
    Black,
    White,
}

impl IconFilter {
    /// Filter that keeps an icon visible on a surface of the given lightness.
    pub fn for_surface(surface_is_light: bool) -> Self {
        if surface_is_light {
            IconFilter::Black
        } else {
            IconFilter::White
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            IconFilter::Black => "brightness(0) saturate(100%)",
            IconFilter::White => "brightness(0) saturate(100%) invert(1)",
        }
    }
}

fn text_color_for(surface_is_light: bool) -> &'static str {
    if surface_is_light {
        BLACK
    } else {
        WHITE
    }
}

/// Every value the generated stylesheet binds, resolved from a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet<'a> {
    pub background: &'a str,
    pub text_color: &'static str,
    pub link_color: &'a str,
    pub link_text_color: &'a str,
    pub border_radius: &'a str,
    pub link_hover_color: &'a str,
    pub hover_text_color: &'static str,
    pub icon_filter: IconFilter,
    pub hover_icon_filter: IconFilter,
}

impl<'a> StyleSheet<'a> {
    pub fn resolve(profile: &'a Profile) -> Self {
        let bg_light = is_background_light(&profile.background);
        let hover_light = is_light(&profile.link_hover_color);

        Self {
            background: &profile.background,
            text_color: text_color_for(bg_light),
            link_color: &profile.link_color,
            link_text_color: &profile.link_text_color,
            border_radius: &profile.border_radius,
            link_hover_color: &profile.link_hover_color,
            hover_text_color: text_color_for(hover_light),
            icon_filter: IconFilter::Black,
            hover_icon_filter: IconFilter::for_surface(hover_light),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "body {{\n  background: {};\n  color: {};\n}}\n\
             #profile-name {{\n  color: {};\n}}\n\
             .link {{\n  background-color: {};\n  color: {};\n  border-radius: {};\n}}\n\
             .link:hover {{\n  background-color: {};\n  color: {};\n}}\n\
             .link-icon {{\n  filter: {};\n}}\n\
             .link:hover .link-icon {{\n  filter: {};\n}}\n",
            self.background,
            self.text_color,
            self.text_color,
            self.link_color,
            self.link_text_color,
            self.border_radius,
            self.link_hover_color,
            self.hover_text_color,
            self.icon_filter.css(),
            self.hover_icon_filter.css(),
        )
    }
}

/// Generate the full stylesheet for a profile.
pub fn synthesize(profile: &Profile) -> String {
    StyleSheet::resolve(profile).to_css()
}
