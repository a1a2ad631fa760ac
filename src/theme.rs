use crate::models::SiteSettings;

/// Theme resolution: turns the stored site settings row into a CSS custom
/// property sheet, computing a readable foreground color for each configured
/// background.

// Served until the settings table has a row.
pub const FALLBACK_PRIMARY: &str = "#000000";
pub const FALLBACK_SECONDARY: &str = "#ffffff";
pub const FALLBACK_RADIUS: &str = "0.5rem";
pub const FALLBACK_FONT: &str = "\"Helvetica Neue\", Helvetica, Arial, sans-serif";

/// contrasting_foreground
///
/// Picks white or black text for the given background color. Accepts 3- or
/// 6-digit hex (with or without the leading `#`); anything malformed falls
/// back to white.
///
/// Uses the perceived-luminance weighting rather than a plain average, so
/// saturated greens land on black text and saturated blues on white.
pub fn contrasting_foreground(hex: &str) -> &'static str {
    let h = hex.strip_prefix('#').unwrap_or(hex);
    if !h.chars().all(|c| c.is_ascii_hexdigit()) {
        return "#ffffff";
    }

    let expanded: String = match h.len() {
        3 => h.chars().flat_map(|c| [c, c]).collect(),
        6 => h.to_string(),
        _ => return "#ffffff",
    };

    // Validated above; these parses cannot fail.
    let r = u8::from_str_radix(&expanded[0..2], 16).unwrap_or(0) as f32;
    let g = u8::from_str_radix(&expanded[2..4], 16).unwrap_or(0) as f32;
    let b = u8::from_str_radix(&expanded[4..6], 16).unwrap_or(0) as f32;

    let luminance = (0.299 * r + 0.587 * g + 0.114 * b) / 255.0;
    if luminance < 0.5 { "#ffffff" } else { "#000000" }
}

/// render_css
///
/// Renders the `:root` variable block the frontend links as `/theme.css`.
/// `None` (settings table not yet seeded) renders the fallback theme.
pub fn render_css(settings: Option<&SiteSettings>) -> String {
    let (primary, secondary, radius, font) = match settings {
        Some(s) => (
            s.primary_color.as_str(),
            s.secondary_color.as_str(),
            s.border_radius.as_str(),
            s.font_family.as_str(),
        ),
        None => (
            FALLBACK_PRIMARY,
            FALLBACK_SECONDARY,
            FALLBACK_RADIUS,
            FALLBACK_FONT,
        ),
    };

    format!(
        ":root {{\n  \
           --primary: {primary};\n  \
           --primary-foreground: {primary_fg};\n  \
           --secondary: {secondary};\n  \
           --secondary-foreground: {secondary_fg};\n  \
           --radius: {radius};\n  \
           --font-main: {font};\n\
         }}\n",
        primary_fg = contrasting_foreground(primary),
        secondary_fg = contrasting_foreground(secondary),
    )
}
