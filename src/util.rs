//! Color name and hex parsing helpers.
//!
//! Used by the configuration system to turn user-supplied color strings into
//! [`Rgb`] values, and by the palette line to name colors back.

use crate::draw::color::*;

/// Maps color name strings to Rgb values.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "gray"/"grey", "gridline"/"light-gray"
/// - "red", "green", "blue", "yellow", "orange", "pink"
///
/// # Returns
/// - `Some(Rgb)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Rgb> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "gray" | "grey" => Some(GRAY),
        "gridline" | "light-gray" | "light-grey" | "lightgray" => Some(GRID_LINE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        _ => None,
    }
}

/// Parses `#rrggbb` or `#rgb` hex notation (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Option<Rgb> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
        }
        3 => {
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .ok()
                    .map(|v| v * 17)
            };
            Some(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

/// Parses either a color name or hex notation.
pub fn parse_color(value: &str) -> Option<Rgb> {
    name_to_color(value).or_else(|| parse_hex_color(value))
}

/// Returns a human-readable name for a color, falling back to hex notation.
pub fn color_to_name(color: &Rgb) -> String {
    let named = [
        (BLACK, "black"),
        (WHITE, "white"),
        (GRAY, "gray"),
        (GRID_LINE, "gridline"),
        (RED, "red"),
        (GREEN, "green"),
        (BLUE, "blue"),
        (YELLOW, "yellow"),
        (ORANGE, "orange"),
        (PINK, "pink"),
    ];

    named
        .iter()
        .find(|(candidate, _)| candidate == color)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(name_to_color("Black"), Some(BLACK));
        assert_eq!(name_to_color(" GREY "), Some(GRAY));
        assert_eq!(name_to_color("mauve"), None);
    }

    #[test]
    fn hex_parsing_handles_long_and_short_forms() {
        assert_eq!(parse_hex_color("#d4d4d4"), Some(GRID_LINE));
        assert_eq!(parse_hex_color("ff8000"), Some(ORANGE));
        assert_eq!(parse_hex_color("#fff"), Some(WHITE));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn color_to_name_falls_back_to_hex() {
        assert_eq!(color_to_name(&BLACK), "black");
        assert_eq!(color_to_name(&Rgb::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn parse_color_prefers_names() {
        assert_eq!(parse_color("red"), Some(RED));
        assert_eq!(parse_color("#0000ff"), Some(BLUE));
    }
}
