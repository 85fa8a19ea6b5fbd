use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BADGE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTED_MARK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Terminal color for a tutorial's artwork hex string, falling back to
/// the accent color for anything unparseable.
pub fn artwork_color(hex: &str) -> Color {
    parse_hex_color(hex).unwrap_or(ACCENT)
}

/// Parses `#RGB`, `#RRGGBB`, or `#AARRGGBB` (leading `#` optional).
/// The alpha byte of the 8-digit form is accepted and ignored — there
/// is no alpha in a terminal cell.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        8 => digits[2..].to_string(),
        _ => return None,
    };

    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
    let r = byte(0..2)?;
    let g = byte(2..4)?;
    let b = byte(4..6)?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_form() {
        assert_eq!(parse_hex_color("#DA7756"), Some(Color::Rgb(0xda, 0x77, 0x56)));
        assert_eq!(parse_hex_color("da7756"), Some(Color::Rgb(0xda, 0x77, 0x56)));
    }

    #[test]
    fn three_digit_form_doubles_each_digit() {
        assert_eq!(parse_hex_color("#f0a"), Some(Color::Rgb(0xff, 0x00, 0xaa)));
    }

    #[test]
    fn eight_digit_form_ignores_alpha() {
        assert_eq!(
            parse_hex_color("#80DA7756"),
            Some(Color::Rgb(0xda, 0x77, 0x56))
        );
    }

    #[test]
    fn invalid_forms_are_rejected() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn artwork_color_falls_back_to_accent() {
        assert_eq!(artwork_color("not a color"), ACCENT);
        assert_eq!(artwork_color("#000000"), Color::Rgb(0, 0, 0));
    }
}
