//! Background color contrast check
//!
//! Chapter backgrounds come straight from `db.json` as CSS color strings.
//! Understood forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, and `rgb()` /
//! `rgba()` with comma or space separated channels (`rgb(10 20 30 / 0.5)`).
//! Alpha is ignored. Named colors, `hsl()` and percentages are treated as
//! dark.

/// Perceived luminance above which text switches to dark
pub const DARK_TEXT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Perceived luminance in `0.0..=1.0` (ITU-R BT.601 weights)
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

/// Parse a CSS color string
pub fn parse_color(input: &str) -> Option<Rgb> {
    let s = input.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut parts = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;

    Some(Rgb { r, g, b })
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 | 4 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Rgb {
                r: digit(0)?,
                g: digit(1)?,
                b: digit(2)?,
            })
        }
        6 | 8 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb {
                r: pair(0)?,
                g: pair(2)?,
                b: pair(4)?,
            })
        }
        _ => None,
    }
}

/// Whether text over this background should be dark
pub fn prefers_dark_text(bg: &str) -> bool {
    parse_color(bg)
        .map(|rgb| rgb.luminance() > DARK_TEXT_THRESHOLD)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_color("#fff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(parse_color("#1A2b3C"), Some(Rgb { r: 0x1a, g: 0x2b, b: 0x3c }));
        assert_eq!(parse_color("#ffff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(parse_color("#1a2b3c80"), Some(Rgb { r: 0x1a, g: 0x2b, b: 0x3c }));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ggg"), None);
    }

    #[test]
    fn test_parse_rgb_forms() {
        assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Rgb { r: 10, g: 20, b: 30 }));
        assert_eq!(parse_color("RGBA(200,200,200,0.5)"), Some(Rgb { r: 200, g: 200, b: 200 }));
        assert_eq!(parse_color("rgb(10 20 30)"), Some(Rgb { r: 10, g: 20, b: 30 }));
        assert_eq!(parse_color("rgb(240 240 240 / 0.5)"), Some(Rgb { r: 240, g: 240, b: 240 }));
        assert_eq!(parse_color("rgb(300, 0, 0)"), None);
        assert_eq!(parse_color("crimson"), None);
    }

    #[test]
    fn test_dark_text_on_light_backgrounds() {
        assert!(prefers_dark_text("#f4e1c1"));
        assert!(prefers_dark_text("#ffffff"));
        assert!(!prefers_dark_text("#111111"));
        assert!(!prefers_dark_text("#0033aa"));
        assert!(prefers_dark_text("#fffc"));
        assert!(!prefers_dark_text(""));
    }
}
