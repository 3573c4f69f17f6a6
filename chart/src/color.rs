//! Colors accepted on the command line and used by every writer.

use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

const NAMED: &[(&str, Color)] = &[
    ("white", Color::WHITE),
    ("black", Color::rgb(0, 0, 0)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("darkgray", Color::DARK_GRAY),
    ("darkgrey", Color::DARK_GRAY),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("lightgrey", Color::rgb(211, 211, 211)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("navy", Color::rgb(0, 0, 128)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("teal", Color::rgb(0, 128, 128)),
    ("tab:blue", Color::rgb(31, 119, 180)),
];

impl Color {
    /// White, used for outline fillers without a canvas color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// `#404040`.
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);
    /// `#367DA2`.
    pub const BLUE: Self = Self::rgb(54, 125, 162);

    /// Build a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to `0.0..=1.0`.
    #[must_use]
    pub fn unit(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|channel| f32::from(channel) / 255.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| format!("Invalid hex color: {s}"));
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, color)| *color)
            .ok_or_else(|| format!("Unknown color: {s} (use #rrggbb or a color name)"))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex
                .chars()
                .map(|c| u8::from_str_radix(&c.to_string(), 16).ok().map(|v| v * 17));
            Some(Color::rgb(channels.next()??, channels.next()??, channels.next()??))
        }
        6 => Some(Color::rgb(
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!("#367DA2".parse(), Ok(Color::BLUE));
        assert_eq!("#fff".parse(), Ok(Color::WHITE));
        assert_eq!(" #404040 ".parse(), Ok(Color::DARK_GRAY));
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!("White".parse(), Ok(Color::WHITE));
        assert_eq!("grey".parse::<Color>(), "gray".parse::<Color>());
    }

    #[test]
    fn test_rejects_unknown_colors() {
        for input in ["#12", "#gggggg", "chartreuse-ish", "", "#1234567"] {
            assert!(input.parse::<Color>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::BLUE.to_hex(), "#367da2");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }
}
