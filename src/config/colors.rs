//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

use crate::presenter::MagnitudeBucket;

/// Configuration for all TUI colors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub offset: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub location: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub date: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub time: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude1: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude2: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude3: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude4: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude5: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude6: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude7: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude8: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude9: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub magnitude10plus: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            offset: Color::Gray,
            location: Color::White,
            date: Color::Yellow,
            time: Color::Yellow,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
            magnitude1: Color::Rgb(0x4A, 0x7B, 0xA7),
            magnitude2: Color::Rgb(0x04, 0xB4, 0xB3),
            magnitude3: Color::Rgb(0x10, 0xCA, 0xC9),
            magnitude4: Color::Rgb(0xF5, 0xA6, 0x23),
            magnitude5: Color::Rgb(0xFF, 0x7D, 0x50),
            magnitude6: Color::Rgb(0xFC, 0x66, 0x44),
            magnitude7: Color::Rgb(0xE7, 0x5F, 0x40),
            magnitude8: Color::Rgb(0xE1, 0x3A, 0x20),
            magnitude9: Color::Rgb(0xD9, 0x32, 0x18),
            magnitude10plus: Color::Rgb(0xC0, 0x38, 0x23),
        }
    }
}

impl ColorConfig {
    /// Badge color for a magnitude bucket.
    pub fn magnitude_color(&self, bucket: MagnitudeBucket) -> Color {
        match bucket {
            MagnitudeBucket::M1 => self.magnitude1,
            MagnitudeBucket::M2 => self.magnitude2,
            MagnitudeBucket::M3 => self.magnitude3,
            MagnitudeBucket::M4 => self.magnitude4,
            MagnitudeBucket::M5 => self.magnitude5,
            MagnitudeBucket::M6 => self.magnitude6,
            MagnitudeBucket::M7 => self.magnitude7,
            MagnitudeBucket::M8 => self.magnitude8,
            MagnitudeBucket::M9 => self.magnitude9,
            MagnitudeBucket::M10Plus => self.magnitude10plus,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a named color ("DarkGray", case-insensitive) or a hex code
/// ("#RRGGBB" / "#RGB").
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| format!("Invalid hex color: {}", s));
    }

    let color = match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => return Err(format!("Unknown color: {}", s)),
    };
    Ok(color)
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        // #RGB expands each digit: F -> FF
        3 => Some(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => None,
    }
}
