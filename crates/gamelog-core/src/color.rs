//! The color value used by color decorations

use crate::error::ParseColorError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A color with red, green, blue and alpha channels.
///
/// Channels are conceptually in `[0, 1]`, but are never validated. Out of range values are kept
/// as is and only clamped when the color is encoded as a hex code.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// The light gray preset
    pub const LIGHT: Color = Color::rgba(0.8, 0.8, 0.8, 1.0);
    /// The dark gray preset
    pub const DARK: Color = Color::rgba(0.2, 0.2, 0.2, 1.0);

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Encodes the color as six uppercase hex digits, `RRGGBB`. The alpha channel is not part of
    /// the encoding.
    ///
    /// # Example
    /// ```
    /// # use gamelog_core::Color;
    /// assert_eq!(Color::rgb(1.0, 0.5, 0.0).to_hex_rgb(), "FF8000");
    /// assert_eq!(Color::rgba(1.0, 0.0, 0.0, 0.5).to_hex_rgb(), "FF0000");
    /// ```
    pub fn to_hex_rgb(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// The red, green and blue channels as bytes
    pub fn to_rgb8(&self) -> [u8; 3] {
        [channel_byte(self.r), channel_byte(self.g), channel_byte(self.b)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::DARK
    }
}

fn channel_byte(channel: f32) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex_rgb())?;
        if self.a != 1.0 {
            write!(f, "{:02X}", channel_byte(self.a))?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `light`, `dark`, `#RRGGBB` or `#RRGGBBAA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "light" => return Ok(Color::LIGHT),
            "dark" => return Ok(Color::DARK),
            _ => {}
        }

        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::new(s))?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(s));
        }

        let channel = |index: usize| -> Result<f32, ParseColorError> {
            u8::from_str_radix(&hex[index..index + 2], 16)
                .map(|byte| byte as f32 / 255.0)
                .map_err(|_| ParseColorError::new(s))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// The forms a color may take in a settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Text(String),
    Channels(Vec<f32>),
}

impl TryFrom<ColorRepr> for Color {
    type Error = ParseColorError;

    fn try_from(value: ColorRepr) -> Result<Self, Self::Error> {
        match value {
            ColorRepr::Text(text) => text.parse(),
            ColorRepr::Channels(channels) => match channels[..] {
                [r, g, b] => Ok(Color::rgb(r, g, b)),
                [r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
                _ => Err(ParseColorError::new(format!("{:?}", channels))),
            },
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        ColorRepr::Channels(vec![color.r, color.g, color.b, color.a])
    }
}
