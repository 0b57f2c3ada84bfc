//! Decorations wrap a message in inline markup.
//!
//! Decorations are applied left to right and every decoration wraps the result of the previous
//! one, so the last decoration of a sequence ends up as the outermost markup:
//!
//! ```
//! # use gamelog_core::decoration::{apply_decorations, Decoration};
//! let forward = apply_decorations("hi", &[Decoration::BOLD, Decoration::color(1.0, 0.0, 0.0)]);
//! assert_eq!(forward, "<color=#FF0000><b>hi</b></color>");
//!
//! let reversed = apply_decorations("hi", &[Decoration::color(1.0, 0.0, 0.0), Decoration::BOLD]);
//! assert_eq!(reversed, "<b><color=#FF0000>hi</color></b>");
//! ```

use crate::color::Color;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single text decoration directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    /// Wraps the message in a `<color=#RRGGBB>` span. Alpha is dropped when rendered.
    Color(Color),
    Bold,
    Italic,
    /// A decoration this model does not know how to render. Applying it leaves the message
    /// untouched.
    Unrecognized(String),
}

impl Decoration {
    pub const BOLD: Decoration = Decoration::Bold;
    pub const ITALIC: Decoration = Decoration::Italic;

    /// Create an opaque color decoration
    pub fn color(r: f32, g: f32, b: f32) -> Self {
        Self::Color(Color::rgb(r, g, b))
    }

    /// Create a color decoration with an explicit alpha. The alpha channel is kept on the value,
    /// but the rendered markup is RGB only.
    pub fn color_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::Color(Color::rgba(r, g, b, a))
    }

    /// Wraps the message in this decoration's markup.
    pub fn apply(&self, message: &str) -> String {
        match self {
            Decoration::Color(color) => {
                format!("<color=#{}>{}</color>", color.to_hex_rgb(), message)
            }
            Decoration::Bold => format!("<b>{}</b>", message),
            Decoration::Italic => format!("<i>{}</i>", message),
            Decoration::Unrecognized(_) => message.to_string(),
        }
    }
}

impl From<Color> for Decoration {
    fn from(color: Color) -> Self {
        Decoration::Color(color)
    }
}

impl Display for Decoration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Decoration::Color(color) => write!(f, "{}", color),
            Decoration::Bold => write!(f, "bold"),
            Decoration::Italic => write!(f, "italic"),
            Decoration::Unrecognized(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for Decoration {
    type Err = Infallible;

    /// Parses `bold`, `italic` or any color accepted by [`Color`]'s `FromStr`. Anything else
    /// becomes [`Decoration::Unrecognized`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoration = match s.trim().to_ascii_lowercase().as_str() {
            "bold" | "b" => Decoration::Bold,
            "italic" | "i" => Decoration::Italic,
            _ => match s.parse::<Color>() {
                Ok(color) => Decoration::Color(color),
                Err(_) => Decoration::Unrecognized(s.trim().to_string()),
            },
        };
        Ok(decoration)
    }
}

/// Shorthand for [`Decoration::BOLD`]
pub fn bold() -> Decoration {
    Decoration::BOLD
}

/// Shorthand for [`Decoration::ITALIC`]
pub fn italic() -> Decoration {
    Decoration::ITALIC
}

/// Shorthand for [`Decoration::color`]
pub fn color(r: f32, g: f32, b: f32) -> Decoration {
    Decoration::color(r, g, b)
}

/// Applies every decoration in order, returning the decorated message. The input is never
/// modified.
pub fn apply_decorations<S: AsRef<str>>(message: S, decorations: &[Decoration]) -> String {
    decorations
        .iter()
        .fold(message.as_ref().to_string(), |decorated, decoration| {
            decoration.apply(&decorated)
        })
}
