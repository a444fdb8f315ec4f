//! Accent colours derived from a track's gradient string.
//!
//! Gradients use the Tailwind form `from-<hue>-<shade> to-<hue>-<shade>`.
//! Only the hue matters here; every hue maps to its 500 shade.

use ratatui::style::Color;

const FALLBACK_FROM: Color = Color::Magenta;
const FALLBACK_TO: Color = Color::Cyan;

/// The two ends of a gradient.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Theme {
    pub from: Color,
    pub to: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            from: FALLBACK_FROM,
            to: FALLBACK_TO,
        }
    }
}

impl Theme {
    /// Parse `gradient`. Unknown or missing stops fall back per stop.
    pub fn from_gradient(gradient: &str) -> Self {
        let mut theme = Self::default();
        for token in gradient.split_whitespace() {
            if let Some(rest) = token.strip_prefix("from-") {
                if let Some(c) = hue_color(rest) {
                    theme.from = c;
                }
            } else if let Some(rest) = token.strip_prefix("to-") {
                if let Some(c) = hue_color(rest) {
                    theme.to = c;
                }
            }
        }
        theme
    }
}

/// `purple-500` -> purple's RGB value.
fn hue_color(stop: &str) -> Option<Color> {
    let hue = stop.split('-').next()?;
    let (r, g, b) = match hue {
        "red" => (0xef, 0x44, 0x44),
        "orange" => (0xf9, 0x73, 0x16),
        "amber" => (0xf5, 0x9e, 0x0b),
        "yellow" => (0xea, 0xb3, 0x08),
        "lime" => (0x84, 0xcc, 0x16),
        "green" => (0x22, 0xc5, 0x5e),
        "emerald" => (0x10, 0xb9, 0x81),
        "teal" => (0x14, 0xb8, 0xa6),
        "cyan" => (0x06, 0xb6, 0xd4),
        "sky" => (0x0e, 0xa5, 0xe9),
        "blue" => (0x3b, 0x82, 0xf6),
        "indigo" => (0x63, 0x66, 0xf1),
        "violet" => (0x8b, 0x5c, 0xf6),
        "purple" => (0xa8, 0x55, 0xf7),
        "fuchsia" => (0xd9, 0x46, 0xef),
        "pink" => (0xec, 0x48, 0x99),
        "rose" => (0xf4, 0x3f, 0x5e),
        _ => return None,
    };
    Some(Color::Rgb(r, g, b))
}
