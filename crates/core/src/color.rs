//! Border color names and ANSI styling
//!
//! Maps the supported color names onto [`console::Color`] and builds the
//! styles used to paint border glyphs. Styling is forced on so a rendered
//! banner carries the same escape sequences whether stdout is a terminal
//! or a pipe.

use console::{Color, Style};
use std::collections::HashMap;

/// Supported border color names
static COLOR_NAMES: once_cell::sync::Lazy<HashMap<&'static str, Color>> =
    once_cell::sync::Lazy::new(|| {
        HashMap::from([
            ("black", Color::Black),
            ("red", Color::Red),
            ("green", Color::Green),
            ("yellow", Color::Yellow),
            ("blue", Color::Blue),
            ("magenta", Color::Magenta),
            ("cyan", Color::Cyan),
            ("white", Color::White),
        ])
    });

/// Look up a border color by name (case-insensitive)
///
/// Returns `None` for names outside the supported set; callers decide how
/// to degrade (the builder logs a warning and renders without color).
pub fn lookup(name: &str) -> Option<Color> {
    COLOR_NAMES.get(name.to_lowercase().as_str()).copied()
}

/// Build the style used to paint border text in the given color
///
/// Styling is forced so the escape sequences survive redirection; callers
/// that want plain output skip the style entirely rather than relying on
/// terminal detection.
pub fn border_style(color: Color) -> Style {
    Style::new().fg(color).force_styling(true)
}
