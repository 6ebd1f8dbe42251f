//! Text layout primitives for fixed-width boxes
//!
//! Wrapping and padding operate on character counts, not display width;
//! the banner targets plain ASCII-ish terminal output where the two agree.

use crate::errors::ProemError;
use std::str::FromStr;

/// Horizontal alignment of text within the box interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// One space of margin, then the text, remainder to the right
    #[default]
    Left,
    /// Padding split evenly; an odd leftover space goes to the right
    Center,
    /// Text flush against a single space of margin before the right border
    Right,
}

impl FromStr for Align {
    type Err = ProemError;

    /// Parse an alignment name
    ///
    /// Names are matched exactly (`left`, `center`, `right`); anything else
    /// is an error. Unlike color names, alignment is not forgiving: a typo
    /// here changes the banner's shape rather than its decoration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(ProemError::InvalidAlignment {
                value: s.to_string(),
            }),
        }
    }
}

/// Split text into consecutive chunks of at most `width` characters
///
/// The final chunk may be shorter; no characters are ever dropped. Empty
/// input yields no chunks. A zero width is treated as one so the function
/// stays total.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Pad `text` to exactly `interior` characters under the given alignment
///
/// Callers guarantee the text fits: at most `interior - 2` characters, so
/// the left/right variants always keep their one-space margin.
pub fn pad(text: &str, interior: usize, align: Align) -> String {
    match align {
        Align::Left => format!(" {:<width$}", text, width = interior.saturating_sub(1)),
        Align::Center => format!("{:^width$}", text, width = interior),
        Align::Right => format!("{:>width$} ", text, width = interior.saturating_sub(1)),
    }
}
