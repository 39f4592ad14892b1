//! The closed color palette shared by nodes and arrows.
//!
//! Colors are validated eagerly at every boundary (layout parsing, arrow
//! wiring); an unrecognized name is rejected immediately rather than on
//! first use. Once assigned to a node, a color never changes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A color drawn from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Orange,
    Blue,
    Cyan,
    Purple,
    Black,
    Red,
    Green,
}

impl Color {
    /// Every color in the palette, in a fixed canonical order.
    pub const ALL: [Color; 7] = [
        Color::Orange,
        Color::Blue,
        Color::Cyan,
        Color::Purple,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// The lowercase palette name.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Purple => "purple",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
        }
    }

    fn expected_list() -> String {
        Color::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orange" => Ok(Color::Orange),
            "blue" => Ok(Color::Blue),
            "cyan" => Ok(Color::Cyan),
            "purple" => Ok(Color::Purple),
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            _ => Err(crate::Error::UnknownColor {
                input: s.to_string(),
                expected: Color::expected_list(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_names_case_insensitively() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!(" Purple ".parse::<Color>().unwrap(), Color::Purple);
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
    }

    #[test]
    fn rejects_unknown_colors() {
        let err = "magenta".parse::<Color>().unwrap_err();
        assert!(matches!(err, crate::Error::UnknownColor { .. }));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Color::Cyan).unwrap();
        assert_eq!(json, "\"cyan\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Cyan);
    }
}
