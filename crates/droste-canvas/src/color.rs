use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Error, Debug)]
#[error("unrecognized color '{0}': expected a named color or #rrggbb")]
pub struct ColorParseError(String);

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts a small set of CSS color names and `#rrggbb` hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            "red" => return Ok(Color::RED),
            "green" => return Ok(Color::GREEN),
            "blue" => return Ok(Color::BLUE),
            "yellow" => return Ok(Color::YELLOW),
            "orange" => return Ok(Color::ORANGE),
            "purple" => return Ok(Color::PURPLE),
            "gray" | "grey" => return Ok(Color::GRAY),
            _ => {}
        }
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        if hex.len() != 6 {
            return Err(ColorParseError(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(Color::rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}
