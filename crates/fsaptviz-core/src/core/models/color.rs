use phf::{Map, phf_map};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An RGB display color with 8 bits per channel.
///
/// This is the unit handed to a structure viewer when coloring atoms. It prints
/// as `#RRGGBB` and can be packed into the `0xRRGGBB` integer form that most
/// viewer engines use for their internal color values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Color {
    pub const LIGHT_GRAY: Color = Color::from_rgb(211, 211, 211);
    pub const GRAY: Color = Color::from_rgb(128, 128, 128);
    pub const LIGHT_BLUE: Color = Color::from_rgb(173, 216, 230);
    pub const CORNFLOWER_BLUE: Color = Color::from_rgb(100, 149, 237);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const LIGHT_PINK: Color = Color::from_rgb(255, 182, 193);
    pub const TOMATO: Color = Color::from_rgb(255, 99, 71);
    pub const RED: Color = Color::from_rgb(255, 0, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color into a `0xRRGGBB` integer.
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Looks up a color by its CSS-style name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }
}

static NAMED_COLORS: Map<&'static str, Color> = phf_map! {
    "black" => Color::from_rgb(0, 0, 0),
    "white" => Color::from_rgb(255, 255, 255),
    "gray" => Color::GRAY,
    "grey" => Color::GRAY,
    "lightgray" => Color::LIGHT_GRAY,
    "lightgrey" => Color::LIGHT_GRAY,
    "background" => Color::from_rgb(136, 136, 136),
    "blue" => Color::BLUE,
    "lightblue" => Color::LIGHT_BLUE,
    "skyblue" => Color::from_rgb(135, 206, 235),
    "cornflowerblue" => Color::CORNFLOWER_BLUE,
    "red" => Color::RED,
    "lightpink" => Color::LIGHT_PINK,
    "tomato" => Color::TOMATO,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid color '{0}': expected a color name (e.g., 'gray') or a '#RRGGBB' hex code")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseColorError(s.to_string()));
            }
            return u32::from_str_radix(hex, 16)
                .map(Color::from_packed)
                .map_err(|_| ParseColorError(s.to_string()));
        }
        Color::named(trimmed).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
