//! RGBA display colour for boards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Four 0–255 channels. Text form is `(r,g,b,a)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    MissingParentheses,
    ChannelCount(usize),
    InvalidChannel(String),
}

impl Display for ColourParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParentheses => write!(f, "colour must be written as (r,g,b,a)"),
            Self::ChannelCount(count) => {
                write!(f, "colour needs 4 channels, got {count}")
            }
            Self::InvalidChannel(value) => {
                write!(f, "colour channel must be 0-255, got `{value}`")
            }
        }
    }
}

impl Error for ColourParseError {}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ColourParseError::MissingParentheses)?;

        let channels = inner
            .split(',')
            .map(|raw| {
                let raw = raw.trim();
                raw.parse::<u8>()
                    .map_err(|_| ColourParseError::InvalidChannel(raw.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match channels.as_slice() {
            [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
            other => Err(ColourParseError::ChannelCount(other.len())),
        }
    }
}
