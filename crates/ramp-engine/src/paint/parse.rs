use std::fmt;
use std::str::FromStr;

use super::Color;

/// Error produced when a textual color, stop or mode literal is malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based column in the input where the problem was detected.
    pub column: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, column: usize) -> Self {
        Self { message: msg.into(), column }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at column {}: {}", self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses `#rrggbb` / `#rrggbbaa` (the `#` is optional) into straight-alpha bytes.
pub fn parse_hex_rgba(src: &str) -> Result<[u8; 4], ParseError> {
    let (hex, offset) = match src.strip_prefix('#') {
        Some(rest) => (rest, 2),
        None => (src, 1),
    };

    if let Some(bad) = hex.find(|c: char| !c.is_ascii_hexdigit()) {
        return Err(ParseError::new(
            format!("invalid hex digit in color literal '{src}'"),
            offset + bad,
        ));
    }
    let count = hex.len();
    if count != 6 && count != 8 {
        return Err(ParseError::new(
            format!("color literal must be #rrggbb or #rrggbbaa, got {count} digits"),
            offset,
        ));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| ParseError::new(e.to_string(), offset + i))
    };
    let a = if count == 8 { channel(6)? } else { 255 };
    Ok([channel(0)?, channel(2)?, channel(4)?, a])
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b, a] = parse_hex_rgba(s.trim())?;
        Ok(Color::from_srgb_u8(r, g, b, a))
    }
}
