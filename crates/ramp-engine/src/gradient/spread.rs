use std::fmt;
use std::str::FromStr;

use crate::paint::ParseError;

/// Gradient spread behavior outside the `[0, 1]` range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    pub const ALL: [SpreadMode; 3] = [SpreadMode::Pad, SpreadMode::Repeat, SpreadMode::Reflect];

    /// Maps an arbitrary query position into `[0, 1]`.
    ///
    /// NaN resolves to 0.0 under every mode. Infinite positions clamp under
    /// `Pad` and resolve to 0.0 otherwise, since their phase is undefined.
    pub fn resolve(self, pos: f64) -> f64 {
        if pos.is_nan() {
            return 0.0;
        }
        match self {
            SpreadMode::Pad => pos.clamp(0.0, 1.0),
            _ if pos.is_infinite() => 0.0,
            SpreadMode::Repeat => {
                let p = pos % 1.0;
                if p < 0.0 { (p + 1.0).min(1.0) } else { p }
            }
            SpreadMode::Reflect => {
                let p = (pos % 2.0).abs();
                if p > 1.0 { 2.0 - p } else { p }
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SpreadMode::Pad => "pad",
            SpreadMode::Repeat => "repeat",
            SpreadMode::Reflect => "reflect",
        }
    }
}

impl fmt::Display for SpreadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpreadMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpreadMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::new(format!("unknown spread mode '{s}'"), 1))
    }
}
