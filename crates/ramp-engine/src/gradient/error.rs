use std::fmt;

/// Rejected gradient mutation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientError {
    /// `insert_stop` only accepts positions strictly inside `(0, 1)`.
    /// Boundary stops are established through `set_stops`.
    StopOutOfRange { position: f64 },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::StopOutOfRange { position } => write!(
                f,
                "stop position {position} is not strictly inside (0, 1)"
            ),
        }
    }
}

impl std::error::Error for GradientError {}
