//! Error types for fallible geometric operations.
//!
//! Most operations on points and regions are total. The few that carry a
//! precondition offer a `try_` variant returning [`GeomError`] alongside
//! the panicking form.

use std::error::Error;
use std::fmt;

/// Errors from precondition checks on points and regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A rotation was requested with a quarter-turn count outside `[0, 4]`.
    InvalidTurns {
        /// The rejected turn count.
        turns: i32,
    },
    /// A region has no interior on some axis (`min >= max` for a
    /// half-open query), so nothing can be clamped into it.
    EmptyRegion {
        /// Name of the degenerate axis (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// Lower bound on that axis.
        min: i32,
        /// Upper bound on that axis.
        max: i32,
    },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTurns { turns } => {
                write!(f, "rotation turns must be in [0, 4], got {turns}")
            }
            Self::EmptyRegion { axis, min, max } => {
                write!(f, "empty region on {axis} axis: [{min}, {max})")
            }
        }
    }
}

impl Error for GeomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_turns() {
        let e = GeomError::InvalidTurns { turns: 5 };
        assert_eq!(e.to_string(), "rotation turns must be in [0, 4], got 5");
    }

    #[test]
    fn display_empty_region() {
        let e = GeomError::EmptyRegion {
            axis: "y",
            min: 3,
            max: 3,
        };
        assert_eq!(e.to_string(), "empty region on y axis: [3, 3)");
    }
}
