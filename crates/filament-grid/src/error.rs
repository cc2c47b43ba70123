//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A dimension exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Axis name ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid {width}x{height} must have at least one cell")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} {value} exceeds the i32 coordinate range")
            }
        }
    }
}

impl Error for GridError {}
