//! Error types for simulation construction.

use std::error::Error;
use std::fmt;

/// Errors detected during [`SimConfig::validate()`](crate::SimConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid has zero cells.
    EmptyGrid {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Cursor pool is empty.
    NoCursors,
    /// Palette would assign zero colors.
    NoColors,
    /// More colors requested than cursors exist to carry them.
    TooManyColors {
        /// Configured color count.
        colors: u32,
        /// Configured cursor count.
        cursors: u32,
    },
    /// A grid dimension exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Axis name ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid {width}x{height} has zero cells")
            }
            Self::NoCursors => write!(f, "cursor_count must be at least 1"),
            Self::NoColors => write!(f, "color_count must be at least 1"),
            Self::TooManyColors { colors, cursors } => {
                write!(f, "color_count {colors} exceeds cursor_count {cursors}")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} {value} exceeds the i32 coordinate range")
            }
        }
    }
}

impl Error for ConfigError {}
