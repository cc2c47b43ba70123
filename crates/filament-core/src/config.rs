//! Simulation configuration and per-tick options.

use crate::error::ConfigError;

/// Structural configuration for a simulation, fixed for its lifetime.
///
/// Validated by [`validate()`](SimConfig::validate) before a simulation
/// is constructed. Defaults mirror the classic trace: an 80x80 grid,
/// one cursor per two rows, four colors.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Number of cursors in the pool.
    pub cursor_count: u32,
    /// Number of palette colors actually assigned to cursors.
    ///
    /// Must not exceed `cursor_count`; when smaller, distinct cursors
    /// share colors and act as a team for retrace and jump-to-own.
    pub color_count: u32,
    /// Seed for the simulation's RNG stream.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 80,
            cursor_count: 40,
            color_count: 4,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Check structural invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use filament_core::SimConfig;
    ///
    /// assert!(SimConfig::default().validate().is_ok());
    /// let bad = SimConfig { color_count: 0, ..Default::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > i32::MAX as u32 {
            return Err(ConfigError::DimensionTooLarge {
                name: "width",
                value: self.width,
            });
        }
        if self.height > i32::MAX as u32 {
            return Err(ConfigError::DimensionTooLarge {
                name: "height",
                value: self.height,
            });
        }
        if self.cursor_count == 0 {
            return Err(ConfigError::NoCursors);
        }
        if self.color_count == 0 {
            return Err(ConfigError::NoColors);
        }
        if self.color_count > self.cursor_count {
            return Err(ConfigError::TooManyColors {
                colors: self.color_count,
                cursors: self.cursor_count,
            });
        }
        Ok(())
    }

    /// Total cell count of the configured grid.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Behavior toggles consulted on every tick.
///
/// Hosts flip these between ticks; none of them changes grid state by
/// itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOptions {
    /// Allow a cursor to walk back along its own previously drawn link.
    pub retrace: bool,
    /// When stuck, relocate to a live same-color frontier cell instead
    /// of a uniformly random cell.
    pub jump_to_own: bool,
    /// Let both axes move independently in one step (diagonals allowed).
    pub move_both: bool,
    /// Force every step downward.
    pub gravity: bool,
    /// Accepted for host compatibility; has no effect on the core.
    pub weave: bool,
}
