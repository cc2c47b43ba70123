//! The cursor pool and its color palette.

use filament_core::{Color, GridPos, SimConfig};
use filament_grid::Grid;
use rand::Rng;

/// One wandering agent: a position and the color it claims cells with.
///
/// Cursors are created at reset and never destroyed; their color never
/// changes for the lifetime of an epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Current grid position, always in bounds.
    pub pos: GridPos,
    /// Claim color.
    pub color: Color,
}

/// The fixed pool of cursors plus the palette they draw colors from.
///
/// The palette holds `cursor_count` colors but only the first
/// `color_count` are dealt to cursors, so distinct cursors often share a
/// color and act as one team for retrace and jump-to-own purposes.
#[derive(Clone, Debug)]
pub struct CursorPool {
    cursors: Vec<Cursor>,
    palette: Vec<Color>,
}

impl CursorPool {
    /// An empty pool, used as a placeholder while a simulation is being
    /// constructed. [`generate`](CursorPool::generate) replaces it.
    pub(crate) fn empty() -> Self {
        Self {
            cursors: Vec::new(),
            palette: Vec::new(),
        }
    }

    /// Generate a fresh palette and cursor set for one epoch.
    ///
    /// Each cursor gets a uniformly random position and a color drawn
    /// from the first `color_count` palette entries, and claims its
    /// starting cell on the (already cleared) grid. Two cursors dealt
    /// the same cell simply share it; the first keeps ownership.
    pub fn generate<R: Rng>(config: &SimConfig, grid: &mut Grid, rng: &mut R) -> Self {
        let palette: Vec<Color> = (0..config.cursor_count)
            .map(|_| {
                Color::from_rgb(
                    rng.random_range(0..255),
                    rng.random_range(0..255),
                    rng.random_range(0..255),
                )
            })
            .collect();

        let cursors: Vec<Cursor> = (0..config.cursor_count)
            .map(|_| {
                let pos = GridPos::new(
                    rng.random_range(0..config.width as i32),
                    rng.random_range(0..config.height as i32),
                );
                let color = palette[rng.random_range(0..config.color_count as usize)];
                grid.claim(pos, color);
                Cursor { pos, color }
            })
            .collect();

        Self { cursors, palette }
    }

    /// All cursors, for renderers.
    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }

    /// The full palette generated at reset.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Number of cursors in the pool.
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// True if the pool is empty (never the case for a validated config).
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Copy of the cursor at `idx`.
    pub(crate) fn get(&self, idx: usize) -> Cursor {
        self.cursors[idx]
    }

    /// Move the cursor at `idx`.
    pub(crate) fn set_pos(&mut self, idx: usize, pos: GridPos) {
        self.cursors[idx].pos = pos;
    }
}
