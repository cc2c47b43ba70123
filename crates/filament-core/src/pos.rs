//! Grid positions.

use std::fmt;

/// An integer position on the grid.
///
/// Positions held by cursors always satisfy `0 <= x < width` and
/// `0 <= y < height`; intermediate candidate positions are clamped back
/// into bounds rather than wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column, increasing rightward.
    pub x: i32,
    /// Row, increasing downward.
    pub y: i32,
}

impl GridPos {
    /// Construct a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a velocity vector, then clamp into `[0, width) x [0, height)`.
    pub fn offset_clamped(self, dx: i32, dy: i32, width: u32, height: u32) -> GridPos {
        GridPos::new(
            (self.x + dx).clamp(0, width as i32 - 1),
            (self.y + dy).clamp(0, height as i32 - 1),
        )
    }

}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
