//! Cells and their directional links.

use filament_core::{Color, Direction};

/// One directional trace edge recorded on a cell.
///
/// A link is set on the *source* cell of a move, pointing in the travel
/// direction, tagged with the source cell's color at the time of the
/// move. Renderers draw a half-tile bridge toward the neighbour for
/// every `on` link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    /// Whether the edge is currently drawn.
    pub on: bool,
    /// Color the edge was drawn with.
    pub color: Color,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            on: false,
            color: Color::WHITE,
        }
    }
}

/// The four link slots of a cell, addressable by [`Direction`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Connections {
    /// Edge toward the left neighbour.
    pub left: Link,
    /// Edge toward the right neighbour.
    pub right: Link,
    /// Edge toward the upper neighbour.
    pub up: Link,
    /// Edge toward the lower neighbour.
    pub down: Link,
}

impl Connections {
    /// The link slot for `dir`.
    pub fn link(&self, dir: Direction) -> &Link {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    /// Mutable access to the link slot for `dir`.
    pub fn link_mut(&mut self, dir: Direction) -> &mut Link {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    /// True if any of the four links is on.
    pub fn any_on(&self) -> bool {
        self.left.on || self.right.on || self.up.on || self.down.on
    }
}

/// One grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// True once any cursor has claimed the cell.
    pub filled: bool,
    /// Owner color; meaningful only while `filled` is true.
    pub color: Color,
    /// Directional trace edges out of this cell.
    pub connections: Connections,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            filled: false,
            color: Color::WHITE,
            connections: Connections::default(),
        }
    }
}
