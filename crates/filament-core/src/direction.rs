//! Cardinal directions on the grid.

use std::fmt;

/// One of the four orthogonal directions.
///
/// `Up` is toward decreasing `y`, `Down` toward increasing `y`,
/// matching the screen-space convention of the renderer side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing `x`.
    Left,
    /// Toward increasing `x`.
    Right,
    /// Toward decreasing `y`.
    Up,
    /// Toward increasing `y`.
    Down,
}

impl Direction {
    /// All four directions, in link-slot order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The `(dx, dy)` offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Map a step vector to a direction, x axis taking priority.
    ///
    /// Diagonal steps resolve to their horizontal component; this is the
    /// order link recording uses. Returns `None` for a zero vector.
    pub fn from_velocity(dx: i32, dy: i32) -> Option<Direction> {
        if dx < 0 {
            Some(Direction::Left)
        } else if dx > 0 {
            Some(Direction::Right)
        } else if dy < 0 {
            Some(Direction::Up)
        } else if dy > 0 {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn from_velocity_prefers_x_axis() {
        assert_eq!(Direction::from_velocity(-1, 1), Some(Direction::Left));
        assert_eq!(Direction::from_velocity(1, -1), Some(Direction::Right));
        assert_eq!(Direction::from_velocity(0, -1), Some(Direction::Up));
        assert_eq!(Direction::from_velocity(0, 1), Some(Direction::Down));
        assert_eq!(Direction::from_velocity(0, 0), None);
    }
}
