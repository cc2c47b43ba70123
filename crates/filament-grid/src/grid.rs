//! The grid: a flat row-major array of cells.

use crate::cell::Cell;
use crate::error::GridError;
use filament_core::{Color, Direction, GridPos};
use smallvec::SmallVec;

/// A fixed-size 2-D grid of [`Cell`]s stored as a flat row-major vector.
///
/// Index `x + y * width` addresses column `x` of row `y`. Cells are
/// created once at construction and mutated in place; [`reset`](Grid::reset)
/// returns every cell to the unfilled state without reallocating.
///
/// # Examples
///
/// ```
/// use filament_grid::Grid;
/// use filament_core::{Color, GridPos};
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.fill(GridPos::new(0, 0));
/// assert!(grid.is_filled(0, 0));
/// assert!(grid.record_move(GridPos::new(0, 0), GridPos::new(1, 0), Color(0xFF0000)));
/// assert!(!grid.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-unfilled grid of `width * height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The full cell array in row-major order, for renderers.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True if `(x, y)` lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y));
        (x as usize) + (y as usize) * (self.width as usize)
    }

    /// The cell at `(x, y)`, or `None` out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Return every cell to unfilled white with all links off.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Claim a cell.
    ///
    /// Precondition: the cell is in bounds and unfilled. Violations are
    /// debug-asserted and ignored in release builds.
    pub fn fill(&mut self, pos: GridPos) {
        debug_assert!(self.in_bounds(pos.x, pos.y), "fill out of bounds: {pos}");
        if !self.in_bounds(pos.x, pos.y) {
            return;
        }
        let idx = self.index(pos.x, pos.y);
        debug_assert!(!self.cells[idx].filled, "fill on filled cell: {pos}");
        self.cells[idx].filled = true;
    }

    /// Claim and paint a cursor's starting cell.
    ///
    /// Unlike [`fill`](Grid::fill) this tolerates an already-filled
    /// target: two cursors may be dealt the same starting cell, in which
    /// case the first one keeps ownership.
    pub fn claim(&mut self, pos: GridPos, color: Color) {
        if !self.in_bounds(pos.x, pos.y) || self.is_filled(pos.x, pos.y) {
            return;
        }
        let idx = self.index(pos.x, pos.y);
        self.cells[idx].filled = true;
        self.cells[idx].color = color;
    }

    /// True if the in-bounds cell `(x, y)` is filled.
    ///
    /// Out-of-bounds queries are a caller error; use
    /// [`is_filled_or_out_of_bounds`](Grid::is_filled_or_out_of_bounds)
    /// or [`is_filled_in_bounds`](Grid::is_filled_in_bounds) when the
    /// coordinate may lie outside the grid.
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map(|c| c.filled).unwrap_or(false)
    }

    /// Filled check that treats out-of-bounds as filled.
    ///
    /// Simplifies edge detection: a wall counts as a neighbour you
    /// cannot move into.
    pub fn is_filled_or_out_of_bounds(&self, x: i32, y: i32) -> bool {
        !self.in_bounds(x, y) || self.cells[self.index(x, y)].filled
    }

    /// Filled check that treats out-of-bounds as unfilled.
    pub fn is_filled_in_bounds(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x, y)].filled
    }

    /// True iff all four orthogonal neighbours are filled or walls.
    ///
    /// A surrounded cursor has no legal fresh move and triggers stuck
    /// resolution.
    pub fn is_surrounded(&self, x: i32, y: i32) -> bool {
        self.is_filled_or_out_of_bounds(x - 1, y)
            && self.is_filled_or_out_of_bounds(x + 1, y)
            && self.is_filled_or_out_of_bounds(x, y - 1)
            && self.is_filled_or_out_of_bounds(x, y + 1)
    }

    /// Record a cursor move from `from` into `to`.
    ///
    /// Returns `false` without touching the grid when `from == to` or
    /// the target is already filled. Otherwise fills the target, paints
    /// it with `color`, and — when the move is a single step (each axis
    /// changes by at most one) — switches on the link on the *source*
    /// cell, tagged with the source cell's current color. A diagonal
    /// step resolves to its horizontal component, so the link points at
    /// the source's x-axis neighbour even though the cursor did not
    /// land there; the repair pass settles that link once the neighbour
    /// fills. Longer relocation jumps fill the target but draw no link.
    pub fn record_move(&mut self, from: GridPos, to: GridPos, color: Color) -> bool {
        if from == to {
            return false;
        }
        debug_assert!(
            self.in_bounds(from.x, from.y) && self.in_bounds(to.x, to.y),
            "record_move out of bounds: {from} -> {to}"
        );
        if !self.in_bounds(from.x, from.y) || !self.in_bounds(to.x, to.y) {
            return false;
        }
        let to_idx = self.index(to.x, to.y);
        if self.cells[to_idx].filled {
            return false;
        }
        self.cells[to_idx].filled = true;
        self.cells[to_idx].color = color;
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        if dx.abs() <= 1 && dy.abs() <= 1 {
            if let Some(dir) = Direction::from_velocity(dx, dy) {
                let from_idx = self.index(from.x, from.y);
                let source_color = self.cells[from_idx].color;
                let link = self.cells[from_idx].connections.link_mut(dir);
                link.on = true;
                link.color = source_color;
            }
        }
        true
    }

    /// Clear links whose neighbour has been claimed by another color.
    ///
    /// Two cursors filling adjacent cells independently never create a
    /// link, but a cursor can recolor territory a link already points
    /// into; the stale link would then bridge two different trails. One
    /// row-major pass over the grid clears every `on` link whose filled
    /// neighbour no longer matches the cell's own color. The pass is a
    /// pure function of current fill/color state, so it is idempotent
    /// and its visit order does not matter.
    pub fn repair_connections(&mut self) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                self.repair_cell(x, y);
            }
        }
    }

    fn repair_cell(&mut self, x: i32, y: i32) {
        if !self.is_filled_in_bounds(x, y) {
            return;
        }
        let own_color = self.cells[self.index(x, y)].color;
        // Collect neighbour verdicts first so the link mutation below
        // does not alias the neighbour reads.
        let mut stale: SmallVec<[Direction; 4]> = SmallVec::new();
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (nx, ny) = (x + dx, y + dy);
            let idx = self.index(x, y);
            if !self.cells[idx].connections.link(dir).on {
                continue;
            }
            if self.is_filled_in_bounds(nx, ny)
                && self.cells[self.index(nx, ny)].color != own_color
            {
                stale.push(dir);
            }
        }
        let idx = self.index(x, y);
        for dir in stale {
            self.cells[idx].connections.link_mut(dir).on = false;
        }
    }

    /// True iff every cell is filled. Terminal condition for one epoch.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.filled)
    }

    /// First unfilled cell in row-major order, if any.
    ///
    /// Last-resort relocation target for the jump-to-own search.
    pub fn first_unfilled(&self) -> Option<GridPos> {
        self.cells.iter().position(|c| !c.filled).map(|idx| {
            GridPos::new(
                (idx % self.width as usize) as i32,
                (idx / self.width as usize) as i32,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(Grid::new(0, 4), Err(GridError::EmptyGrid { .. })));
        assert!(matches!(Grid::new(4, 0), Err(GridError::EmptyGrid { .. })));
    }

    #[test]
    fn bounds_queries_disagree_only_off_grid() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(!grid.is_filled_in_bounds(-1, 0));
        assert!(grid.is_filled_or_out_of_bounds(-1, 0));
        assert!(grid.is_filled_or_out_of_bounds(3, 0));
        assert!(!grid.is_filled_or_out_of_bounds(1, 1));
    }

    #[test]
    fn surrounded_on_1x1_grid() {
        // Every neighbour of the single cell is a wall.
        let grid = Grid::new(1, 1).unwrap();
        assert!(grid.is_surrounded(0, 0));
    }

    #[test]
    fn surrounded_requires_all_four_neighbours() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.fill(GridPos::new(0, 1));
        grid.fill(GridPos::new(2, 1));
        grid.fill(GridPos::new(1, 0));
        assert!(!grid.is_surrounded(1, 1));
        grid.fill(GridPos::new(1, 2));
        assert!(grid.is_surrounded(1, 1));
    }

    #[test]
    fn record_move_sets_source_link_and_target_color() {
        let color = Color(0x0000FF);
        let mut grid = Grid::new(2, 2).unwrap();
        let origin = GridPos::new(0, 0);
        grid.fill(origin);
        // Source cell was painted when the cursor claimed it.
        assert!(grid.record_move(origin, GridPos::new(1, 0), color));
        let source = grid.cell(0, 0).unwrap();
        assert!(source.connections.right.on);
        assert_eq!(grid.cell(1, 0).unwrap().color, color);
        assert!(grid.cell(1, 0).unwrap().filled);
        assert!(!grid.is_complete());
    }

    #[test]
    fn record_move_rejects_filled_target_and_self_move() {
        let mut grid = Grid::new(2, 1).unwrap();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        grid.fill(a);
        grid.fill(b);
        assert!(!grid.record_move(a, b, Color(1)));
        assert!(!grid.record_move(a, a, Color(1)));
        assert!(!grid.cell(0, 0).unwrap().connections.any_on());
    }

    #[test]
    fn diagonal_step_records_the_x_axis_link() {
        let color = Color(0x00FF00);
        let mut grid = Grid::new(3, 3).unwrap();
        let origin = GridPos::new(1, 1);
        grid.fill(origin);
        let idx = grid.index(1, 1);
        grid.cells[idx].color = color;
        assert!(grid.record_move(origin, GridPos::new(0, 0), color));
        // The step went up-left; the horizontal component wins, so the
        // source's left link comes on even though (0, 1) is untouched.
        let source = grid.cell(1, 1).unwrap();
        assert!(source.connections.left.on);
        assert_eq!(source.connections.left.color, color);
        assert!(!source.connections.up.on);
        assert!(!grid.is_filled(0, 1));
    }

    #[test]
    fn repair_settles_a_diagonal_link_once_the_neighbour_fills() {
        let green = Color(0x00FF00);
        let purple = Color(0x800080);
        let mut grid = Grid::new(3, 3).unwrap();
        let origin = GridPos::new(1, 1);
        grid.fill(origin);
        let idx = grid.index(1, 1);
        grid.cells[idx].color = green;
        grid.record_move(origin, GridPos::new(0, 0), green);
        // While (0, 1) stays unfilled the link is left alone.
        grid.repair_connections();
        assert!(grid.cell(1, 1).unwrap().connections.left.on);
        // A rival claims the cell the link points at.
        grid.claim(GridPos::new(0, 1), purple);
        grid.repair_connections();
        assert!(!grid.cell(1, 1).unwrap().connections.left.on);
    }

    #[test]
    fn teleport_fills_without_link() {
        let mut grid = Grid::new(4, 4).unwrap();
        let from = GridPos::new(0, 0);
        grid.fill(from);
        assert!(grid.record_move(from, GridPos::new(3, 3), Color(7)));
        assert!(grid.cell(3, 3).unwrap().filled);
        assert!(!grid.cell(0, 0).unwrap().connections.any_on());
    }

    #[test]
    fn repair_clears_link_into_recolored_neighbour() {
        let red = Color(0xFF0000);
        let blue = Color(0x0000FF);
        let mut grid = Grid::new(2, 1).unwrap();
        let a = GridPos::new(0, 0);
        grid.fill(a);
        assert!(grid.record_move(a, GridPos::new(1, 0), red));
        // Another trail claims the neighbour's color.
        grid.cells[1].color = blue;
        assert!(grid.cell(0, 0).unwrap().connections.right.on);
        grid.repair_connections();
        assert!(!grid.cell(0, 0).unwrap().connections.right.on);
    }

    #[test]
    fn repair_keeps_link_when_colors_match() {
        let red = Color(0xFF0000);
        let mut grid = Grid::new(2, 1).unwrap();
        let a = GridPos::new(0, 0);
        grid.fill(a);
        grid.cells[0].color = red;
        assert!(grid.record_move(a, GridPos::new(1, 0), red));
        grid.repair_connections();
        assert!(grid.cell(0, 0).unwrap().connections.right.on);
    }

    #[test]
    fn independent_adjacent_fills_need_no_repair() {
        // Links are only created by record_move, never inferred, so two
        // different-color fills meeting at a boundary leave nothing for
        // repair to do.
        let mut grid = Grid::new(2, 1).unwrap();
        grid.fill(GridPos::new(0, 0));
        grid.cells[0].color = Color(0xAA0000);
        grid.fill(GridPos::new(1, 0));
        grid.cells[1].color = Color(0x00AA00);
        let before = grid.clone();
        grid.repair_connections();
        assert_eq!(grid.cells(), before.cells());
    }

    #[test]
    fn completion_and_first_unfilled() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.fill(GridPos::new(0, 0));
        grid.fill(GridPos::new(1, 0));
        assert_eq!(grid.first_unfilled(), Some(GridPos::new(0, 1)));
        grid.fill(GridPos::new(0, 1));
        grid.fill(GridPos::new(1, 1));
        assert!(grid.is_complete());
        assert_eq!(grid.first_unfilled(), None);
    }

    #[test]
    fn reset_restores_pristine_state() {
        let mut grid = Grid::new(3, 3).unwrap();
        let a = GridPos::new(1, 1);
        grid.fill(a);
        grid.record_move(a, GridPos::new(2, 1), Color(5));
        grid.reset();
        assert_eq!(grid.cells(), Grid::new(3, 3).unwrap().cells());
    }

    /// Random fill/move workload for the idempotence property.
    fn scrambled_grid(seed: &[(u8, u8, u8, u8)]) -> Grid {
        let mut grid = Grid::new(8, 8).unwrap();
        for &(fx, fy, tx, ty) in seed {
            let from = GridPos::new((fx % 8) as i32, (fy % 8) as i32);
            let to = GridPos::new((tx % 8) as i32, (ty % 8) as i32);
            if !grid.is_filled(from.x, from.y) {
                grid.fill(from);
            }
            grid.record_move(from, to, Color(u32::from(fx) * 31 + u32::from(ty)));
        }
        grid
    }

    proptest! {
        #[test]
        fn repair_is_idempotent(moves in proptest::collection::vec(
            (0u8..8, 0u8..8, 0u8..8, 0u8..8), 0..64,
        )) {
            let mut grid = scrambled_grid(&moves);
            grid.repair_connections();
            let once = grid.clone();
            grid.repair_connections();
            prop_assert_eq!(grid.cells(), once.cells());
        }

        #[test]
        fn repaired_links_point_at_matching_filled_neighbours(moves in
            proptest::collection::vec((0u8..8, 0u8..8, 0u8..8, 0u8..8), 0..64,)
        ) {
            let mut grid = scrambled_grid(&moves);
            grid.repair_connections();
            for y in 0..8i32 {
                for x in 0..8i32 {
                    let cell = grid.cell(x, y).unwrap();
                    for dir in filament_core::Direction::ALL {
                        if !cell.connections.link(dir).on {
                            continue;
                        }
                        let (dx, dy) = dir.offset();
                        if let Some(nb) = grid.cell(x + dx, y + dy) {
                            if nb.filled {
                                prop_assert_eq!(nb.color, cell.color);
                            }
                        }
                    }
                }
            }
        }
    }
}
