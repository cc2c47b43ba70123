//! Stuck resolution: relocating a fully surrounded cursor.

use crate::cursor::Cursor;
use filament_core::{GridPos, TickOptions};
use filament_grid::Grid;
use rand::Rng;

/// How a stuck cursor was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Relocated to a uniformly random cell (jump-to-own disabled).
    RandomCell(GridPos),
    /// Relocated to a live frontier cell of the cursor's own color.
    OwnFrontier(GridPos),
    /// Random frontier search exhausted; relocated to the first unfilled
    /// cell in row-major order.
    FirstUnfilled(GridPos),
    /// The grid holds no unfilled cell; the cursor stayed put.
    Stayed,
}

/// Relocate `cursor`, which is fully surrounded at its current position.
///
/// With `jump_to_own` disabled the destination is a uniformly random
/// cell, occupied or not — landing on a filled cell is tolerated, the
/// cursor simply retries from there. With it enabled, up to
/// `width * height` random candidates are probed for a filled,
/// not-surrounded cell of the cursor's own color (a live frontier of the
/// team); if the search exhausts its budget, the first unfilled cell in
/// row-major order is used instead so the epoch keeps making progress.
///
/// The relocation is applied through [`Grid::record_move`]: an empty
/// destination is claimed in the cursor's color, an occupied one is
/// left untouched, and no link is drawn unless the destination happens
/// to land within one step of the source.
pub fn resolve_stuck<R: Rng>(
    grid: &mut Grid,
    cursor: &mut Cursor,
    options: &TickOptions,
    rng: &mut R,
) -> JumpOutcome {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let random_pos = |rng: &mut R| {
        GridPos::new(rng.random_range(0..width), rng.random_range(0..height))
    };

    if !options.jump_to_own {
        let dest = random_pos(rng);
        grid.record_move(cursor.pos, dest, cursor.color);
        cursor.pos = dest;
        return JumpOutcome::RandomCell(dest);
    }

    let mut budget = grid.cell_count();
    loop {
        let candidate = random_pos(rng);
        let is_frontier = grid.is_filled(candidate.x, candidate.y)
            && !grid.is_surrounded(candidate.x, candidate.y)
            && grid
                .cell(candidate.x, candidate.y)
                .map(|c| c.color == cursor.color)
                .unwrap_or(false);
        if is_frontier {
            grid.record_move(cursor.pos, candidate, cursor.color);
            cursor.pos = candidate;
            return JumpOutcome::OwnFrontier(candidate);
        }
        if budget == 0 {
            break;
        }
        budget -= 1;
    }

    match grid.first_unfilled() {
        Some(dest) => {
            grid.record_move(cursor.pos, dest, cursor.color);
            cursor.pos = dest;
            JumpOutcome::FirstUnfilled(dest)
        }
        None => JumpOutcome::Stayed,
    }
}
