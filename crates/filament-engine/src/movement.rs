//! Movement policy: proposing and classifying one candidate step.

use filament_core::{Color, Direction, GridPos, TickOptions};
use filament_grid::Grid;
use rand::Rng;

/// Attempt budget per cursor per tick.
///
/// Each blocked attempt costs one; an attempt that consulted the
/// retrace path refunds one regardless of its outcome, so a tick is
/// bounded only with probability 1 (the surrounded check fires on every
/// failure and relocations keep making progress).
pub const MOVE_ATTEMPTS: i32 = 4;

/// Classification of one candidate step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepVerdict {
    /// Target is unfilled: move in and claim it.
    Fresh,
    /// Target is the cursor's own trail with a link pointing back toward
    /// the origin: the cursor walks onto it without touching the grid.
    Retrace,
    /// No legal move. `refunded` is true when the retrace path was
    /// consulted, which refunds the attempt.
    Blocked {
        /// Whether this attempt refunds its cost.
        refunded: bool,
    },
}

/// Propose a velocity in `{-1, 0, 1}^2` according to the mode flags.
///
/// Single-axis mode picks an axis with even odds, then a sign; both-axes
/// mode gates each axis independently at 50% and then picks its sign;
/// gravity overrides the vertical component to `+1` in either mode.
pub fn propose_velocity<R: Rng>(rng: &mut R, options: &TickOptions) -> (i32, i32) {
    let mut vx = 0;
    let mut vy = 0;
    if options.move_both {
        if rng.random_range(0..2) == 0 {
            vx = if rng.random_range(0..2) == 0 { 1 } else { -1 };
        }
        if rng.random_range(0..2) == 0 {
            vy = if rng.random_range(0..2) == 0 { 1 } else { -1 };
        }
    } else if rng.random_range(0..2) == 0 {
        vx = if rng.random_range(0..2) == 0 { 1 } else { -1 };
    } else {
        vy = if rng.random_range(0..2) == 0 { 1 } else { -1 };
    }
    if options.gravity {
        vy = 1;
    }
    (vx, vy)
}

/// The direction whose link the retrace check consults on the target.
///
/// The y axis wins when both components are nonzero; a cursor moving
/// down retraces through the target's `up` link, and so on: the link
/// must point back toward the cursor's origin.
fn retrace_back_link(vx: i32, vy: i32) -> Option<Direction> {
    if vy < 0 {
        Some(Direction::Down)
    } else if vy > 0 {
        Some(Direction::Up)
    } else if vx < 0 {
        Some(Direction::Right)
    } else if vx > 0 {
        Some(Direction::Left)
    } else {
        None
    }
}

/// Classify the candidate step `origin -> candidate` proposed with
/// velocity `(vx, vy)`.
///
/// A candidate clamped back onto the origin is a plain failure. An
/// unfilled target is always [`StepVerdict::Fresh`]. A filled target is
/// walkable only when retracing is enabled, the target carries the
/// cursor's own color, and its back link toward the origin is on.
pub fn classify(
    grid: &Grid,
    cursor_color: Color,
    origin: GridPos,
    candidate: GridPos,
    (vx, vy): (i32, i32),
    options: &TickOptions,
) -> StepVerdict {
    if candidate == origin {
        return StepVerdict::Blocked { refunded: false };
    }
    if !grid.is_filled(candidate.x, candidate.y) {
        return StepVerdict::Fresh;
    }
    if !options.retrace {
        return StepVerdict::Blocked { refunded: false };
    }
    let Some(back) = retrace_back_link(vx, vy) else {
        return StepVerdict::Blocked { refunded: false };
    };
    let target = match grid.cell(candidate.x, candidate.y) {
        Some(c) => c,
        None => return StepVerdict::Blocked { refunded: false },
    };
    if target.color == cursor_color && target.connections.link(back).on {
        StepVerdict::Retrace
    } else {
        StepVerdict::Blocked { refunded: true }
    }
}
