//! The owning simulation aggregate and its tick loop.

use crate::cursor::{Cursor, CursorPool};
use crate::jump;
use crate::movement::{self, StepVerdict, MOVE_ATTEMPTS};
use filament_core::{Color, ConfigError, Epoch, SimConfig, TickId, TickOptions};
use filament_grid::{Grid, GridError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A complete trace simulation: grid, cursor pool, and RNG stream.
///
/// All mutation goes through `&mut self`; snapshot accessors borrow the
/// state produced by the last completed tick, so a host cannot observe
/// a half-applied tick. There is no internal concurrency — one tick runs
/// to completion on the calling thread.
///
/// The RNG is a [`ChaCha8Rng`] seeded from the configuration, so a run
/// is a pure function of `SimConfig` and the sequence of
/// [`TickOptions`] passed to [`tick()`](Simulation::tick).
///
/// # Examples
///
/// ```
/// use filament_engine::Simulation;
/// use filament_core::{SimConfig, TickOptions};
///
/// let config = SimConfig {
///     width: 8,
///     height: 8,
///     cursor_count: 4,
///     color_count: 2,
///     seed: 7,
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// while !sim.is_complete() {
///     sim.tick(TickOptions::default());
/// }
/// assert!(sim.grid().cells().iter().all(|c| c.filled));
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    cursors: CursorPool,
    rng: ChaCha8Rng,
    tick_id: TickId,
    epoch: Epoch,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height).map_err(|e| match e {
            GridError::EmptyGrid { width, height } => ConfigError::EmptyGrid { width, height },
            GridError::DimensionTooLarge { name, value } => {
                ConfigError::DimensionTooLarge { name, value }
            }
        })?;
        let mut sim = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            grid,
            cursors: CursorPool::empty(),
            tick_id: TickId(0),
            epoch: Epoch(0),
            config,
        };
        sim.populate();
        Ok(sim)
    }

    fn populate(&mut self) {
        self.grid.reset();
        self.cursors = CursorPool::generate(&self.config, &mut self.grid, &mut self.rng);
        self.tick_id = TickId(0);
    }

    /// Start a fresh epoch: clear the grid and regenerate palette and
    /// cursors.
    ///
    /// The RNG stream continues rather than reseeding, so a seeded run
    /// stays reproducible across epochs. The tick counter restarts at 0
    /// and the epoch counter advances.
    pub fn reset(&mut self) {
        self.populate();
        self.epoch.0 += 1;
    }

    /// Advance the simulation one step.
    ///
    /// Every cursor takes one turn (a bounded attempt loop over the
    /// movement policy, with stuck resolution when it is surrounded),
    /// then a grid-wide connection repair pass clears links left stale
    /// by independent fills. Returns the new tick id.
    ///
    /// On a complete grid this only advances the tick counter; hosts
    /// normally gate on [`is_complete()`](Simulation::is_complete) and
    /// stop ticking.
    pub fn tick(&mut self, options: TickOptions) -> TickId {
        if !self.grid.is_complete() {
            for idx in 0..self.cursors.len() {
                self.step_cursor(idx, &options);
            }
            self.grid.repair_connections();
        }
        self.tick_id.0 += 1;
        self.tick_id
    }

    /// One cursor's turn for this tick.
    fn step_cursor(&mut self, idx: usize, options: &TickOptions) {
        let width = self.grid.width();
        let height = self.grid.height();
        let mut attempts = MOVE_ATTEMPTS;
        // Refunded attempts keep the budget flat, so a separate hard cap
        // ensures the turn ends even when every proposal lands on a
        // filled neighbour (possible under gravity with retrace on).
        let mut iterations = (self.grid.cell_count() as u64).max(MOVE_ATTEMPTS as u64);
        while attempts > 0 && iterations > 0 {
            iterations -= 1;
            let cursor = self.cursors.get(idx);
            let vel = movement::propose_velocity(&mut self.rng, options);
            let candidate = cursor.pos.offset_clamped(vel.0, vel.1, width, height);
            match movement::classify(
                &self.grid,
                cursor.color,
                cursor.pos,
                candidate,
                vel,
                options,
            ) {
                StepVerdict::Fresh => {
                    self.grid.record_move(cursor.pos, candidate, cursor.color);
                    self.cursors.set_pos(idx, candidate);
                    return;
                }
                StepVerdict::Retrace => {
                    // Walking back over own trail claims nothing.
                    self.cursors.set_pos(idx, candidate);
                    return;
                }
                StepVerdict::Blocked { refunded } => {
                    if !refunded {
                        attempts -= 1;
                    }
                    if self.grid.is_surrounded(cursor.pos.x, cursor.pos.y) {
                        let mut stuck = cursor;
                        jump::resolve_stuck(&mut self.grid, &mut stuck, options, &mut self.rng);
                        self.cursors.set_pos(idx, stuck.pos);
                        // A fallback relocation can fill the last cell;
                        // nothing is left for this cursor to do then.
                        if self.grid.is_complete() {
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Run ticks until the grid completes or `max_ticks` elapse.
    ///
    /// Returns the tick id at which completion was observed, or `None`
    /// if the budget ran out first.
    pub fn run_until_complete(&mut self, options: TickOptions, max_ticks: u64) -> Option<TickId> {
        for _ in 0..max_ticks {
            if self.grid.is_complete() {
                return Some(self.tick_id);
            }
            self.tick(options);
        }
        self.grid.is_complete().then_some(self.tick_id)
    }

    /// True iff every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Ticks executed since the last reset.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Epochs completed (resets performed) since construction.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only grid snapshot for renderers.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only cursor snapshot for renderers.
    pub fn cursors(&self) -> &[Cursor] {
        self.cursors.cursors()
    }

    /// The palette generated at the last reset.
    pub fn palette(&self) -> &[Color] {
        self.cursors.palette()
    }
}
