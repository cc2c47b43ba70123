//! Filament: a generative space-filling trace simulation.
//!
//! A fixed pool of cursors wanders a 2-D grid, claiming unfilled cells
//! and recording colored directional links back along their paths,
//! until every cell is claimed. Hosts drive the simulation by calling
//! [`Simulation::tick`] at their own cadence and read the grid and
//! cursor snapshots to render the trace; all drawing, windowing, and
//! input handling stays on the host side.
//!
//! This facade crate re-exports the public API of the `filament-core`,
//! `filament-grid`, and `filament-engine` sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use filament::prelude::*;
//!
//! let config = SimConfig {
//!     width: 8,
//!     height: 8,
//!     cursor_count: 4,
//!     color_count: 2,
//!     seed: 7,
//! };
//! let mut sim = Simulation::new(config).unwrap();
//!
//! // Tick until the trace covers the grid.
//! let done = sim.run_until_complete(TickOptions::default(), 1_000_000);
//! assert!(done.is_some());
//!
//! // Snapshot accessors feed a renderer.
//! let filled = sim.grid().cells().iter().filter(|c| c.filled).count();
//! assert_eq!(filled, 64);
//! assert_eq!(sim.cursors().len(), 4);
//! ```
//!
//! Behavior toggles live in [`TickOptions`] and may change between
//! ticks: `retrace` lets cursors walk back along their own trails,
//! `jump_to_own` relocates stuck cursors onto their team's frontier,
//! `move_both` allows diagonal steps, and `gravity` biases every step
//! downward.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use filament_core::{
    Color, ConfigError, Direction, Epoch, GridPos, SimConfig, TickId, TickOptions,
};
pub use filament_engine::{Cursor, CursorPool, JumpOutcome, Simulation, StepVerdict};
pub use filament_grid::{Cell, Connections, Grid, GridError, Link};

/// The common imports for driving a simulation.
pub mod prelude {
    pub use filament_core::{Color, Direction, GridPos, SimConfig, TickOptions};
    pub use filament_engine::Simulation;
    pub use filament_grid::Grid;
}
