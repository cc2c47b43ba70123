//! Cursor movement and tick orchestration for Filament simulations.
//!
//! The [`Simulation`] aggregate owns the grid, the cursor pool, and a
//! seeded [`ChaCha8Rng`](rand_chacha::ChaCha8Rng); identical
//! configurations produce identical runs. Hosts drive it by calling
//! [`tick()`](Simulation::tick) once per simulation interval and reading
//! the snapshot accessors between ticks.
//!
//! Internals are split along the simulation's component seams:
//! - [`movement`] proposes and classifies one candidate step
//! - [`jump`] relocates a cursor that is fully surrounded
//! - [`cursor`] owns the pool and the color palette
//! - [`sim`] orchestrates the bounded attempt loop and the grid-wide
//!   connection repair that ends every tick

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod jump;
pub mod movement;
pub mod sim;

pub use cursor::{Cursor, CursorPool};
pub use jump::JumpOutcome;
pub use movement::{StepVerdict, MOVE_ATTEMPTS};
pub use sim::Simulation;
