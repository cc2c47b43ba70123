//! Grid state and connectivity tracking for Filament simulations.
//!
//! The [`Grid`] is a flat row-major array of [`Cell`]s. Each cell tracks
//! whether it has been claimed, its owner color, and up to four
//! directional [`Link`]s recording the edge a cursor drew when it moved
//! out of the cell. Links exist purely so a renderer can draw the trace;
//! [`Grid::repair_connections`] keeps them consistent when independent
//! cursors recolor adjacent territory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{Cell, Connections, Link};
pub use error::GridError;
pub use grid::Grid;
