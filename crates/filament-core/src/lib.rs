//! Core types for the Filament trace simulation.
//!
//! This crate defines the vocabulary shared by the grid and engine
//! crates: packed colors, cardinal directions, grid positions, tick and
//! epoch counters, and the simulation configuration surface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod id;
pub mod pos;

pub use color::Color;
pub use config::{SimConfig, TickOptions};
pub use direction::Direction;
pub use error::ConfigError;
pub use id::{Epoch, TickId};
pub use pos::GridPos;
