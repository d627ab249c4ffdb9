//! Layout Engine - Distribution, grid layout and aspect-ratio scaling
//!
//! This crate positions and sizes slide elements. Every operation reads the
//! elements through the [`PositionedElement`] contract, computes the full set
//! of new bounds, and only then writes them back.

mod error;
mod geometry;
mod config;
mod engine;
pub mod distribute;
pub mod grid;
pub mod scale;
pub mod align;

pub use error::*;
pub use geometry::{Gutter, Padding};
pub use config::*;
pub use engine::*;
pub use distribute::*;
pub use grid::*;
pub use scale::*;
pub use align::*;

pub use slide_model::{Axis, Bounds, Croppable, PositionedElement, SourceRect};
