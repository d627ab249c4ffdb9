//! Slide Model - Positioned slide elements and their properties
//!
//! This crate provides the element model that the layout engine operates on:
//! shapes, pictures and graphic frames, each exposing the same positional
//! accessor contract in English Metric Units (914,400 per inch).

mod error;
mod element_id;
mod element;
pub mod units;
pub mod color;
pub mod crop;
pub mod shape;
pub mod picture;
pub mod frame;

pub use error::*;
pub use element_id::*;
pub use element::*;
pub use units::*;
pub use color::*;
pub use crop::*;
pub use shape::*;
pub use picture::*;
pub use frame::*;
