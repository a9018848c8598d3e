//! Tile geometry: sides, rotations, borders and layout slots
//!
//! This module contains the geometric model of the puzzle:
//! - Sides and the pixel-order tables used when they change
//! - The quarter-turn rotation group
//! - Border edges and their clash rule
//! - Tiles and the rotation transform
//! - Layout place labels

/// Tile sides and their reading axes
pub mod direction;
/// Border pixel sequences and edge matching
pub mod edge;
/// Layout slot labels
pub mod place;
/// Quarter-turn rotation group
pub mod rotation;
/// Tiles and the rotation transform
pub mod tiles;

pub use direction::{Direction, Orientation};
pub use edge::{Edge, Pixel};
pub use place::Place;
pub use rotation::Rotation;
pub use tiles::{BlockCell, EdgeSet, Tile};
