//! Rotation-aware edge matching search for small square tile puzzles
//!
//! Tiles carry four border pixel sequences. Two borders fit when no aligned
//! position holds the same non-blank symbol on both sides. The search tries
//! every assignment of tiles to layout places and every quarter-turn rotation,
//! scoring each arrangement by the number of adjacency rules it satisfies.

#![forbid(unsafe_code)]

/// Arrangements, rules, candidate enumeration and the search engine
pub mod algorithm;
/// Puzzle parsing, rendering, image export, progress, logging and CLI
pub mod io;
/// Tile geometry: sides, rotations, edges, tiles and places
pub mod spatial;

pub use io::error::{Result, TileFitError};
