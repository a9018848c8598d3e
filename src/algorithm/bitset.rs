//! Fixed-capacity membership sets over tile indices

use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of tile indices
///
/// Uses 0-based indexing matching positions in the puzzle's tile list.
/// Tracks which tiles a partial permutation has already placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Capacity in tiles
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile index, ignoring indices beyond capacity
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile index
    pub fn remove(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Indices not in the set, ascending
    pub fn missing(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_zeros()
    }

    /// Extract all tile indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
