//! Dense enumeration of permutation × rotation candidates
//!
//! Every candidate has an index in `0..len()`. The index is permutation-major:
//! consecutive indices share a permutation and walk through rotation
//! combinations as a base-4 counter, the first rotating slot being the least
//! significant digit. Addressing candidates by index keeps the walk stateless
//! and lets a range of indices be handed to any caller independently.

use crate::algorithm::bitset::TileBitset;
use crate::spatial::Rotation;

/// One point of the search space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the enumeration
    pub index: u64,
    /// Tile index filling each slot
    pub order: Vec<usize>,
    /// Base rotation of each slot
    pub rotations: Vec<Rotation>,
}

/// All candidates for a tile count, optionally anchoring the first tile
///
/// When anchored, tile 0 always fills the first slot unrotated, which removes
/// duplicate layouts reachable by relabelling the whole puzzle.
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    tile_count: usize,
    anchored: bool,
    permutations: Vec<Vec<usize>>,
    rotation_combinations: u64,
}

impl CandidateSpace {
    /// Enumerate candidates for `tile_count` tiles
    pub fn new(tile_count: usize, anchored: bool) -> Self {
        let anchored = anchored && tile_count > 0;
        let prefix: &[usize] = if anchored { &[0] } else { &[] };
        let free_slots = tile_count - prefix.len();
        let rotation_combinations =
            4_u64.saturating_pow(u32::try_from(free_slots).unwrap_or(u32::MAX));

        Self {
            tile_count,
            anchored,
            permutations: permutations(tile_count, prefix),
            rotation_combinations,
        }
    }

    /// Number of tiles and slots
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Whether tile 0 is pinned to the first slot
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Number of distinct tile orders
    pub const fn permutation_count(&self) -> u64 {
        self.permutations.len() as u64
    }

    /// Number of rotation combinations tried per order
    pub const fn rotation_combinations(&self) -> u64 {
        self.rotation_combinations
    }

    /// Total number of candidates
    pub const fn len(&self) -> u64 {
        self.permutation_count()
            .saturating_mul(self.rotation_combinations)
    }

    /// Whether there is nothing to enumerate
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate at `index`, or `None` past the end
    pub fn candidate(&self, index: u64) -> Option<Candidate> {
        let permutation = usize::try_from(index / self.rotation_combinations).ok()?;
        let order = self.permutations.get(permutation)?.clone();

        let mut combination = index % self.rotation_combinations;
        let rotations = (0..self.tile_count)
            .map(|slot| {
                if self.anchored && slot == 0 {
                    Rotation::None
                } else {
                    let turns = (combination % 4) as u8;
                    combination /= 4;
                    Rotation::from_quarter_turns(turns)
                }
            })
            .collect();

        Some(Candidate {
            index,
            order,
            rotations,
        })
    }

    /// Candidates in index order
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        (0..self.len()).filter_map(|index| self.candidate(index))
    }
}

/// Every ordering of `0..tile_count` that starts with `prefix`, in
/// lexicographic order
pub fn permutations(tile_count: usize, prefix: &[usize]) -> Vec<Vec<usize>> {
    let mut used = TileBitset::new(tile_count);
    for &tile in prefix {
        used.insert(tile);
    }
    if used.count() != prefix.len() || prefix.iter().any(|&tile| tile >= tile_count) {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut current = prefix.to_vec();
    extend_permutations(&mut current, &mut used, &mut result);
    result
}

fn extend_permutations(
    current: &mut Vec<usize>,
    used: &mut TileBitset,
    result: &mut Vec<Vec<usize>>,
) {
    if used.count() == used.capacity() {
        result.push(current.clone());
        return;
    }

    let remaining: Vec<usize> = used.missing().collect();
    for tile in remaining {
        used.insert(tile);
        current.push(tile);
        extend_permutations(current, used, result);
        current.pop();
        used.remove(tile);
    }
}
