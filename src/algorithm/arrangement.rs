//! Candidate assignments of tiles to places and their scoring

use crate::algorithm::rules::Rule;
use crate::spatial::{Place, Rotation, Tile};

/// One tile sitting in one place at a base rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    /// The occupying tile, unrotated
    pub tile: &'a Tile,
    /// Rotation applied to the tile in this place
    pub rotation: Rotation,
}

/// Tiles assigned to places in slot order, borrowed rather than copied
///
/// The k-th placement fills the k-th [`Place`]. Rotated views are built on
/// request and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement<'a> {
    placements: Vec<Placement<'a>>,
}

/// Result of checking an arrangement against a rule set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Number of satisfied rules among those checked
    pub score: usize,
    /// Rules found unsatisfied, in rule order
    pub violations: Vec<Rule>,
}

impl Evaluation {
    /// Whether every one of `rule_count` rules was satisfied
    pub const fn is_perfect(&self, rule_count: usize) -> bool {
        self.score == rule_count
    }
}

impl<'a> Arrangement<'a> {
    /// Arrangement from explicit placements
    pub const fn new(placements: Vec<Placement<'a>>) -> Self {
        Self { placements }
    }

    /// Tiles in their given order, all unrotated
    pub fn identity(tiles: &'a [Tile]) -> Self {
        Self::new(
            tiles
                .iter()
                .map(|tile| Placement {
                    tile,
                    rotation: Rotation::None,
                })
                .collect(),
        )
    }

    /// Arrangement placing `tiles[order[k]]` in slot k at `rotations[k]`
    ///
    /// Indices outside `tiles` are skipped and missing rotations default to
    /// none.
    pub fn from_order(tiles: &'a [Tile], order: &[usize], rotations: &[Rotation]) -> Self {
        Self::new(
            order
                .iter()
                .enumerate()
                .filter_map(|(slot, &index)| {
                    tiles.get(index).map(|tile| Placement {
                        tile,
                        rotation: rotations.get(slot).copied().unwrap_or_default(),
                    })
                })
                .collect(),
        )
    }

    /// Number of filled places
    pub const fn place_count(&self) -> usize {
        self.placements.len()
    }

    /// Placements in slot order
    pub fn placements(&self) -> &[Placement<'a>] {
        &self.placements
    }

    /// Placement filling `place`
    pub fn placement(&self, place: Place) -> Option<&Placement<'a>> {
        self.placements.get(place.index())
    }

    /// Tile at `place`, turned by its base rotation and then by `rotation`
    pub fn get_place(&self, place: Place, rotation: Rotation) -> Option<Tile> {
        self.placement(place)
            .map(|placement| placement.tile.rotated(placement.rotation.compose(rotation)))
    }

    /// Score the arrangement against `rules`
    ///
    /// Every satisfied rule adds one point. With `early_abort` the check stops
    /// at the first violation, leaving the score partial and the violation
    /// list with that single rule.
    pub fn check(&self, rules: &[Rule], early_abort: bool) -> Evaluation {
        let mut evaluation = Evaluation::default();
        for rule in rules {
            if rule.check(self) {
                evaluation.score += 1;
            } else {
                evaluation.violations.push(*rule);
                if early_abort {
                    break;
                }
            }
        }
        evaluation
    }
}
