//! Tile sides, their axes, and the pixel-order tables used by rotation and matching

use crate::spatial::rotation::Rotation;
use std::fmt;

/// Axis along which an edge's pixels run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Pixels read left to right (top and bottom edges)
    Horizontal,
    /// Pixels read top to bottom (left and right edges)
    Vertical,
}

/// One side of a square tile
///
/// Declaration order is the clockwise cycle `Top -> Right -> Bottom -> Left`,
/// which rotation arithmetic relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Upper edge
    Top,
    /// Right-hand edge
    Right,
    /// Lower edge
    Bottom,
    /// Left-hand edge
    Left,
}

impl Direction {
    /// All sides in clockwise order starting at the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Position in the clockwise cycle
    pub const fn index(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Inverse of [`Direction::index`], wrapping modulo four
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }

    /// Axis the edge on this side runs along
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Top | Self::Bottom => Orientation::Horizontal,
            Self::Left | Self::Right => Orientation::Vertical,
        }
    }

    /// Side reached after one clockwise quarter turn
    pub const fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Side reached after one counterclockwise quarter turn
    pub const fn counterclockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Side across the tile
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Side this one moves to when the tile is turned by `rotation`
    pub const fn rotated(self, rotation: Rotation) -> Self {
        Self::from_index(self.index() + rotation.quarter_turns())
    }

    /// Whether an edge moving from `from` to `to` must have its pixels reversed
    ///
    /// Pixels are read left to right on horizontal edges and top to bottom on
    /// vertical ones. Crossing the tile always reverses. A quarter turn
    /// reverses when a vertical edge steps clockwise onto a horizontal side,
    /// or a horizontal edge steps counterclockwise onto a vertical side.
    pub const fn transition_reverses(from: Self, to: Self) -> bool {
        let reversing_step = match from.orientation() {
            Orientation::Vertical => from.clockwise(),
            Orientation::Horizontal => from.counterclockwise(),
        };
        to.index() == from.opposite().index() || to.index() == reversing_step.index()
    }

    /// Whether comparing an edge on `self` against one on `other` needs the
    /// other edge read backwards
    ///
    /// Holds exactly when `other` is one counterclockwise step from `self`,
    /// which always puts the two edges on different axes.
    pub const fn comparison_reverses(self, other: Self) -> bool {
        other.index() == self.counterclockwise().index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "TOP",
            Self::Right => "RIGHT",
            Self::Bottom => "BOTTOM",
            Self::Left => "LEFT",
        };
        f.write_str(name)
    }
}
