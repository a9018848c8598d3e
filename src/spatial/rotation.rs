//! Quarter-turn rotations forming the cyclic group of order four

use std::fmt;

/// Rotation of a tile in 90° steps
///
/// Internally measured in clockwise quarter turns, so `Clockwise` is one turn
/// and `Counterclockwise` is three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// No rotation (0°)
    #[default]
    None,
    /// One clockwise quarter turn (−90°)
    Clockwise,
    /// Half turn (180°)
    Half,
    /// One counterclockwise quarter turn (+90°)
    Counterclockwise,
}

impl Rotation {
    /// Every rotation, in successor order from `None`
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::Clockwise,
        Self::Half,
        Self::Counterclockwise,
    ];

    /// Number of clockwise quarter turns, in `0..4`
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Clockwise => 1,
            Self::Half => 2,
            Self::Counterclockwise => 3,
        }
    }

    /// Rotation equal to `turns` clockwise quarter turns
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::None,
            1 => Self::Clockwise,
            2 => Self::Half,
            _ => Self::Counterclockwise,
        }
    }

    /// Apply `self` then `other`
    #[must_use]
    pub const fn compose(self, other: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// Rotation undoing this one
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }

    /// Next rotation one clockwise step further
    #[must_use]
    pub const fn successor(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// Signed angle in degrees, counterclockwise positive
    pub const fn degrees(self) -> i16 {
        match self {
            Self::None => 0,
            Self::Clockwise => -90,
            Self::Half => 180,
            Self::Counterclockwise => 90,
        }
    }

    /// Compact rule-token code; `None` has no code
    pub const fn code(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Clockwise => Some('-'),
            Self::Half => Some('r'),
            Self::Counterclockwise => Some('+'),
        }
    }

    /// Parse a compact rule-token code
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '-' => Some(Self::Clockwise),
            'r' => Some(Self::Half),
            '+' => Some(Self::Counterclockwise),
            _ => None,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
