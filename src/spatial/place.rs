//! Layout slot labels

use crate::io::configuration::PLACE_LABELS;
use std::fmt;

/// A slot in the target layout, independent of the tile occupying it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Place {
    /// First slot
    A,
    /// Second slot
    B,
    /// Third slot
    C,
    /// Fourth slot
    D,
    /// Fifth slot
    E,
    /// Sixth slot
    F,
}

impl Place {
    /// Every place in slot order
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Slot position, matching the placement order of an arrangement
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
            Self::F => 5,
        }
    }

    /// Place at slot position `index`
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::A),
            1 => Some(Self::B),
            2 => Some(Self::C),
            3 => Some(Self::D),
            4 => Some(Self::E),
            5 => Some(Self::F),
            _ => None,
        }
    }

    /// Label character used in rules and layouts
    pub fn label(self) -> char {
        PLACE_LABELS.chars().nth(self.index()).unwrap_or('?')
    }

    /// Parse a label character
    pub fn from_label(label: char) -> Option<Self> {
        PLACE_LABELS
            .chars()
            .position(|candidate| candidate == label)
            .and_then(Self::from_index)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
