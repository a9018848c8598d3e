//! Border pixel sequences and the clash rule deciding whether two borders fit

use crate::io::configuration::WILDCARD_PIXEL;
use crate::spatial::direction::Direction;
use std::fmt;

/// One border symbol
///
/// Blank pixels are wildcards: they never clash with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Wildcard, drawn as a space
    Blank,
    /// Any other symbol
    Mark(char),
}

impl Pixel {
    /// Whether the two pixels hold the same non-wildcard symbol
    pub const fn clashes_with(self, other: Self) -> bool {
        match (self, other) {
            (Self::Mark(a), Self::Mark(b)) => a == b,
            _ => false,
        }
    }

    /// Character used when drawing the pixel
    pub const fn symbol(self) -> char {
        match self {
            Self::Blank => WILDCARD_PIXEL,
            Self::Mark(symbol) => symbol,
        }
    }
}

impl From<char> for Pixel {
    fn from(symbol: char) -> Self {
        if symbol == WILDCARD_PIXEL {
            Self::Blank
        } else {
            Self::Mark(symbol)
        }
    }
}

/// Immutable border of a tile on one side
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pixels: Vec<Pixel>,
    direction: Direction,
}

impl Edge {
    /// Build an edge from pixels already in reading order for `direction`
    pub const fn new(pixels: Vec<Pixel>, direction: Direction) -> Self {
        Self { pixels, direction }
    }

    /// Build an edge from a symbol string, blanks being wildcards
    pub fn from_symbols(symbols: &str, direction: Direction) -> Self {
        Self::new(symbols.chars().map(Pixel::from).collect(), direction)
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the edge holds no pixels
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Side currently occupied
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Pixels in reading order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixel at `index` in reading order
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    /// Whether this edge can sit against `other`
    ///
    /// Two edges fit when no aligned position holds the same non-blank symbol
    /// on both sides. Edges on the same axis compare position by position;
    /// edges on different axes are aligned per [`Direction::comparison_reverses`].
    ///
    /// # Panics
    ///
    /// Panics if the edges differ in length; all tiles of a puzzle share one
    /// size, so this signals a construction bug rather than a mismatch.
    pub fn matches(&self, other: &Self) -> bool {
        assert_eq!(
            self.len(),
            other.len(),
            "cannot compare {} edge of length {} with {} edge of length {}",
            self.direction,
            self.len(),
            other.direction,
            other.len()
        );

        let cross_axis = self.direction.orientation() != other.direction.orientation();
        if cross_axis && self.direction.comparison_reverses(other.direction) {
            !self
                .pixels
                .iter()
                .zip(other.pixels.iter().rev())
                .any(|(&a, &b)| a.clashes_with(b))
        } else {
            !self
                .pixels
                .iter()
                .zip(&other.pixels)
                .any(|(&a, &b)| a.clashes_with(b))
        }
    }

    /// Same pixels in the same order, labelled with another side
    #[must_use]
    pub const fn relabelled(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Same pixels relocated to side `to`, reversed if the move demands it
    #[must_use]
    pub fn moved_to(&self, to: Direction) -> Self {
        let pixels = if Direction::transition_reverses(self.direction, to) {
            self.pixels.iter().rev().copied().collect()
        } else {
            self.pixels.clone()
        };
        Self::new(pixels, to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: String = self.pixels.iter().map(|pixel| pixel.symbol()).collect();
        f.write_str(&symbols)
    }
}
