//! Adjacency rules between two places and their compact text tokens

use crate::algorithm::arrangement::Arrangement;
use crate::io::error::{Result, malformed};
use crate::spatial::{Direction, Place, Rotation};
use std::fmt;
use std::str::FromStr;

/// Constraint that two facing borders in the layout fit together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Bottom border at `top` against the top border at `bottom`
    Vertical {
        /// Upper place
        top: Place,
        /// Lower place
        bottom: Place,
    },
    /// Right border at `left` against the left border at `right`, each tile
    /// turned by its own extra rotation first
    Horizontal {
        /// Left-hand place
        left: Place,
        /// Extra rotation applied to the left-hand tile
        left_rotation: Rotation,
        /// Right-hand place
        right: Place,
        /// Extra rotation applied to the right-hand tile
        right_rotation: Rotation,
    },
}

impl Rule {
    /// Vertical adjacency of `top` above `bottom`
    pub const fn vertical(top: Place, bottom: Place) -> Self {
        Self::Vertical { top, bottom }
    }

    /// Horizontal adjacency of `left` beside `right`
    pub const fn horizontal(
        left: Place,
        left_rotation: Rotation,
        right: Place,
        right_rotation: Rotation,
    ) -> Self {
        Self::Horizontal {
            left,
            left_rotation,
            right,
            right_rotation,
        }
    }

    /// The two places the rule constrains
    pub const fn places(self) -> [Place; 2] {
        match self {
            Self::Vertical { top, bottom } => [top, bottom],
            Self::Horizontal { left, right, .. } => [left, right],
        }
    }

    /// Whether `arrangement` satisfies the rule
    ///
    /// A rule naming a place the arrangement does not fill is unsatisfied.
    pub fn check(self, arrangement: &Arrangement<'_>) -> bool {
        let (first, first_side, second, second_side) = match self {
            Self::Vertical { top, bottom } => (
                arrangement.get_place(top, Rotation::None),
                Direction::Bottom,
                arrangement.get_place(bottom, Rotation::None),
                Direction::Top,
            ),
            Self::Horizontal {
                left,
                left_rotation,
                right,
                right_rotation,
            } => (
                arrangement.get_place(left, left_rotation),
                Direction::Right,
                arrangement.get_place(right, right_rotation),
                Direction::Left,
            ),
        };

        match (first, second) {
            (Some(first), Some(second)) => {
                first.edge(first_side).matches(second.edge(second_side))
            }
            _ => false,
        }
    }

    /// Parse a compact horizontal token such as `BC`, `B+A`, `FrB` or `ED+`
    ///
    /// The token is a left place, an optional rotation code, a right place and
    /// another optional rotation code.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` for unknown place labels or rotation codes,
    /// missing places, or trailing characters.
    pub fn parse_horizontal(token: &str) -> Result<Self> {
        let mut chars = token.chars().peekable();

        let left = next_place(token, chars.next())?;
        let left_rotation = chars
            .next_if(|&code| Rotation::from_code(code).is_some())
            .and_then(Rotation::from_code)
            .unwrap_or_default();
        let right = next_place(token, chars.next())?;
        let right_rotation = chars
            .next()
            .map(|code| {
                Rotation::from_code(code)
                    .ok_or_else(|| malformed(token, format!("unknown rotation code '{code}'")))
            })
            .transpose()?
            .unwrap_or_default();

        if chars.next().is_some() {
            return Err(malformed(token, "trailing characters after rule"));
        }

        Ok(Self::horizontal(left, left_rotation, right, right_rotation))
    }
}

fn next_place(token: &str, label: Option<char>) -> Result<Place> {
    let label = label.ok_or_else(|| malformed(token, "rule is missing a place label"))?;
    Place::from_label(label)
        .ok_or_else(|| malformed(token, format!("unknown place label '{label}'")))
}

impl FromStr for Rule {
    type Err = crate::io::error::TileFitError;

    /// Parses `A/C` as a vertical rule and anything else as a horizontal token
    fn from_str(token: &str) -> Result<Self> {
        match token.split_once('/') {
            Some((top, bottom)) => {
                let mut top_chars = top.chars();
                let mut bottom_chars = bottom.chars();
                let top_place = next_place(token, top_chars.next())?;
                let bottom_place = next_place(token, bottom_chars.next())?;
                if top_chars.next().is_some() || bottom_chars.next().is_some() {
                    return Err(malformed(token, "trailing characters after rule"));
                }
                Ok(Self::vertical(top_place, bottom_place))
            }
            None => Self::parse_horizontal(token),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Vertical { top, bottom } => write!(f, "{top}/{bottom}"),
            Self::Horizontal {
                left,
                left_rotation,
                right,
                right_rotation,
            } => {
                write!(f, "{left}")?;
                if let Some(code) = left_rotation.code() {
                    write!(f, "{code}")?;
                }
                write!(f, "{right}")?;
                if let Some(code) = right_rotation.code() {
                    write!(f, "{code}")?;
                }
                Ok(())
            }
        }
    }
}
