//! Square tiles, their four borders, and the quarter-turn transform
//!
//! A tile keeps the borders it was parsed with as its base. Every rotated copy
//! is recomputed from that base by stepping clockwise, so repeated rotation
//! never accumulates on top of an earlier result.

use crate::io::error::{Result, TileFitError, malformed};
use crate::spatial::direction::Direction;
use crate::spatial::edge::{Edge, Pixel};
use crate::spatial::rotation::Rotation;
use ndarray::Array2;
use std::ops::Index;
use std::sync::Arc;

/// The four borders of a tile, one slot per side
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSet {
    top: Edge,
    right: Edge,
    bottom: Edge,
    left: Edge,
}

impl EdgeSet {
    /// Assemble borders, labelling each edge with the side it is stored on
    ///
    /// Pixels must already be in the reading order of their slot.
    pub const fn new(top: Edge, right: Edge, bottom: Edge, left: Edge) -> Self {
        Self {
            top: top.relabelled(Direction::Top),
            right: right.relabelled(Direction::Right),
            bottom: bottom.relabelled(Direction::Bottom),
            left: left.relabelled(Direction::Left),
        }
    }

    /// Borders after one clockwise quarter turn
    #[must_use]
    pub fn step_clockwise(&self) -> Self {
        Self {
            top: self.left.moved_to(Direction::Left.clockwise()),
            right: self.top.moved_to(Direction::Top.clockwise()),
            bottom: self.right.moved_to(Direction::Right.clockwise()),
            left: self.bottom.moved_to(Direction::Bottom.clockwise()),
        }
    }

    /// Border stored on `direction`
    pub const fn side(&self, direction: Direction) -> &Edge {
        match direction {
            Direction::Top => &self.top,
            Direction::Right => &self.right,
            Direction::Bottom => &self.bottom,
            Direction::Left => &self.left,
        }
    }

    /// Borders in clockwise order from the top
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        Direction::ALL.into_iter().map(|direction| self.side(direction))
    }
}

impl Index<Direction> for EdgeSet {
    type Output = Edge;

    fn index(&self, direction: Direction) -> &Edge {
        self.side(direction)
    }
}

/// One cell of a tile drawn as a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCell {
    /// Pixel of one of the four borders
    Border(Pixel),
    /// Cell inside the borders
    Interior,
}

/// A named square tile with four borders and a cumulative rotation
#[derive(Debug, Clone)]
pub struct Tile {
    name: String,
    base: Arc<EdgeSet>,
    edges: EdgeSet,
    rotation: Rotation,
}

impl Tile {
    /// Create an unrotated tile
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the four borders differ in length, or
    /// `MalformedInput` if they are empty.
    pub fn new(name: impl Into<String>, edges: EdgeSet) -> Result<Self> {
        let name = name.into();
        let size = edges.top.len();
        if size == 0 {
            return Err(malformed(&name, "tile has zero-length edges"));
        }
        if let Some(edge) = edges.iter().find(|edge| edge.len() != size) {
            return Err(TileFitError::DimensionMismatch {
                context: "tile edge length",
                expected: size,
                found: edge.len(),
            });
        }

        Ok(Self {
            name,
            base: Arc::new(edges.clone()),
            edges,
            rotation: Rotation::None,
        })
    }

    /// Extract a tile from an N×N block of characters
    ///
    /// Top and bottom borders are the first and last rows read left to right;
    /// left and right borders are the first and last columns read top to bottom.
    ///
    /// Rows must be exactly N characters wide. Longer rows are rejected rather
    /// than cut down, so callers holding wider rows (for instance with trailing
    /// blanks) trim them first, as the puzzle file parser does.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if there are no rows or any row's width
    /// differs from the number of rows.
    pub fn parse<S: AsRef<str>>(name: impl Into<String>, rows: &[S]) -> Result<Self> {
        let name = name.into();
        let block = character_block(&name, rows)?;
        let (size, _) = block.dim();
        let last = size - 1;

        let row_edge = |row: usize, direction| {
            Edge::new(
                block.row(row).iter().copied().map(Pixel::from).collect(),
                direction,
            )
        };
        let column_edge = |column: usize, direction| {
            Edge::new(
                block.column(column).iter().copied().map(Pixel::from).collect(),
                direction,
            )
        };

        let edges = EdgeSet::new(
            row_edge(0, Direction::Top),
            column_edge(last, Direction::Right),
            row_edge(last, Direction::Bottom),
            column_edge(0, Direction::Left),
        );
        Self::new(name, edges)
    }

    /// Tile identity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Edge length shared by all four borders
    pub const fn size(&self) -> usize {
        self.edges.top.len()
    }

    /// Cumulative rotation relative to the parsed tile
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Border currently on `direction`
    pub const fn edge(&self, direction: Direction) -> &Edge {
        self.edges.side(direction)
    }

    /// All four current borders
    pub const fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Copy turned further by `target`
    ///
    /// The result's cumulative rotation is `self.rotation()` composed with
    /// `target`, rebuilt from the unrotated base one clockwise step at a time.
    #[must_use]
    pub fn rotated(&self, target: Rotation) -> Self {
        let goal = self.rotation.compose(target);
        let mut edges = (*self.base).clone();
        let mut current = Rotation::None;
        while current != goal {
            edges = edges.step_clockwise();
            current = current.successor();
        }

        Self {
            name: self.name.clone(),
            base: Arc::clone(&self.base),
            edges,
            rotation: goal,
        }
    }

    /// What to draw at block position (`x`, `y`) when rendering the tile
    ///
    /// Border cells take their pixel, the left border winning at corners and
    /// the top border next; everything else is interior.
    pub fn block_cell(&self, x: usize, y: usize) -> Option<BlockCell> {
        let size = self.size();
        if x >= size || y >= size {
            return None;
        }
        let last = size - 1;
        if (1..last).contains(&x) && (1..last).contains(&y) {
            return Some(BlockCell::Interior);
        }

        let pixel = if x == 0 {
            self.edges.left.pixel(y)
        } else if y == 0 {
            self.edges.top.pixel(x)
        } else if x == last {
            self.edges.right.pixel(y)
        } else {
            self.edges.bottom.pixel(x)
        };
        pixel.map(BlockCell::Border)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.edges == other.edges
    }
}

impl Eq for Tile {}

fn character_block<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Array2<char>> {
    let size = rows.len();
    if size == 0 {
        return Err(malformed(name, "tile has no rows"));
    }

    let mut cells = Vec::with_capacity(size * size);
    for (index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let width = row.chars().count();
        if width != size {
            return Err(malformed(
                row,
                format!(
                    "row {} of tile '{name}' is {width} wide, expected {size}",
                    index + 1
                ),
            ));
        }
        cells.extend(row.chars());
    }

    Array2::from_shape_vec((size, size), cells).map_err(|source| {
        malformed(name, format!("tile block is not square: {source}"))
    })
}
