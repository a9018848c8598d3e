//! Text rendering of an arrangement into a print layout

use crate::algorithm::arrangement::Arrangement;
use crate::io::configuration::{INTERIOR_FILLER, WILDCARD_PIXEL};
use crate::spatial::{BlockCell, Place, Rotation};
use ndarray::Array2;

/// Canvas of tile cells, `None` where no tile is drawn
pub type Canvas = Array2<Option<BlockCell>>;

/// Draw every place named in `layout` as a block of its tile
///
/// Each layout character is one block of `edge size` cells; characters that
/// are not place labels, or name an empty place, stay undrawn.
pub fn render_canvas<S: AsRef<str>>(arrangement: &Arrangement<'_>, layout: &[S]) -> Canvas {
    let block = arrangement
        .placements()
        .first()
        .map_or(0, |placement| placement.tile.size());
    let width = layout
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let mut canvas = Array2::from_elem((layout.len() * block, width * block), None);

    for (line_number, line) in layout.iter().enumerate() {
        for (block_number, label) in line.as_ref().chars().enumerate() {
            let Some(tile) = Place::from_label(label)
                .and_then(|place| arrangement.get_place(place, Rotation::None))
            else {
                continue;
            };
            for y in 0..block {
                for x in 0..block {
                    let position = (line_number * block + y, block_number * block + x);
                    if let Some(cell) = canvas.get_mut(position) {
                        *cell = tile.block_cell(x, y);
                    }
                }
            }
        }
    }

    canvas
}

/// Character for one drawn cell
pub const fn cell_symbol(cell: BlockCell) -> char {
    match cell {
        BlockCell::Border(pixel) => pixel.symbol(),
        BlockCell::Interior => INTERIOR_FILLER,
    }
}

impl Arrangement<'_> {
    /// Render the arrangement into a textual layout
    ///
    /// The output starts with the layout lines, place labels replaced by the
    /// names of their tiles, followed by the drawn grid. Grid rows stop at
    /// their last drawn cell.
    pub fn dump<S: AsRef<str>>(&self, layout: &[S]) -> String {
        let mut lines: Vec<String> = layout
            .iter()
            .map(|line| self.substitute_names(line.as_ref()))
            .collect();

        let canvas = render_canvas(self, layout);
        for row in canvas.rows() {
            let end = row
                .iter()
                .enumerate()
                .filter_map(|(index, cell)| cell.map(|_| index + 1))
                .last()
                .unwrap_or(0);
            lines.push(
                row.iter()
                    .take(end)
                    .map(|cell| cell.map_or(WILDCARD_PIXEL, cell_symbol))
                    .collect(),
            );
        }

        lines.join("\n")
    }

    fn substitute_names(&self, line: &str) -> String {
        line.chars()
            .map(|label| {
                Place::from_label(label)
                    .and_then(|place| self.placement(place))
                    .map_or_else(|| label.to_string(), |placement| placement.tile.name().to_string())
            })
            .collect()
    }
}
