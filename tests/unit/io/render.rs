//! Tests for drawing arrangements as text

#[cfg(test)]
mod tests {
    use tilefit::algorithm::arrangement::{Arrangement, Placement};
    use tilefit::io::configuration::INTERIOR_FILLER;
    use tilefit::io::render::{cell_symbol, render_canvas};
    use tilefit::spatial::{BlockCell, Pixel, Rotation, Tile};

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::parse("1", &["abc", "d e", "fgh"]).expect("valid tile"),
            Tile::parse("2", &["XXX", "XXX", "XXX"]).expect("valid tile"),
        ]
    }

    // Tests names replace labels and blocks are drawn side by side
    // Verified by drawing tiles without their interior filler
    #[test]
    fn test_dump_side_by_side() {
        let tiles = tiles();
        let dump = Arrangement::identity(&tiles).dump(&["AB"]);
        assert_eq!(dump, "12\nabcXXX\ndOeXOX\nfghXXX");
    }

    // Tests leading gaps are kept and rows stop at their last drawn cell
    // Verified by padding every row to the canvas width
    #[test]
    fn test_dump_offsets() {
        let tiles = tiles();
        let dump = Arrangement::identity(&tiles).dump(&[" B", "A"]);
        assert_eq!(dump, " 2\n1\n   XXX\n   XOX\n   XXX\nabc\ndOe\nfgh");
    }

    // Tests placed rotations are drawn
    // Verified by drawing every tile unrotated
    #[test]
    fn test_dump_rotated() {
        let tiles = tiles();
        let first = tiles.first().expect("two tiles");
        let arrangement = Arrangement::new(vec![Placement {
            tile: first,
            rotation: Rotation::Clockwise,
        }]);
        assert_eq!(arrangement.dump(&["A"]), "1\nfda\ngOb\nhec");
    }

    // Tests the canvas spans the widest layout line and leaves gaps empty
    // Verified by sizing the canvas by the first line only
    #[test]
    fn test_canvas_shape() {
        let tiles = tiles();
        let arrangement = Arrangement::identity(&tiles);
        let canvas = render_canvas(&arrangement, &["A", "xB"]);

        assert_eq!(canvas.dim(), (6, 6));
        assert_eq!(canvas.get((0, 0)).copied().flatten(), Some(BlockCell::Border(Pixel::Mark('a'))));
        assert_eq!(canvas.get((0, 3)).copied().flatten(), None);
        assert_eq!(canvas.get((3, 0)).copied().flatten(), None);
        assert_eq!(canvas.get((4, 4)).copied().flatten(), Some(BlockCell::Interior));
    }

    // Tests labels of empty places and other characters stay in the text
    // Verified by dropping unknown labels
    #[test]
    fn test_unknown_labels_kept() {
        let tiles = tiles();
        let dump = Arrangement::identity(&tiles).dump(&["A-F"]);
        assert_eq!(dump.lines().next(), Some("1-F"));
    }

    // Tests cell symbols
    // Verified by drawing blanks as filler
    #[test]
    fn test_cell_symbol() {
        assert_eq!(cell_symbol(BlockCell::Interior), INTERIOR_FILLER);
        assert_eq!(cell_symbol(BlockCell::Border(Pixel::Blank)), ' ');
        assert_eq!(cell_symbol(BlockCell::Border(Pixel::Mark('#'))), '#');
    }
}
