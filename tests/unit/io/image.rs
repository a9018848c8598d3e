//! Tests for PNG rendering and export of solved layouts

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tempfile::TempDir;
    use tilefit::TileFitError;
    use tilefit::algorithm::arrangement::Arrangement;
    use tilefit::io::configuration::{BLANK_COLOR, FILLER_COLOR, MARK_COLOR};
    use tilefit::io::image::{export_layout_png, render_layout_image};
    use tilefit::spatial::Tile;

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::parse("1", &["X X", "X X", "XXX"]).expect("valid tile"),
            Tile::parse("2", &["   ", "   ", "   "]).expect("valid tile"),
        ]
    }

    // Tests image size and the colour of marks, blanks, filler and gaps
    // Verified by swapping the mark and blank colours
    #[test]
    fn test_render_colours() {
        let tiles = tiles();
        let arrangement = Arrangement::identity(&tiles);
        let image = render_layout_image(&arrangement, &["A", " B"], 2).expect("image renders");

        assert_eq!(image.dimensions(), (12, 12));
        assert_eq!(image.get_pixel(0, 0), &Rgba(MARK_COLOR));
        assert_eq!(image.get_pixel(2, 0), &Rgba(BLANK_COLOR));
        assert_eq!(image.get_pixel(3, 3), &Rgba(FILLER_COLOR));
        assert_eq!(image.get_pixel(6, 6), &Rgba(BLANK_COLOR));
        assert_eq!(image.get_pixel(0, 6), &Rgba([0, 0, 0, 0]));
    }

    // Tests invalid cell sizes and empty layouts are rejected
    // Verified by accepting a zero cell size
    #[test]
    fn test_render_rejects() {
        let tiles = tiles();
        let arrangement = Arrangement::identity(&tiles);

        assert!(matches!(
            render_layout_image(&arrangement, &["A"], 0),
            Err(TileFitError::InvalidParameter { .. })
        ));
        assert!(matches!(
            render_layout_image(&arrangement, &["A"], 1000),
            Err(TileFitError::InvalidParameter { .. })
        ));
        assert!(matches!(
            render_layout_image(&arrangement, &["  "], 4),
            Err(TileFitError::InvalidParameter { .. })
        ));
    }

    // Tests export creates missing directories and a readable PNG
    // Verified by disabling file save operation
    #[test]
    fn test_export_creates_file() {
        let tiles = tiles();
        let arrangement = Arrangement::identity(&tiles);
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("layout.png");

        export_layout_png(&arrangement, &["AB"], 3, &path).expect("export succeeds");

        let reloaded = image::open(&path).expect("PNG can be read back");
        assert_eq!(reloaded.width(), 18);
        assert_eq!(reloaded.height(), 9);
    }
}
