//! PNG export of a rendered layout with transparency for undrawn cells

use crate::algorithm::arrangement::Arrangement;
use crate::io::configuration::{BLANK_COLOR, FILLER_COLOR, MARK_COLOR, MAX_CELL_SIZE};
use crate::io::error::{Result, TileFitError, invalid_parameter};
use crate::io::render::render_canvas;
use crate::spatial::{BlockCell, Pixel};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const fn cell_color(cell: Option<BlockCell>) -> Rgba<u8> {
    match cell {
        Some(BlockCell::Border(Pixel::Mark(_))) => Rgba(MARK_COLOR),
        Some(BlockCell::Border(Pixel::Blank)) => Rgba(BLANK_COLOR),
        Some(BlockCell::Interior) => Rgba(FILLER_COLOR),
        None => Rgba([0, 0, 0, 0]),
    }
}

/// Draw the layout as an image, one `cell_size` square per character cell
///
/// # Errors
///
/// Returns an error if `cell_size` is zero or above the maximum, or the
/// layout draws nothing.
pub fn render_layout_image<S: AsRef<str>>(
    arrangement: &Arrangement<'_>,
    layout: &[S],
    cell_size: u32,
) -> Result<RgbaImage> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE}"),
        ));
    }

    let canvas = render_canvas(arrangement, layout);
    if canvas.iter().all(Option::is_none) {
        return Err(invalid_parameter(
            "layout",
            &layout.len(),
            &"layout does not draw any tile",
        ));
    }

    let (rows, cols) = canvas.dim();
    let width = u32::try_from(cols)
        .ok()
        .and_then(|pixels| pixels.checked_mul(cell_size));
    let height = u32::try_from(rows)
        .ok()
        .and_then(|pixels| pixels.checked_mul(cell_size));
    let (Some(width), Some(height)) = (width, height) else {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"image would be too large",
        ));
    };

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let position = ((y / cell_size) as usize, (x / cell_size) as usize);
        cell_color(canvas.get(position).copied().flatten())
    }))
}

/// Render the layout and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_layout_image`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_png<S: AsRef<str>>(
    arrangement: &Arrangement<'_>,
    layout: &[S],
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_layout_image(arrangement, layout, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TileFitError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TileFitError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
