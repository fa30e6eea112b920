use super::{CommandError, SheetSummary, TILE_SIZE};
use crate::{
    canvas,
    grid::{self, Grid},
    image_util,
    layout::AssetLayout,
    sequence::FrameSequence,
};

pub const WATER_SOURCE: &str = "watersamples.png";
pub const WATER_OUTPUT: &str = "water_anim_16.png";

/// The water samples sheet is 460x174 px laid out as 29x11 cells of roughly 15.8 px.
const WATER_SHEET: (u32, u32) = (460, 174);
const WATER_GRID: (u32, u32) = (29, 11);
const WATER_ROW: u32 = 4;
const WATER_COLS: std::ops::RangeInclusive<u32> = 12..=19;

pub const LAVA_SOURCE: &str = "lava_anim.png";
pub const LAVA_OUTPUT: &str = "lava_anim_16.png";

pub const GRASS_SOURCE: &str = "grass.png";
pub const GRASS_OUTPUT: &str = "grass_16.png";

/// Assumed layout of the 430x367 grass sheet. Not verified against the
/// actual tile boundaries, only eyeballed.
const GRASS_GRID: (u32, u32) = (26, 22);
const GRASS_CELL: (u32, u32) = (20, 2);

pub fn convert_water(layout: &AssetLayout) -> Result<Vec<SheetSummary>, CommandError> {
    let source = image_util::load_image_from_file(&layout.sprite(WATER_SOURCE))?;

    let grid = Grid::divide(WATER_SHEET.0, WATER_SHEET.1, WATER_GRID.0, WATER_GRID.1);
    let tiles = grid.extract(&source, WATER_COLS.map(|col| (col, WATER_ROW)));
    let frames = FrameSequence::from_tiles(tiles, TILE_SIZE);

    write_strip(layout, &frames, WATER_OUTPUT)
}

/// The lava strip is already 16 px high, it only gets re-sliced.
pub fn convert_lava(layout: &AssetLayout) -> Result<Vec<SheetSummary>, CommandError> {
    let source = image_util::load_image_from_file(&layout.sprite(LAVA_SOURCE))?;

    let grid = Grid::with_cell_size(source.width(), source.height(), TILE_SIZE, TILE_SIZE);
    let tiles = grid.extract(&source, (0..grid.cols()).map(|col| (col, 0)));
    let frames = FrameSequence::from_tiles(tiles, TILE_SIZE);

    write_strip(layout, &frames, LAVA_OUTPUT)
}

pub fn convert_grass(layout: &AssetLayout) -> Result<Vec<SheetSummary>, CommandError> {
    let source = image_util::load_image_from_file(&layout.sprite(GRASS_SOURCE))?;

    let grid = Grid::divide(source.width(), source.height(), GRASS_GRID.0, GRASS_GRID.1);
    let Some(tile) = grid.tile(&source, GRASS_CELL.0, GRASS_CELL.1) else {
        return Ok(Vec::new());
    };

    let tile = grid::normalize(tile, TILE_SIZE);
    image_util::save_sheet(&tile, &layout.sprite(GRASS_OUTPUT))?;

    Ok(vec![SheetSummary::new(GRASS_OUTPUT, 1, &tile)])
}

fn write_strip(
    layout: &AssetLayout,
    frames: &FrameSequence,
    file_name: &str,
) -> Result<Vec<SheetSummary>, CommandError> {
    if frames.is_empty() {
        warn!("{file_name}: no frames could be extracted");
        return Ok(Vec::new());
    }

    let strip = canvas::compose_strip(frames);
    image_util::save_sheet(&strip, &layout.sprite(file_name))?;

    Ok(vec![SheetSummary::new(file_name, frames.len(), &strip)])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use image::{Rgba, RgbaImage};

    use super::*;

    fn cell_colour(col: u32, row: u32) -> Rgba<u8> {
        Rgba([(col * 8) as u8, (row * 20) as u8, 100, 255])
    }

    fn layout_with(file_name: &str, image: &RgbaImage) -> (tempfile::TempDir, AssetLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::new(dir.path());
        fs::create_dir_all(layout.sprites_dir()).unwrap();
        image.save(layout.sprite(file_name)).unwrap();

        (dir, layout)
    }

    /// Paints each truncated grid cell of the water sheet in its own colour.
    fn water_samples() -> RgbaImage {
        let grid = Grid::divide(460, 174, 29, 11);
        let mut sheet = RgbaImage::new(460, 174);

        for row in 0..11 {
            for col in 0..29 {
                let (x, y, width, height) = grid.cell_rect(col, row).unwrap();
                for py in y..y + height {
                    for px in x..x + width {
                        sheet.put_pixel(px, py, cell_colour(col, row));
                    }
                }
            }
        }

        sheet
    }

    #[test]
    fn water_becomes_128x16_strip_of_distinct_frames() {
        let (_dir, layout) = layout_with(WATER_SOURCE, &water_samples());

        let sheets = convert_water(&layout).unwrap();
        let strip = image_util::load_image_from_file(&layout.sprite(WATER_OUTPUT)).unwrap();

        assert_eq!(sheets, vec![SheetSummary::new(WATER_OUTPUT, 8, &strip)]);
        assert_eq!(strip.dimensions(), (128, 16));

        for (idx, col) in (12..=19).enumerate() {
            let x0 = idx as u32 * 16;
            let expected = cell_colour(col, 4);

            for y in 0..16 {
                for x in x0..x0 + 16 {
                    assert_eq!(*strip.get_pixel(x, y), expected, "frame {idx} at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn lava_strip_passes_through_unchanged() {
        let lava = RgbaImage::from_fn(720, 16, |x, y| {
            Rgba([(x % 256) as u8, (y * 10) as u8, (x / 16) as u8, 200])
        });
        let (_dir, layout) = layout_with(LAVA_SOURCE, &lava);

        let sheets = convert_lava(&layout).unwrap();
        let strip = image_util::load_image_from_file(&layout.sprite(LAVA_OUTPUT)).unwrap();

        assert_eq!(sheets[0].frames, 45);
        assert_eq!(strip, lava);
    }

    #[test]
    fn lava_ignores_extra_rows_and_partial_frames() {
        let lava = RgbaImage::from_fn(40, 20, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let (_dir, layout) = layout_with(LAVA_SOURCE, &lava);

        let sheets = convert_lava(&layout).unwrap();
        let strip = image_util::load_image_from_file(&layout.sprite(LAVA_OUTPUT)).unwrap();

        assert_eq!(sheets[0].frames, 2);
        assert_eq!(strip.dimensions(), (32, 16));
        assert_eq!(*strip.get_pixel(31, 15), Rgba([31, 15, 0, 255]));
    }

    #[test]
    fn grass_is_a_single_16px_tile() {
        let (cx, cy, w, h) = Grid::divide(430, 367, 26, 22).cell_rect(20, 2).unwrap();
        let grass = RgbaImage::from_fn(430, 367, |x, y| {
            if (cx..cx + w).contains(&x) && (cy..cy + h).contains(&y) {
                Rgba([0, 180, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let (_dir, layout) = layout_with(GRASS_SOURCE, &grass);

        let sheets = convert_grass(&layout).unwrap();
        let tile = image_util::load_image_from_file(&layout.sprite(GRASS_OUTPUT)).unwrap();

        assert_eq!(sheets.len(), 1);
        assert_eq!(tile.dimensions(), (16, 16));
        assert!(tile.pixels().all(|pxl| *pxl == Rgba([0, 180, 0, 255])));
    }

    #[test]
    fn grass_out_of_range_writes_nothing() {
        // too small for the assumed 26x22 grid, every cell is degenerate
        let (_dir, layout) = layout_with(GRASS_SOURCE, &RgbaImage::new(20, 20));

        let sheets = convert_grass(&layout).unwrap();

        assert!(sheets.is_empty());
        assert!(!layout.sprite(GRASS_OUTPUT).exists());
    }

    #[test]
    fn water_from_undersized_sheet_writes_nothing() {
        let (_dir, layout) = layout_with(WATER_SOURCE, &RgbaImage::new(100, 40));

        assert!(convert_water(&layout).unwrap().is_empty());
        assert!(!layout.sprite(WATER_OUTPUT).exists());
    }

    #[test]
    fn missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::new(dir.path());

        let err = convert_water(&layout).unwrap_err();

        assert!(err.to_string().contains(WATER_SOURCE));
    }
}
