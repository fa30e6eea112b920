use image::{
    imageops::{self, FilterType},
    RgbaImage,
};

/// A single cropped frame. Always RGBA so transparency survives every step.
pub type Tile = RgbaImage;

/// Cell layout of a source sheet.
///
/// Cell sizes are kept as floats since most of the source sheets are not evenly
/// divisible by their cell count. Offsets are truncated per cell, so neighbouring
/// cells can start one pixel further apart than their width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    cell_width: f64,
    cell_height: f64,
    cols: u32,
    rows: u32,
}

impl Grid {
    /// Divide a sheet of `width`x`height` pixels into `cols`x`rows` cells.
    pub fn divide(width: u32, height: u32, cols: u32, rows: u32) -> Self {
        Self {
            cell_width: f64::from(width) / f64::from(cols),
            cell_height: f64::from(height) / f64::from(rows),
            cols,
            rows,
        }
    }

    /// Fixed size cells. Partial cells at the right and bottom edge are not addressable.
    pub fn with_cell_size(width: u32, height: u32, cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width: f64::from(cell_width),
            cell_height: f64::from(cell_height),
            cols: width.checked_div(cell_width).unwrap_or_default(),
            rows: height.checked_div(cell_height).unwrap_or_default(),
        }
    }

    pub const fn cols(&self) -> u32 {
        self.cols
    }

    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Pixel rectangle `(x, y, width, height)` of a cell, `None` outside the grid.
    pub fn cell_rect(&self, col: u32, row: u32) -> Option<(u32, u32, u32, u32)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }

        let x = (f64::from(col) * self.cell_width) as u32;
        let y = (f64::from(row) * self.cell_height) as u32;
        let width = self.cell_width as u32;
        let height = self.cell_height as u32;

        if width == 0 || height == 0 {
            return None;
        }

        Some((x, y, width, height))
    }

    /// Crop a single cell out of `source`.
    ///
    /// Logs a warning and returns `None` when the cell is outside the grid or
    /// does not fit inside the actual image.
    pub fn tile(&self, source: &RgbaImage, col: u32, row: u32) -> Option<Tile> {
        let (src_width, src_height) = source.dimensions();

        let Some((x, y, width, height)) = self.cell_rect(col, row) else {
            warn!(
                "cell ({col}, {row}) is outside of the {}x{} grid",
                self.cols, self.rows
            );
            return None;
        };

        if u64::from(x) + u64::from(width) > u64::from(src_width)
            || u64::from(y) + u64::from(height) > u64::from(src_height)
        {
            warn!(
                "cell ({col}, {row}) at ({x}, {y}) {width}x{height} exceeds the {src_width}x{src_height} source"
            );
            return None;
        }

        trace!("cell ({col}, {row}) -> ({x}, {y}) {width}x{height}");
        Some(imageops::crop_imm(source, x, y, width, height).to_image())
    }

    /// Crop every requested cell, skipping (with a warning) the ones that can't be cut.
    pub fn extract<I>(&self, source: &RgbaImage, coords: I) -> Vec<Tile>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        coords
            .into_iter()
            .filter_map(|(col, row)| self.tile(source, col, row))
            .collect()
    }
}

/// Scale `tile` to `size`x`size` pixels.
///
/// Pixel art must keep its hard edges, so this only ever uses nearest neighbour.
/// Tiles that already have the right size are passed through untouched.
pub fn normalize(tile: Tile, size: u32) -> Tile {
    if tile.dimensions() == (size, size) {
        return tile;
    }

    trace!("scaling {}x{} tile to {size}x{size}", tile.width(), tile.height());
    imageops::resize(&tile, size, size, FilterType::Nearest)
}
