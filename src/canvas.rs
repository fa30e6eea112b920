use image::{imageops, RgbaImage};

use crate::sequence::FrameSequence;

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("sequence uses {found}px tiles, sheet expects {expected}px")]
    TileSizeMismatch { expected: u32, found: u32 },
}

/// Lay out one sequence per row, frame `n` of a row in column `n`.
///
/// The sheet is as wide as the longest row. Anything not covered by a frame
/// stays fully transparent.
pub fn compose_rows(rows: &[FrameSequence], tile_size: u32) -> Result<RgbaImage, SheetError> {
    if let Some(row) = rows.iter().find(|row| row.tile_size() != tile_size) {
        return Err(SheetError::TileSizeMismatch {
            expected: tile_size,
            found: row.tile_size(),
        });
    }

    let cols = rows.iter().map(FrameSequence::len).max().unwrap_or_default() as u32;
    let mut sheet = RgbaImage::new(tile_size * cols, tile_size * rows.len() as u32);

    debug!(
        "composing {cols}x{} sheet ({}x{})",
        rows.len(),
        sheet.width(),
        sheet.height()
    );

    for (line, row) in rows.iter().enumerate() {
        let y = line as u32 * tile_size;

        for (col, frame) in row.iter().enumerate() {
            let x = col as u32 * tile_size;
            imageops::replace(&mut sheet, frame, i64::from(x), i64::from(y));
        }
    }

    Ok(sheet)
}

/// Single horizontal strip.
pub fn compose_strip(sequence: &FrameSequence) -> RgbaImage {
    let tile_size = sequence.tile_size();
    let mut sheet = RgbaImage::new(tile_size * sequence.len() as u32, tile_size);

    for (col, frame) in sequence.iter().enumerate() {
        imageops::replace(&mut sheet, frame, i64::from(col as u32 * tile_size), 0);
    }

    sheet
}
