use std::path::Path;

use image::{imageops, RgbaImage};

use crate::{
    grid::{self, Tile},
    image_util::{self, ImgUtilResult},
};

/// Ordered frames of one animation, all scaled to the same square tile size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    tile_size: u32,
    frames: Vec<Tile>,
}

impl FrameSequence {
    pub const fn new(tile_size: u32) -> Self {
        Self {
            tile_size,
            frames: Vec::new(),
        }
    }

    /// Build a sequence from raw tiles, normalizing each one to `tile_size`.
    pub fn from_tiles<I>(tiles: I, tile_size: u32) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut sequence = Self::new(tile_size);
        for tile in tiles {
            sequence.push(tile);
        }

        sequence
    }

    /// Load `<dir>/<prefix>1.png` up to `<dir>/<prefix><count>.png`.
    ///
    /// Frames that don't exist are skipped with a warning, frames that can't be
    /// decoded are an error.
    pub fn load_numbered(
        dir: &Path,
        prefix: &str,
        count: usize,
        tile_size: u32,
    ) -> ImgUtilResult<Self> {
        let mut sequence = Self::new(tile_size);

        for idx in 1..=count {
            let path = dir.join(format!("{prefix}{idx}.png"));

            if !path.exists() {
                warn!("{} not found, skipping frame", path.display());
                continue;
            }

            sequence.push(image_util::load_image_from_file(&path)?);
        }

        debug!(
            "loaded {}/{count} {prefix} frames from {}",
            sequence.len(),
            dir.display()
        );

        Ok(sequence)
    }

    pub fn push(&mut self, tile: Tile) {
        self.frames.push(grid::normalize(tile, self.tile_size));
    }

    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Tile] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.frames.iter()
    }

    /// Every frame flipped horizontally, same order.
    pub fn mirrored(&self) -> Self {
        Self {
            tile_size: self.tile_size,
            frames: self.frames.iter().map(imageops::flip_horizontal).collect(),
        }
    }

    /// Stretch the sequence to exactly `target` frames.
    ///
    /// Missing frames repeat the last one, an empty sequence is filled with
    /// transparent tiles. Longer sequences are cut down to `target`.
    #[must_use]
    pub fn padded(mut self, target: usize) -> Self {
        if self.frames.len() < target {
            let filler = self
                .frames
                .last()
                .cloned()
                .unwrap_or_else(|| RgbaImage::new(self.tile_size, self.tile_size));

            trace!("padding {} frames to {target}", self.frames.len());
            self.frames.resize(target, filler);
        }

        self.frames.truncate(target);
        self
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
