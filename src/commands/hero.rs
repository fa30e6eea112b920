use clap::{builder::PossibleValue, ValueEnum};
use image::RgbaImage;
use strum::{EnumIter, IntoEnumIterator as _, VariantArray};

use super::{CommandError, SheetSummary, TILE_SIZE};
use crate::{canvas, grid::Grid, image_util, layout::AssetLayout, sequence::FrameSequence};

pub const HERO_SHEET: &str = "16x16 Hero.png";

/// The hero sheet actually uses 32px cells, despite its name.
const HERO_CELL_SIZE: u32 = 32;
const WALK_ROW: u32 = 1;

/// Frames per direction in the output sheet.
pub const FRAMES_PER_DIRECTION: usize = 8;

const CLIMB_FRAMES: usize = 4;
const SLIDE_FRAMES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantArray)]
pub enum HeroClass {
    Warrior,
    Mage,
    Rogue,
}

impl HeroClass {
    pub const fn all() -> &'static [Self] {
        Self::VARIANTS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Mage => "mage",
            Self::Rogue => "rogue",
        }
    }

    pub fn output_name(self) -> String {
        format!("hero_{}_directional.png", self.name())
    }
}

impl std::fmt::Display for HeroClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ValueEnum for HeroClass {
    fn value_variants<'a>() -> &'a [Self] {
        Self::VARIANTS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}

/// Sheet rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Cut, mirror and load the frames of all four directions, each padded to
/// [`FRAMES_PER_DIRECTION`].
fn hero_directions(layout: &AssetLayout) -> Result<Vec<FrameSequence>, CommandError> {
    let sheet = image_util::load_image_from_file(&layout.hero_asset(HERO_SHEET))?;

    let grid = Grid::with_cell_size(sheet.width(), sheet.height(), HERO_CELL_SIZE, HERO_CELL_SIZE);
    let walk = grid.extract(
        &sheet,
        (0..FRAMES_PER_DIRECTION as u32).map(|col| (col, WALK_ROW)),
    );
    let left = FrameSequence::from_tiles(walk, TILE_SIZE);

    let loose = |folder: &str, count| {
        FrameSequence::load_numbered(&layout.hero_asset(folder), folder, count, TILE_SIZE)
    };
    let up = loose("Climb", CLIMB_FRAMES)?;
    let down = loose("Slide", SLIDE_FRAMES)?;

    let rows = Direction::iter()
        .map(|direction| {
            let frames = match direction {
                Direction::Left => left.clone(),
                Direction::Right => left.mirrored(),
                Direction::Up => up.clone(),
                Direction::Down => down.clone(),
            };

            debug!("{direction}: {} source frame(s)", frames.len());
            frames.padded(FRAMES_PER_DIRECTION)
        })
        .collect();

    Ok(rows)
}

/// Full 128x64 walk cycle sheet.
pub fn build_hero_sheet(layout: &AssetLayout) -> Result<RgbaImage, CommandError> {
    let rows = hero_directions(layout)?;
    Ok(canvas::compose_rows(&rows, TILE_SIZE)?)
}

/// Every class currently shares the same base sprite.
pub fn convert_hero(
    layout: &AssetLayout,
    classes: &[HeroClass],
) -> Result<Vec<SheetSummary>, CommandError> {
    let sheet = build_hero_sheet(layout)?;
    let frames = FRAMES_PER_DIRECTION * Direction::iter().count();

    classes
        .iter()
        .map(|class| {
            let file_name = class.output_name();
            debug!("writing {class} sheet");
            image_util::save_sheet(&sheet, &layout.sprite(&file_name))?;

            Ok(SheetSummary::new(file_name, frames, &sheet))
        })
        .collect()
}
