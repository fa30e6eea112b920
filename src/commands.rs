mod hero;
mod terrain;

pub use hero::*;
pub use terrain::*;

use std::fmt;

use clap::Subcommand;
use image::RgbaImage;

use crate::{canvas::SheetError, image_util, layout::AssetLayout};

/// Edge length of every tile in the generated sheets.
pub const TILE_SIZE: u32 = 16;

#[derive(Subcommand, Debug, Clone, Default)]
pub enum ConvertCommand {
    /// Cut the 8 frame water animation out of the water samples sheet.
    Water,

    /// Re-slice the lava animation strip into 16px frames.
    Lava,

    /// Extract the single grass tile.
    Grass,

    /// Water, lava and grass.
    Terrain,

    /// Build the 4 direction walk cycle sheets for the hero classes.
    ///
    /// Rows: left, right (mirrored left), up (climb frames), down (slide frames).
    Hero {
        /// Classes to generate sheets for. All classes when omitted.
        #[clap(value_enum)]
        classes: Vec<HeroClass>,
    },

    /// Convert every asset.
    #[default]
    All,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    ImgUtilError(#[from] image_util::ImgUtilError),

    #[error("{0}")]
    SheetError(#[from] SheetError),

    #[error("{0} asset(s) failed to convert")]
    AssetsFailed(usize),
}

/// One independently convertible asset.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Job {
    Water,
    Lava,
    Grass,
    Hero(Vec<HeroClass>),
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Water => write!(f, "water"),
            Self::Lava => write!(f, "lava"),
            Self::Grass => write!(f, "grass"),
            Self::Hero(_) => write!(f, "hero"),
        }
    }
}

impl Job {
    fn run(&self, layout: &AssetLayout) -> Result<Vec<SheetSummary>, CommandError> {
        match self {
            Self::Water => convert_water(layout),
            Self::Lava => convert_lava(layout),
            Self::Grass => convert_grass(layout),
            Self::Hero(classes) => convert_hero(layout, classes),
        }
    }
}

impl ConvertCommand {
    fn jobs(&self) -> Vec<Job> {
        let all_heroes = || Job::Hero(HeroClass::all().to_vec());

        match self {
            Self::Water => vec![Job::Water],
            Self::Lava => vec![Job::Lava],
            Self::Grass => vec![Job::Grass],
            Self::Terrain => vec![Job::Water, Job::Lava, Job::Grass],
            Self::Hero { classes } if classes.is_empty() => vec![all_heroes()],
            Self::Hero { classes } => vec![Job::Hero(classes.clone())],
            Self::All => vec![Job::Water, Job::Lava, Job::Grass, all_heroes()],
        }
    }

    /// Run every selected conversion.
    ///
    /// A failing asset is reported and the remaining ones still run.
    pub fn execute(&self, layout: &AssetLayout) -> Result<(), CommandError> {
        info!("asset root: {}", layout.root().display());

        let mut failed = 0;
        let mut written = Vec::new();

        for job in self.jobs() {
            info!("converting {job}");

            match job.run(layout) {
                Ok(sheets) => {
                    if sheets.is_empty() {
                        warn!("{job}: nothing was written");
                    }

                    for sheet in &sheets {
                        info!("saved {sheet}");
                    }

                    written.extend(sheets);
                }
                Err(err) => {
                    error!("{job}: {err}");
                    failed += 1;
                }
            }
        }

        info!("done, {} sheet(s) written", written.len());

        if failed > 0 {
            return Err(CommandError::AssetsFailed(failed));
        }

        Ok(())
    }
}

/// What ended up on disk for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub file_name: String,
    pub frames: usize,
    pub width: u32,
    pub height: u32,
}

impl SheetSummary {
    fn new(file_name: impl Into<String>, frames: usize, sheet: &RgbaImage) -> Self {
        Self {
            file_name: file_name.into(),
            frames,
            width: sheet.width(),
            height: sheet.height(),
        }
    }
}

impl fmt::Display for SheetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} frame(s), {}x{}",
            self.file_name, self.frames, self.width, self.height
        )
    }
}
