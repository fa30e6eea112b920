use std::path::{Path, PathBuf};

/// Where the game keeps its sprite sources and finished sheets, relative to the project root.
#[derive(Debug, Clone)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source sheets for terrain live next to the generated sheets.
    pub fn sprites_dir(&self) -> PathBuf {
        self.root.join("public").join("sprites")
    }

    pub fn hero_dir(&self) -> PathBuf {
        self.root.join("public").join("assets").join("Hero")
    }

    pub fn sprite(&self, file_name: &str) -> PathBuf {
        self.sprites_dir().join(file_name)
    }

    pub fn hero_asset(&self, file_name: &str) -> PathBuf {
        self.hero_dir().join(file_name)
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
