use std::{
    fs,
    ops::Deref,
    path::{Path, PathBuf},
};

use image::{
    codecs::png, EncodableLayout, ImageBuffer, ImageEncoder, Pixel, PixelWithColorType, RgbaImage,
};

#[derive(Debug, thiserror::Error)]
pub enum ImgUtilError {
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("source not found: {}", .0.display())]
    NotFound(PathBuf),
}

pub type ImgUtilResult<T> = std::result::Result<T, ImgUtilError>;

/// Load an image and convert it to RGBA8.
pub fn load_image_from_file(path: &Path) -> ImgUtilResult<RgbaImage> {
    if !path.is_file() {
        return Err(ImgUtilError::NotFound(path.to_path_buf()));
    }

    let image = image::open(path)?.to_rgba8();
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Write a finished sheet, replacing whatever is at `path`.
pub fn save_sheet(sheet: &RgbaImage, path: &Path) -> ImgUtilResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    sheet.save_optimized_png(path)?;
    debug!(
        "saved {} ({}x{})",
        path.display(),
        sheet.width(),
        sheet.height()
    );

    Ok(())
}

pub trait ImageBufferExt<P, C> {
    fn save_optimized_png(&self, path: impl AsRef<Path>) -> ImgUtilResult<()>;
}

impl<P, C> ImageBufferExt<P, C> for ImageBuffer<P, C>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
    C: Deref<Target = [P::Subpixel]>,
{
    fn save_optimized_png(&self, path: impl AsRef<Path>) -> ImgUtilResult<()> {
        let mut file = fs::File::create(path)?;

        let (width, height) = self.dimensions();
        png::PngEncoder::new_with_quality(
            &mut file,
            png::CompressionType::Best,
            png::FilterType::default(),
        )
        .write_image(
            self.as_bytes(),
            width,
            height,
            <P as PixelWithColorType>::COLOR_TYPE,
        )?;

        Ok(())
    }
}
