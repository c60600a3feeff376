//! Avatar sheet extraction
//!
//! Splits a 3x3 avatar sheet into nine square PNG files named
//! `avatar_1.png` .. `avatar_9.png` in row-major order.

use std::fs;
use std::path::{Path, PathBuf};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use log::{debug, info};

use crate::config::ExtractionConfig;
use crate::errors::{AvatarError, AvatarResult};
use crate::grid::{GridLayout, Region, CELL_COUNT};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Outcome of a successful extraction
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Directory the avatars were written to
    pub output_dir: PathBuf,
    /// Source image dimensions (width, height)
    pub source_dimensions: (u32, u32),
    /// Grid geometry used for cropping
    pub layout: GridLayout,
    /// Written files, in avatar number order
    pub avatars: Vec<PathBuf>,
}

/// File name of the avatar with the given 1-based number
pub fn avatar_file_name(number: usize) -> String {
    format!("avatar_{}.png", number)
}

/// Extracts the avatars of one sheet
pub struct AvatarExtractor<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
    /// Output settings
    config: &'a ExtractionConfig,
}

impl<'a> AvatarExtractor<'a> {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    /// * `config` - Output directory and avatar size
    pub fn new(logger: &'a Logger, config: &'a ExtractionConfig) -> Self {
        AvatarExtractor { logger, config }
    }

    /// Extract all nine avatars from the sheet at `input_path`
    ///
    /// The output directory is created first. Processing stops at the first
    /// failure; avatars written before it are left in place.
    pub fn extract(&self, input_path: &Path) -> AvatarResult<ExtractionReport> {
        let output_dir = &self.config.output_dir;

        info!("Creating output directory {}", output_dir.display());
        fs::create_dir_all(output_dir)
            .map_err(|e| AvatarError::IoError(output_dir.clone(), e))?;

        info!("Decoding {}", input_path.display());
        let source = image::open(input_path)
            .map_err(|e| AvatarError::from_decode(input_path, e))?;
        let (width, height) = source.dimensions();

        let layout = GridLayout::for_image(width, height);
        if !layout.has_pixels() {
            return Err(AvatarError::InvalidDimensions(width, height));
        }
        debug!(
            "Source {}x{}, cell {}x{}, covered {}x{}",
            width, height, layout.cell_width, layout.cell_height,
            layout.covered_width(), layout.covered_height()
        );
        self.log_operation(&format!(
            "Splitting {} ({}x{}) into {}x{} cells",
            input_path.display(), width, height, layout.cell_width, layout.cell_height
        ))?;

        let progress = ProgressTracker::new(CELL_COUNT as u64, "Extracting avatars");
        let mut avatars = Vec::with_capacity(CELL_COUNT);

        for (number, region) in layout.cells() {
            let avatar_path = output_dir.join(avatar_file_name(number));
            let written = self.write_avatar(&source, region, &avatar_path).and_then(|_| {
                self.log_operation(&format!(
                    "Saved {} from region x={}, y={}, width={}, height={}",
                    avatar_path.display(), region.x, region.y, region.width, region.height
                ))
            });
            if let Err(e) = written {
                progress.abandon();
                return Err(e);
            }

            progress.increment(1);
            progress.notify(&format!("Saved {}", avatar_path.display()));
            avatars.push(avatar_path);
        }

        // Notices only go out once the operation log has accepted the record.
        let summary = format!(
            "Successfully extracted {} avatars to {}",
            avatars.len(),
            output_dir.display()
        );
        if let Err(e) = self.log_operation(&summary) {
            progress.abandon();
            return Err(e);
        }
        progress.finish();
        progress.notify(&summary);

        Ok(ExtractionReport {
            output_dir: output_dir.clone(),
            source_dimensions: (width, height),
            layout,
            avatars,
        })
    }

    /// Crop, normalize and save a single cell
    fn write_avatar(&self, source: &DynamicImage, region: Region, path: &Path) -> AvatarResult<()> {
        let avatar = normalize(crop(source, region), self.config.avatar_size);

        avatar
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| AvatarError::from_encode(path, e))?;

        debug!("Wrote {} ({}x{})", path.display(), avatar.width(), avatar.height());
        Ok(())
    }

    fn log_operation(&self, message: &str) -> AvatarResult<()> {
        info!("{}", message);
        self.logger
            .log(message)
            .map_err(|e| AvatarError::IoError(self.logger.path().to_path_buf(), e))
    }
}

/// Copy the pixels of `region` into a new image
pub fn crop(source: &DynamicImage, region: Region) -> DynamicImage {
    source.crop_imm(region.x, region.y, region.width, region.height)
}

/// Stretch `cell` to a `size` x `size` square with Lanczos3
///
/// Cells that already have the target dimensions are returned untouched.
/// Float color types are converted to 8-bit RGBA so the result can be
/// stored as PNG.
pub fn normalize(cell: DynamicImage, size: u32) -> DynamicImage {
    let resized = if cell.dimensions() == (size, size) {
        cell
    } else {
        cell.resize_exact(size, size, FilterType::Lanczos3)
    };

    match resized.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => DynamicImage::ImageRgba8(resized.to_rgba8()),
        _ => resized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgb32FImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn test_avatar_file_name() {
        assert_eq!(avatar_file_name(1), "avatar_1.png");
        assert_eq!(avatar_file_name(9), "avatar_9.png");
    }

    #[test]
    fn test_crop_copies_region() {
        let source = gradient(30, 30);
        let cell = crop(&source, Region::new(10, 20, 10, 10));

        assert_eq!(cell.dimensions(), (10, 10));
        assert_eq!(cell.get_pixel(0, 0), source.get_pixel(10, 20));
        assert_eq!(cell.get_pixel(9, 9), source.get_pixel(19, 29));
    }

    #[test]
    fn test_normalize_skips_matching_size() {
        let cell = gradient(200, 200);
        let normalized = normalize(cell.clone(), 200);
        assert_eq!(normalized.to_rgb8().as_raw(), cell.to_rgb8().as_raw());
    }

    #[test]
    fn test_normalize_stretches() {
        assert_eq!(normalize(gradient(300, 100), 200).dimensions(), (200, 200));
        assert_eq!(normalize(gradient(7, 7), 200).dimensions(), (200, 200));
    }

    #[test]
    fn test_normalize_keeps_solid_color() {
        let cell = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 300, Rgb([40, 120, 200])));
        let normalized = normalize(cell, 200).to_rgb8();
        assert_eq!(normalized.get_pixel(100, 100), &Rgb([40, 120, 200]));
    }

    #[test]
    fn test_normalize_converts_float_images() {
        let cell = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(4, 4, Rgb([0.5, 0.5, 0.5])));
        let normalized = normalize(cell, 200);
        assert_eq!(normalized.color(), ColorType::Rgba8);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_operation_log_failure_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sheet.png");
        gradient(90, 90).save(&input).unwrap();
        let out = dir.path().join("avatars");

        let logger = Logger::new("/dev/full").unwrap();
        let config = ExtractionConfig::default().with_output_dir(&out);
        let err = AvatarExtractor::new(&logger, &config).extract(&input).unwrap_err();

        assert!(matches!(err, AvatarError::IoError(_, _)), "{:?}", err);
        assert!(err.to_string().contains("/dev/full"));
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}
