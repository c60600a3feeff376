use std::path::Path;
use log::error;

use crate::config::ExtractionConfig;
use crate::errors::{AvatarError, AvatarResult};
use crate::extractor::{AvatarExtractor, ExtractionReport};
use crate::utils::logger::Logger;

/// Main interface to the AvatarKit library
pub struct AvatarKit {
    logger: Logger,
    config: ExtractionConfig,
}

impl AvatarKit {
    /// Create a new AvatarKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "avatarkit.log"
    /// * `config` - Output directory and avatar size
    pub fn new(log_file: Option<&Path>, config: ExtractionConfig) -> AvatarResult<Self> {
        let log_path = log_file.unwrap_or_else(|| Path::new("avatarkit.log"));
        let logger = Logger::new(log_path)
            .map_err(|e| AvatarError::IoError(log_path.to_path_buf(), e))?;
        Ok(Self::with_logger(logger, config))
    }

    /// Create an instance around an existing logger
    pub fn with_logger(logger: Logger, config: ExtractionConfig) -> Self {
        AvatarKit { logger, config }
    }

    /// Split the sheet at `input_path` into nine avatars
    pub fn extract(&self, input_path: &Path) -> AvatarResult<ExtractionReport> {
        AvatarExtractor::new(&self.logger, &self.config).extract(input_path)
    }
}

/// Split a 3x3 sheet into avatars, reporting failure as `false`
///
/// Errors are printed to stderr with their cause. Avatars written before a
/// failure are left on disk.
pub fn extract_avatars(input_path: &Path, output_dir: &Path) -> bool {
    let config = ExtractionConfig::default().with_output_dir(output_dir);
    let kit = AvatarKit::with_logger(Logger::disabled(), config);

    match kit.extract(input_path) {
        Ok(_) => true,
        Err(e) => {
            error!("Avatar extraction failed: {}", e);
            eprintln!("Error extracting avatars: {}", e);
            false
        }
    }
}
