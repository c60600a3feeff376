//! Avatar extraction command
//!
//! Builds the extraction settings from CLI arguments (flags, then an
//! optional config file, then defaults) and runs the extractor.

use clap::ArgMatches;
use log::info;
use std::path::{Path, PathBuf};

use crate::commands::command_traits::Command;
use crate::config::ExtractionConfig;
use crate::errors::AvatarResult;
use crate::extractor::AvatarExtractor;
use crate::utils::logger::Logger;

/// Command for splitting an avatar sheet
pub struct ExtractCommand<'a> {
    /// Path to the avatar sheet
    input_file: PathBuf,
    /// Resolved settings
    config: ExtractionConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `input_file` - Avatar sheet to split
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(input_file: &Path, args: &ArgMatches, logger: &'a Logger) -> AvatarResult<Self> {
        info!("Input file: {}", input_file.display());

        let config_file = args.get_one::<String>("config").map(PathBuf::from);
        let output_dir = args.get_one::<String>("output-dir").map(PathBuf::from);
        let config = Self::resolve_config(config_file.as_deref(), output_dir)?;
        info!("Output directory: {}", config.output_dir.display());
        info!("Avatar size: {}", config.avatar_size);

        Ok(ExtractCommand {
            input_file: input_file.to_path_buf(),
            config,
            logger,
        })
    }

    /// Merge the config file (if any) with an output directory override
    pub fn resolve_config(config_file: Option<&Path>, output_dir: Option<PathBuf>) -> AvatarResult<ExtractionConfig> {
        let config = match config_file {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                ExtractionConfig::from_toml_file(path)?
            }
            None => ExtractionConfig::default(),
        };

        Ok(match output_dir {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> AvatarResult<()> {
        let report = AvatarExtractor::new(self.logger, &self.config).extract(&self.input_file)?;
        info!(
            "Extracted {} avatars from {}x{} source",
            report.avatars.len(),
            report.source_dimensions.0,
            report.source_dimensions.1
        );
        Ok(())
    }
}
