pub mod errors;
pub mod config;
pub mod grid;
pub mod extractor;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{extract_avatars, AvatarKit};

pub use config::ExtractionConfig;
pub use errors::{AvatarError, AvatarResult};
pub use extractor::{AvatarExtractor, ExtractionReport};
pub use grid::{GridLayout, Region};
