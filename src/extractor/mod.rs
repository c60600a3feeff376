//! Avatar extraction from grid sheets

mod avatar_extractor;

pub use avatar_extractor::{avatar_file_name, crop, normalize, AvatarExtractor, ExtractionReport};
