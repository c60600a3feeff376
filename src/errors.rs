//! Error types for avatar extraction

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageError;

/// Avatar extraction error types
#[derive(Debug)]
pub enum AvatarError {
    /// Filesystem failure on the given path
    IoError(PathBuf, io::Error),
    /// Source image exists but could not be decoded
    DecodeError(PathBuf, ImageError),
    /// An avatar could not be encoded as PNG
    EncodeError(PathBuf, ImageError),
    /// Source image is too small to produce nonempty grid cells
    InvalidDimensions(u32, u32),
    /// Invalid configuration contents
    ConfigError(String),
}

impl AvatarError {
    /// Classify an error raised while opening and decoding the source image
    ///
    /// The image crate reports a missing or unreadable file as
    /// `ImageError::IoError`; that case becomes an `IoError` so callers can
    /// tell it apart from a corrupt or unsupported file.
    pub fn from_decode(path: &Path, error: ImageError) -> Self {
        match error {
            ImageError::IoError(e) => AvatarError::IoError(path.to_path_buf(), e),
            other => AvatarError::DecodeError(path.to_path_buf(), other),
        }
    }

    /// Classify an error raised while writing an avatar
    pub fn from_encode(path: &Path, error: ImageError) -> Self {
        match error {
            ImageError::IoError(e) => AvatarError::IoError(path.to_path_buf(), e),
            other => AvatarError::EncodeError(path.to_path_buf(), other),
        }
    }

    /// The underlying I/O error kind, if this is a filesystem failure
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            AvatarError::IoError(_, e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for AvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvatarError::IoError(path, e) => write!(f, "I/O error on {}: {}", path.display(), e),
            AvatarError::DecodeError(path, e) => write!(f, "Failed to decode {}: {}", path.display(), e),
            AvatarError::EncodeError(path, e) => write!(f, "Failed to encode {}: {}", path.display(), e),
            AvatarError::InvalidDimensions(w, h) => {
                write!(f, "Image {}x{} is too small to split into a 3x3 grid", w, h)
            }
            AvatarError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AvatarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AvatarError::IoError(_, e) => Some(e),
            AvatarError::DecodeError(_, e) | AvatarError::EncodeError(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for avatar operations
pub type AvatarResult<T> = Result<T, AvatarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_classified_as_io() {
        let err = ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let classified = AvatarError::from_decode(Path::new("grid.png"), err);

        assert_eq!(classified.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(classified.to_string().contains("grid.png"));
        assert!(classified.to_string().contains("gone"));
    }

    #[test]
    fn test_non_io_errors_keep_their_class() {
        let err = ImageError::Unsupported(image::error::UnsupportedError::from_format_and_kind(
            image::error::ImageFormatHint::Unknown,
            image::error::UnsupportedErrorKind::Format(image::error::ImageFormatHint::Unknown),
        ));
        let classified = AvatarError::from_decode(Path::new("grid.bin"), err);

        assert!(matches!(classified, AvatarError::DecodeError(_, _)));
        assert_eq!(classified.io_kind(), None);
    }

    #[test]
    fn test_dimension_message() {
        let err = AvatarError::InvalidDimensions(2, 5);
        assert_eq!(err.to_string(), "Image 2x5 is too small to split into a 3x3 grid");
    }
}
