// Dropspot - util/error.rs
//
// Typed errors with context-preserving chains. No string-based error
// propagation across module boundaries; the UI layer formats these for
// display via their Display impls.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while turning a selected file into a displayable preview.
///
/// Every variant carries the offending path so the error panel and the logs
/// can name the file without extra plumbing. A non-image media type is NOT
/// an error: that case is a silent no-op at the accept guard and never
/// reaches the preview pipeline.
#[derive(Debug)]
pub enum MediaError {
    /// The file exceeds the configured size cap.
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The file's bytes could not be decoded as an image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {:.1} MB, above the {:.0} MB limit",
                path.display(),
                *size as f64 / (1024.0 * 1024.0),
                *max_size as f64 / (1024.0 * 1024.0),
            ),
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Cannot decode '{}' as an image: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for MediaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TooLarge { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}
