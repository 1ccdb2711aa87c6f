use std::io;
use std::path::PathBuf;

use resvg::usvg;
use thiserror::Error;

/// Anything that can go wrong between reading the SVG and writing the PNG.
#[derive(Debug, Error)]
pub enum ImageConversionError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse SVG {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: usvg::Error,
    },

    #[error("invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
