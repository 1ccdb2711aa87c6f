//! Rasterize an SVG asset into a fixed-size PNG.

pub mod convert;
pub mod error;
pub mod raster;

pub use convert::{
    load_tree, ConvertConfig, ImageConverter, LogoConverter, ResvgConverter, LOGO_SIZE,
};
pub use error::ImageConversionError;
pub use raster::{fit_transform, Fit, Rasterizer};
