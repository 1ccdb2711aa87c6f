//! SVG to PNG conversion: the backend seam and the fixed logo job built on it.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::{debug, info};
use resvg::usvg::{Options, Tree};

use crate::error::ImageConversionError;
use crate::raster::{Fit, Rasterizer};

pub const LOGO_SIZE: u32 = 128;

/// Anything that can turn an image file into a PNG of a given size.
pub trait ImageConverter {
    fn convert_image(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), ImageConversionError>;
}

/// Read and parse an SVG file.
///
/// Relative `href`s inside the document resolve against the file's directory.
pub fn load_tree(path: &Path, system_fonts: bool) -> Result<Tree, ImageConversionError> {
    let data = fs::read(path).map_err(|source| ImageConversionError::Read {
        path: path.to_owned(),
        source,
    })?;

    let mut opt = Options::default();
    opt.resources_dir = fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    if system_fonts {
        opt.fontdb_mut().load_system_fonts();
    }

    let tree = Tree::from_data(&data, &opt).map_err(|source| ImageConversionError::Parse {
        path: path.to_owned(),
        source,
    })?;
    debug!(
        "parsed {} ({}x{})",
        path.display(),
        tree.size().width(),
        tree.size().height()
    );
    Ok(tree)
}

/// Renders on the CPU with resvg and encodes with the `image` crate.
#[derive(Default)]
pub struct ResvgConverter {
    rasterizer: Rasterizer,
    system_fonts: bool,
}

impl ResvgConverter {
    pub fn new(fit: Fit) -> Self {
        ResvgConverter {
            rasterizer: Rasterizer::with_fit(fit),
            system_fonts: false,
        }
    }

    /// Load the system font database so `<text>` elements render.
    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.system_fonts = enabled;
        self
    }
}

impl ImageConverter for ResvgConverter {
    fn convert_image(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), ImageConversionError> {
        let tree = load_tree(input, self.system_fonts)?;
        let image = self.rasterizer.rasterize(&tree, width, height)?;

        image
            .save_with_format(output, ImageFormat::Png)
            .map_err(|source| ImageConversionError::Write {
                path: output.to_owned(),
                source,
            })?;
        info!("wrote {}x{} png to {}", width, height, output.display());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fit: Fit,
}

impl ConvertConfig {
    /// `src/assets/logo.svg` to a 128×128 `src/assets/logo.png` under `project_dir`.
    pub fn logo(project_dir: impl AsRef<Path>) -> Self {
        let assets = project_dir.as_ref().join("src").join("assets");
        ConvertConfig {
            input: assets.join("logo.svg"),
            output: assets.join("logo.png"),
            width: LOGO_SIZE,
            height: LOGO_SIZE,
            fit: Fit::default(),
        }
    }
}

pub struct LogoConverter<C = ResvgConverter> {
    config: ConvertConfig,
    backend: C,
}

impl LogoConverter<ResvgConverter> {
    pub fn new(config: ConvertConfig) -> Self {
        let backend = ResvgConverter::new(config.fit);
        LogoConverter { config, backend }
    }
}

impl<C: ImageConverter> LogoConverter<C> {
    pub fn with_backend(config: ConvertConfig, backend: C) -> Self {
        LogoConverter { config, backend }
    }

    /// Convert the configured input, overwriting any previous output.
    pub fn convert(&self) -> Result<(), ImageConversionError> {
        let c = &self.config;
        debug!("converting {} -> {}", c.input.display(), c.output.display());
        self.backend
            .convert_image(&c.input, &c.output, c.width, c.height)
    }
}
