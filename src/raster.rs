//! CPU rasterization of a parsed SVG tree into an RGBA image of a fixed size.

use image::{Rgba, RgbaImage};
use log::debug;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Size, Tree};

use crate::error::ImageConversionError;

/// How the SVG view box is mapped onto the target pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fit {
    /// Uniform scale covering the whole target, centered; overflow is cropped.
    #[default]
    Cover,
    /// Uniform scale so the whole image is visible, centered on a transparent
    /// background.
    Contain,
    /// Stretch each axis independently.
    Fill,
}

/// Transform that maps an SVG of `svg_size` onto a `width`×`height` grid.
pub fn fit_transform(svg_size: Size, width: u32, height: u32, fit: Fit) -> Transform {
    let (w, h) = (width as f32, height as f32);
    let sx = w / svg_size.width();
    let sy = h / svg_size.height();

    let (sx, sy) = match fit {
        Fit::Cover => (sx.max(sy), sx.max(sy)),
        Fit::Contain => (sx.min(sy), sx.min(sy)),
        Fit::Fill => (sx, sy),
    };

    // center; negative offsets crop for Cover
    let tx = (w - svg_size.width() * sx) / 2.0;
    let ty = (h - svg_size.height() * sy) / 2.0;
    Transform::from_row(sx, 0.0, 0.0, sy, tx, ty)
}

pub struct Rasterizer {
    fit: Fit,
}

impl Rasterizer {
    pub fn new() -> Self {
        Rasterizer { fit: Fit::default() }
    }

    pub fn with_fit(fit: Fit) -> Self {
        Rasterizer { fit }
    }

    /// Render `tree` into a transparent `width`×`height` image.
    ///
    /// The returned pixels use straight (non-premultiplied) alpha, which is
    /// what PNG stores.
    pub fn rasterize(
        &self,
        tree: &Tree,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, ImageConversionError> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or(ImageConversionError::InvalidSize { width, height })?;
        let transform = fit_transform(tree.size(), width, height, self.fit);
        debug!(
            "rendering {}x{} svg into {}x{} ({:?}, {:?})",
            tree.size().width(),
            tree.size().height(),
            width,
            height,
            self.fit,
            transform
        );
        resvg::render(tree, transform, &mut pixmap.as_mut());

        let pixels = pixmap.pixels();
        Ok(RgbaImage::from_fn(width, height, |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        }))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Rasterizer::new()
    }
}
