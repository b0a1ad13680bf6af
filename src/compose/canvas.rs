use std::path::Path;

use anyhow::{Context, Result, ensure};
use fast_image_resize as fir;
use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::compose::layout::{FitResult, fit_to_canvas};

const LETTERBOX_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fixed-size RGBA drawing surface for one meme.
///
/// Placing an image fills the whole surface black first so non-matching
/// aspect ratios get letterbox borders, then blits the scaled image at the
/// computed offsets. Captions are stamped on top by the caption step.
#[derive(Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "canvas dimensions must be positive"
        );
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    /// Fill black, scale `source` to fit, and draw it centered on the slack
    /// axis. Returns the computed placement so callers can log or inspect it.
    pub fn place_image(&mut self, source: &RgbaImage) -> Result<FitResult> {
        let (src_w, src_h) = source.dimensions();
        ensure!(
            src_w > 0 && src_h > 0,
            "source image dimensions must be positive"
        );

        let fit = fit_to_canvas(
            self.image.width() as f32,
            self.image.height() as f32,
            src_w as f32,
            src_h as f32,
        );
        debug!(
            width = fit.width,
            height = fit.height,
            start_x = fit.start_x,
            start_y = fit.start_y,
            "placing image"
        );

        for px in self.image.pixels_mut() {
            *px = LETTERBOX_FILL;
        }

        let draw_w = (fit.width.round() as u32).max(1);
        let draw_h = (fit.height.round() as u32).max(1);
        let scaled = resize_rgba(source, draw_w, draw_h)?;
        imageops::overlay(
            &mut self.image,
            &scaled,
            fit.start_x.round() as i64,
            fit.start_y.round() as i64,
        );
        Ok(fit)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("failed to save canvas to {}", path.display()))
    }
}

fn resize_rgba(source: &RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage> {
    if source.width() == target_w && source.height() == target_h {
        return Ok(source.clone());
    }

    let src_view = fir::images::ImageRef::new(
        source.width(),
        source.height(),
        source.as_raw(),
        fir::PixelType::U8x4,
    )
    .context("failed to create source view for canvas resize")?;
    let mut dst_image = fir::images::Image::new(target_w, target_h, fir::PixelType::U8x4);
    let options = fir::ResizeOptions::new()
        .resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::CatmullRom));
    let mut resizer = fir::Resizer::new();
    resizer
        .resize(&src_view, &mut dst_image, Some(&options))
        .context("canvas resize failed")?;
    let buffer = dst_image.into_vec();
    RgbaImage::from_raw(target_w, target_h, buffer)
        .ok_or_else(|| anyhow::anyhow!("failed to construct resized RGBA image"))
}
