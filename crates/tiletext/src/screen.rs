//! The dialogue-box render surface.

use std::path::Path;

use image::{imageops, Rgba, RgbaImage};

use crate::{DrawCommand, EngineError, FontVariant, RenderContext, Result, Size};

/// A fixed-resolution RGBA canvas the dialogue box is painted on.
pub struct DialogScreen {
    size: Size,
    pixels: RgbaImage,
    background: Option<RgbaImage>,
}

impl DialogScreen {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: RgbaImage::new(size.width as u32, size.height as u32),
            background: None,
        }
    }

    pub fn for_variant(variant: FontVariant) -> Self {
        Self::new(variant.spec().canvas_size)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Set the background image, scaled to the canvas resolution when the
    /// sizes differ.
    pub fn set_background(&mut self, background: RgbaImage) {
        let (width, height) = (self.size.width as u32, self.size.height as u32);
        let background = if background.dimensions() == (width, height) {
            background
        } else {
            imageops::resize(&background, width, height, imageops::FilterType::Nearest)
        };
        self.background = Some(background);
    }

    pub fn load_background(&mut self, path: &Path) -> Result<()> {
        let background = image::open(path)?.to_rgba8();
        self.set_background(background);
        Ok(())
    }

    pub fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    pub fn draw_background(&mut self) {
        if let Some(background) = &self.background {
            imageops::overlay(&mut self.pixels, background, 0, 0);
        }
    }

    pub fn draw_tile(&mut self, ctx: &RenderContext, command: DrawCommand) {
        let Some(tile) = ctx.sheet().tile(command.tile) else {
            log::error!("tile {} missing from sheet ({} tiles)", command.tile, ctx.sheet().len());
            return;
        };
        imageops::overlay(&mut self.pixels, tile, command.x as i64, command.y as i64);
    }

    /// One full paint: clear, background, then the laid-out text. Returns
    /// the commands that were drawn. While the width table is empty the
    /// text pass is suppressed and only the background is painted.
    pub fn render(&mut self, ctx: &RenderContext, text: &str) -> Vec<DrawCommand> {
        self.clear();
        self.draw_background();

        if !ctx.is_renderable() {
            log::warn!("width table is empty; text rendering suppressed");
            return Vec::new();
        }

        let commands = ctx.layout(text);
        for &command in &commands {
            self.draw_tile(ctx, command);
        }
        commands
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn to_rgba(&self) -> (Size, Vec<u8>) {
        (self.size, self.pixels.as_raw().clone())
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let img: image::ImageBuffer<Rgba<u8>, Vec<u8>> =
            RgbaImage::from_raw(self.size.width as u32, self.size.height as u32, self.pixels.as_raw().clone())
                .ok_or(EngineError::ImageBufferCreationFailed)?;

        img.save(path).map_err(|e| EngineError::ImageSaveFailed { message: e.to_string() })?;

        Ok(())
    }
}
