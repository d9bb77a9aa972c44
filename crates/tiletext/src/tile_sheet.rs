use std::path::Path;

use image::{imageops, RgbaImage};

use crate::{EngineError, FontConfig, Result, Size};

/// A font sprite sheet cut into fixed-size glyph tiles.
///
/// Tiles are sliced left to right without overlap; the sheet must cover
/// `tile_width * number_of_tiles` pixels horizontally.
#[derive(Debug, Clone)]
pub struct TileSheet {
    tile_size: Size,
    tiles: Vec<RgbaImage>,
}

impl TileSheet {
    pub fn slice(sheet: &RgbaImage, config: &FontConfig) -> Result<Self> {
        let expected_width = config.tile_width * config.number_of_tiles as i32;
        let expected_height = config.tile_height;
        if (sheet.width() as i32) < expected_width || (sheet.height() as i32) < expected_height {
            return Err(EngineError::SheetTooSmall {
                expected_width,
                expected_height,
                width: sheet.width() as i32,
                height: sheet.height() as i32,
            });
        }

        let mut tiles = Vec::with_capacity(config.number_of_tiles);
        for i in 0..config.number_of_tiles {
            let x = (i as i32 * config.tile_width) as u32;
            let tile = imageops::crop_imm(sheet, x, 0, config.tile_width as u32, config.tile_height as u32).to_image();
            tiles.push(tile);
        }
        log::info!("sliced {} tiles of {}x{}", tiles.len(), config.tile_width, config.tile_height);

        Ok(Self {
            tile_size: Size::new(config.tile_width, config.tile_height),
            tiles,
        })
    }

    pub fn load(path: &Path, config: &FontConfig) -> Result<Self> {
        let sheet = image::open(path)?.to_rgba8();
        Self::slice(&sheet, config)
    }

    pub fn tile(&self, index: usize) -> Option<&RgbaImage> {
        self.tiles.get(index)
    }

    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
