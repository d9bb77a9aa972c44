//! Render context and asset readiness.
//!
//! A [`RenderContext`] is the fully-built state of one font variant:
//! resolved config, sliced tile sheet and glyph map. It can only be
//! constructed once both asset loads completed, so the render path either
//! sees a complete old context or a complete new one, never a partial
//! build.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{DrawCommand, FontConfig, FontVariant, GlyphMap, LayoutMetrics, Result, TileSheet, layout_text};

#[derive(Debug, Clone)]
pub struct RenderContext {
    variant: FontVariant,
    config: FontConfig,
    sheet: TileSheet,
    glyph_map: GlyphMap,
    metrics: LayoutMetrics,
}

impl RenderContext {
    pub fn new(variant: FontVariant, config: FontConfig, sheet_image: &RgbaImage) -> Result<Self> {
        let spec = variant.spec();
        let sheet = TileSheet::slice(sheet_image, &config)?;
        let glyph_map = GlyphMap::build(spec, &config);
        log::info!("{} ready: {} tiles, {} glyph keys", spec.name, sheet.len(), glyph_map.len());
        Ok(Self {
            variant,
            config,
            sheet,
            glyph_map,
            metrics: LayoutMetrics::from(spec),
        })
    }

    /// Read both assets from disk and build. The config is read first so
    /// the sheet is sliced with config-driven geometry.
    pub fn load(variant: FontVariant, source: &AssetSource) -> Result<Self> {
        let config = FontConfig::load(variant.spec(), &source.config_path)?;
        let sheet_image = image::open(&source.sheet_path)?.to_rgba8();
        Self::new(variant, config, &sheet_image)
    }

    pub fn variant(&self) -> FontVariant {
        self.variant
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    pub fn sheet(&self) -> &TileSheet {
        &self.sheet
    }

    pub fn glyph_map(&self) -> &GlyphMap {
        &self.glyph_map
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn layout(&self, text: &str) -> Vec<DrawCommand> {
        layout_text(text, &self.glyph_map, &self.config.widths, &self.metrics)
    }

    /// Text rendering stays suppressed while the width table is empty.
    pub fn is_renderable(&self) -> bool {
        !self.config.widths.is_empty()
    }

    /// Switch to the toggled variant: reload its config, re-slice its
    /// sheet and rebuild the glyph map. The old context stays usable until
    /// the new one is returned.
    pub fn toggled(&self, source: &AssetSource) -> Result<Self> {
        Self::load(self.variant.toggle(), source)
    }
}

/// Where one variant's assets come from.
#[derive(Debug, Clone)]
pub struct AssetSource {
    pub config_path: PathBuf,
    pub sheet_path: PathBuf,
}

impl AssetSource {
    pub fn new(config_path: impl Into<PathBuf>, sheet_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            sheet_path: sheet_path.into(),
        }
    }
}

/// Two-phase readiness join for the config and sheet loads.
///
/// Feed each asset as it arrives, in either order; a context is produced
/// exactly when both are present. Re-feeding an asset replaces the pending
/// one and rebuilds (last applied wins).
#[derive(Debug)]
pub struct AssetLoader {
    variant: FontVariant,
    config: Option<FontConfig>,
    sheet: Option<RgbaImage>,
}

impl AssetLoader {
    pub fn new(variant: FontVariant) -> Self {
        Self {
            variant,
            config: None,
            sheet: None,
        }
    }

    pub fn variant(&self) -> FontVariant {
        self.variant
    }

    pub fn config_loaded(&mut self, config: FontConfig) -> Result<Option<RenderContext>> {
        self.config = Some(config);
        self.try_finish()
    }

    pub fn sheet_loaded(&mut self, sheet: RgbaImage) -> Result<Option<RenderContext>> {
        self.sheet = Some(sheet);
        self.try_finish()
    }

    pub fn read_config(&mut self, path: &Path) -> Result<Option<RenderContext>> {
        let config = FontConfig::load(self.variant.spec(), path)?;
        self.config_loaded(config)
    }

    pub fn read_sheet(&mut self, path: &Path) -> Result<Option<RenderContext>> {
        let sheet = image::open(path)?.to_rgba8();
        self.sheet_loaded(sheet)
    }

    pub fn is_ready(&self) -> bool {
        self.config.is_some() && self.sheet.is_some()
    }

    fn try_finish(&mut self) -> Result<Option<RenderContext>> {
        match (&self.config, &self.sheet) {
            (Some(config), Some(sheet)) => RenderContext::new(self.variant, config.clone(), sheet).map(Some),
            _ => Ok(None),
        }
    }
}
