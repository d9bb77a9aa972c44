//! Font configuration and width tables.
//!
//! Two JSON shapes are accepted: a flat map of character-code-or-glyph-key
//! to pixel width (the extracted `widths.json` files), or a structured
//! object that also carries tile geometry and the special-token list.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::{EngineError, Result, VariantSpec, WidthKeying};

/// Structured config file: tile geometry + widths + special tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct FontConfigFile {
    pub tile_width: i32,
    pub tile_height: i32,
    pub number_of_tiles: usize,
    #[serde(default)]
    pub widths: HashMap<String, i32>,
    #[serde(default)]
    pub special_chars: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WidthFileShape {
    Structured(FontConfigFile),
    Flat(HashMap<String, i32>),
}

/// Per-glyph pixel advance table.
#[derive(Debug, Clone)]
pub struct WidthTable {
    entries: HashMap<String, i32>,
    keying: WidthKeying,
}

impl WidthTable {
    pub fn new(entries: HashMap<String, i32>, keying: WidthKeying) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, width)| {
                if width < 0 {
                    log::warn!("negative width {width} for '{key}' clamped to 0");
                    (key, 0)
                } else {
                    (key, width)
                }
            })
            .collect();
        Self { entries, keying }
    }

    pub fn empty(keying: WidthKeying) -> Self {
        Self {
            entries: HashMap::new(),
            keying,
        }
    }

    pub fn char_width(&self, ch: char) -> Option<i32> {
        match self.keying {
            WidthKeying::CharCode => self.entries.get(&(ch as u32).to_string()).copied(),
            WidthKeying::Literal => {
                let mut buf = [0; 4];
                self.entries.get(ch.encode_utf8(&mut buf) as &str).copied()
            }
        }
    }

    /// Token widths are always keyed by name, even in char-code tables.
    pub fn token_width(&self, name: &str) -> Option<i32> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolved font configuration: geometry, widths and special tokens.
#[derive(Debug, Clone)]
pub struct FontConfig {
    pub tile_width: i32,
    pub tile_height: i32,
    pub number_of_tiles: usize,
    pub widths: WidthTable,
    pub special_chars: Vec<String>,
}

impl FontConfig {
    /// Variant defaults with an empty width table.
    pub fn defaults(spec: &VariantSpec) -> Self {
        Self {
            tile_width: spec.tile_size.width,
            tile_height: spec.tile_size.height,
            number_of_tiles: spec.number_of_tiles,
            widths: WidthTable::empty(spec.width_keying),
            special_chars: spec.special_chars.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// Parse either accepted JSON shape. Flat tables take geometry and
    /// special tokens from the variant; a structured config that omits
    /// `special_chars` falls back to the variant's list as well.
    pub fn from_json(spec: &VariantSpec, json: &str) -> Result<Self> {
        match serde_json::from_str(json)? {
            WidthFileShape::Structured(file) => {
                if file.tile_width <= 0 || file.tile_height <= 0 {
                    return Err(EngineError::invalid_font_config(format!(
                        "tile size must be positive, got {}x{}",
                        file.tile_width, file.tile_height
                    )));
                }
                if file.number_of_tiles == 0 {
                    return Err(EngineError::invalid_font_config("number_of_tiles must be positive"));
                }
                let special_chars = if file.special_chars.is_empty() {
                    spec.special_chars.iter().map(|&s| s.to_string()).collect()
                } else {
                    file.special_chars
                };
                Ok(Self {
                    tile_width: file.tile_width,
                    tile_height: file.tile_height,
                    number_of_tiles: file.number_of_tiles,
                    widths: WidthTable::new(file.widths, spec.width_keying),
                    special_chars,
                })
            }
            WidthFileShape::Flat(widths) => Ok(Self {
                widths: WidthTable::new(widths, spec.width_keying),
                ..Self::defaults(spec)
            }),
        }
    }

    pub fn load(spec: &VariantSpec, path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|err| EngineError::read_file(path, err.to_string()))?;
        Self::from_json(spec, &json)
    }
}
