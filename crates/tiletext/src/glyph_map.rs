//! Glyph key to tile index mapping.
//!
//! Tiles are assigned 0,1,2,... over the composed sequence: base alphabet
//! first, then special tokens appended or spliced in at the variant's
//! offset. Later assignments of the same key win; the blank `" "` entry is
//! the reserved unused-slot placeholder and collides silently.

use std::collections::HashMap;

use crate::{FontConfig, TokenComposition, VariantSpec};

/// A single character or a special-token name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GlyphKey {
    Char(char),
    Token(String),
}

impl GlyphKey {
    /// Token-list entries that are exactly one character act as character
    /// keys, like the single-char entries in the original special lists.
    pub fn from_entry(entry: &str) -> GlyphKey {
        let mut chars = entry.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => GlyphKey::Char(ch),
            _ => GlyphKey::Token(entry.to_string()),
        }
    }

    /// The reserved placeholder for unused tile slots.
    pub fn is_blank_slot(&self) -> bool {
        matches!(self, GlyphKey::Char(' '))
    }
}

impl std::fmt::Display for GlyphKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphKey::Char(ch) => write!(f, "{ch}"),
            GlyphKey::Token(name) => write!(f, "<{name}>"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMap {
    map: HashMap<GlyphKey, usize>,
}

impl GlyphMap {
    pub fn build(spec: &VariantSpec, config: &FontConfig) -> Self {
        let mut keys: Vec<GlyphKey> = spec.alphabet.chars().map(GlyphKey::Char).collect();
        let specials = config.special_chars.iter().map(|entry| GlyphKey::from_entry(entry));

        match spec.composition {
            TokenComposition::Append => keys.extend(specials),
            TokenComposition::Splice { offset } => {
                for (i, key) in specials.enumerate() {
                    let slot = offset + i;
                    if slot < keys.len() {
                        keys[slot] = key;
                    } else {
                        keys.push(key);
                    }
                }
            }
        }

        if keys.len() > config.number_of_tiles {
            log::warn!(
                "{} glyph entries for {} tiles; entries past the budget stay unmapped",
                keys.len(),
                config.number_of_tiles
            );
        }

        let mut map = HashMap::new();
        for (index, key) in keys.into_iter().take(config.number_of_tiles).enumerate() {
            let blank = key.is_blank_slot();
            if let Some(previous) = map.insert(key.clone(), index) {
                if !blank {
                    log::debug!("duplicate glyph key '{key}': tile {previous} replaced by tile {index}");
                }
            }
        }

        if let Some(tile) = spec.space_tile {
            map.insert(GlyphKey::Char(' '), tile);
        }
        // a literal space must always resolve to a tile
        map.entry(GlyphKey::Char(' ')).or_insert(0);

        Self { map }
    }

    pub fn get(&self, key: &GlyphKey) -> Option<usize> {
        self.map.get(key).copied()
    }

    pub fn char_tile(&self, ch: char) -> Option<usize> {
        self.map.get(&GlyphKey::Char(ch)).copied()
    }

    pub fn token_tile(&self, name: &str) -> Option<usize> {
        self.map.get(&GlyphKey::from_entry(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
