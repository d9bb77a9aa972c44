//! Built-in font variants.
//!
//! Each variant bundles the tile geometry, base alphabet ordering,
//! special-token set and layout constants of one dialogue-box font.
//! The alphabet strings mirror the tile order of the shipped sheets,
//! so an entry's position is its tile index.

use crate::Size;

/// How width-table rows are keyed.
///
/// The fixed 13x13 table keys rows by decimal character code,
/// the later tables key by the literal character or token name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthKeying {
    CharCode,
    Literal,
}

/// Advance used for a mapped glyph that has no width-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthFallback {
    /// Advance by a fixed default width.
    Fixed(i32),
    /// Advance by zero. Missing widths must never corrupt cursor arithmetic.
    Zero,
}

impl WidthFallback {
    pub fn width(self) -> i32 {
        match self {
            WidthFallback::Fixed(width) => width,
            WidthFallback::Zero => 0,
        }
    }
}

/// How the special-token list is merged into the base alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenComposition {
    /// Tokens follow the alphabet at the next free tile index.
    Append,
    /// Tokens replace `offset..offset + len` of the alphabet sequence.
    /// The offset counts glyph slots, not bytes.
    Splice { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariant {
    #[default]
    Fixed,
    Italic,
    VariableWidth,
}

impl FontVariant {
    pub const ALL: [FontVariant; 3] = [FontVariant::Fixed, FontVariant::Italic, FontVariant::VariableWidth];

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// The variant the font-toggle button switches to. The two 16x14 fonts
    /// toggle between each other; the fixed font has no alternate sheet.
    pub fn toggle(self) -> FontVariant {
        match self {
            FontVariant::Fixed => FontVariant::Fixed,
            FontVariant::Italic => FontVariant::VariableWidth,
            FontVariant::VariableWidth => FontVariant::Italic,
        }
    }

    pub fn spec(self) -> &'static VariantSpec {
        match self {
            FontVariant::Fixed => &FIXED_SPEC,
            FontVariant::Italic => &ITALIC_SPEC,
            FontVariant::VariableWidth => &VARIABLE_WIDTH_SPEC,
        }
    }
}

impl std::fmt::Display for FontVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static configuration of one font variant.
#[derive(Debug, Clone)]
pub struct VariantSpec {
    pub name: &'static str,
    pub tile_size: Size,
    pub number_of_tiles: usize,
    pub canvas_size: Size,
    pub left_margin: i32,
    pub top_margin: i32,
    pub line_spacing: i32,
    /// Usable horizontal pixel budget before characters are clipped.
    pub max_text_width: i32,
    pub alphabet: &'static str,
    pub special_chars: &'static [&'static str],
    pub composition: TokenComposition,
    pub width_keying: WidthKeying,
    pub width_fallback: WidthFallback,
    /// Tile the space character is pinned to after composition.
    pub space_tile: Option<usize>,
}

pub const VARIANT_NAMES: &[&str] = &["fixed 13x13", "italic 16x14", "variable width 16x14"];

// The trailing commas are padding slots in the sheet; the final entry is space.
const FIXED_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!?/:\"'-.,_;#+()%~*@π,,,,,,,,,,,,, ";

pub static FIXED_SPEC: VariantSpec = VariantSpec {
    name: "fixed 13x13",
    tile_size: Size::new(13, 13),
    number_of_tiles: 96,
    canvas_size: Size::new(240, 72),
    left_margin: 16,
    top_margin: 8,
    line_spacing: 16,
    max_text_width: 208,
    alphabet: FIXED_ALPHABET,
    special_chars: &[],
    composition: TokenComposition::Append,
    width_keying: WidthKeying::CharCode,
    width_fallback: WidthFallback::Zero,
    space_tile: None,
};

// 32 glyph slots per row. Row 3 is replaced by the special-token splice.
const ITALIC_ALPHABET: &str = concat!(
    " !”#$%&'()*+,-./0123456789:;<=>?",
    "@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_",
    "'abcdefghijklmnopqrstuvwxyz{|}~ ",
    "                ",
    " ¡¢£ ¥ §¨©ª«¬ ®¯°±  ´µ¶·¸¹º»   ¿",
    "ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏ ÑÒÓÔÕÖ ØÙÚÛÜ  ß",
    "àáâãäåæçèéêëìíîï ñòóôõö÷øùúûü  ÿ"
);

const ITALIC_SPECIAL_CHARS: &[&str] = &[
    "a_1", "a_2", "b_1", "b_2", "l_1", "l_2", "r_1", "r_2", "st_1", "st_2", "sel_1", "sel_2", " ", " ", "“", "—",
];

pub static ITALIC_SPEC: VariantSpec = VariantSpec {
    name: "italic 16x14",
    tile_size: Size::new(16, 14),
    number_of_tiles: 224,
    canvas_size: Size::new(160, 56),
    left_margin: 6,
    top_margin: 8,
    line_spacing: 14,
    max_text_width: 208,
    alphabet: ITALIC_ALPHABET,
    special_chars: ITALIC_SPECIAL_CHARS,
    composition: TokenComposition::Splice { offset: 32 * 3 },
    width_keying: WidthKeying::Literal,
    width_fallback: WidthFallback::Fixed(8),
    space_tile: Some(0),
};

const VARIABLE_WIDTH_ALPHABET: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[¥]^_±abcdefghijklmnopqrstuvwxyz{|}~";

const VARIABLE_WIDTH_SPECIAL_CHARS: &[&str] = &[
    "block",
    "a_button",
    " ",
    "b_button",
    " ",
    "l_button_1",
    "l_button_2",
    "r_button_1",
    "r_button_2",
    "start_button_1",
    "start_button_2",
    "select_button_1",
    "select_button_2",
    " ",
];

pub static VARIABLE_WIDTH_SPEC: VariantSpec = VariantSpec {
    name: "variable width 16x14",
    tile_size: Size::new(16, 14),
    number_of_tiles: 112,
    canvas_size: Size::new(160, 56),
    left_margin: 6,
    top_margin: 8,
    line_spacing: 14,
    max_text_width: 208,
    alphabet: VARIABLE_WIDTH_ALPHABET,
    special_chars: VARIABLE_WIDTH_SPECIAL_CHARS,
    composition: TokenComposition::Append,
    width_keying: WidthKeying::Literal,
    width_fallback: WidthFallback::Fixed(8),
    space_tile: None,
};
