//! Text layout: turns a raw input string into tile draw commands.

use crate::{GlyphMap, VariantSpec, WidthFallback, WidthTable};

/// Hard limit on rendered lines; the edit session truncates input past it.
pub const MAX_LINES: usize = 4;

/// One tile placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub tile: usize,
    pub x: i32,
    pub y: i32,
}

/// Fixed layout parameters of one font variant.
#[derive(Debug, Clone, Copy)]
pub struct LayoutMetrics {
    pub left_margin: i32,
    pub top_margin: i32,
    pub line_spacing: i32,
    pub max_text_width: i32,
    pub width_fallback: WidthFallback,
}

impl From<&VariantSpec> for LayoutMetrics {
    fn from(spec: &VariantSpec) -> Self {
        Self {
            left_margin: spec.left_margin,
            top_margin: spec.top_margin,
            line_spacing: spec.line_spacing,
            max_text_width: spec.max_text_width,
            width_fallback: spec.width_fallback,
        }
    }
}

/// Lay out `text` as draw commands.
///
/// Lines past [`MAX_LINES`] are ignored. `<name>` spans are special-token
/// tags; an unterminated tag consumes the rest of the line. Characters
/// starting at or past `max_text_width` are dropped without advancing the
/// cursor. Glyphs without a map entry emit nothing and advance zero.
pub fn layout_text(text: &str, map: &GlyphMap, widths: &WidthTable, metrics: &LayoutMetrics) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    let mut y = metrics.top_margin;
    for line in text.split('\n').take(MAX_LINES) {
        layout_line(line, map, widths, metrics, y, &mut commands);
        y += metrics.line_spacing;
    }
    commands
}

fn layout_line(line: &str, map: &GlyphMap, widths: &WidthTable, metrics: &LayoutMetrics, y: i32, out: &mut Vec<DrawCommand>) {
    let chars: Vec<char> = line.chars().collect();
    let mut cursor = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '<' {
            let mut name = String::new();
            let mut j = i + 1;
            while j < chars.len() && chars[j] != '>' {
                name.push(chars[j]);
                j += 1;
            }
            i = j + 1;

            if let Some(tile) = map.token_tile(&name) {
                out.push(DrawCommand {
                    tile,
                    x: metrics.left_margin + cursor,
                    y,
                });
                cursor += widths.token_width(&name).unwrap_or_else(|| metrics.width_fallback.width());
            }
            continue;
        }

        let ch = chars[i];
        i += 1;

        // clipping is checked before placement, so a glyph that starts
        // inside the budget may extend past it
        if cursor >= metrics.max_text_width {
            continue;
        }
        if let Some(tile) = map.char_tile(ch) {
            out.push(DrawCommand {
                tile,
                x: metrics.left_margin + cursor,
                y,
            });
            cursor += widths.char_width(ch).unwrap_or_else(|| metrics.width_fallback.width());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{FontConfig, GlyphMap, Size, TokenComposition, VariantSpec, WidthKeying, WidthTable};

    fn test_spec() -> VariantSpec {
        VariantSpec {
            name: "test",
            tile_size: Size::new(8, 8),
            number_of_tiles: 16,
            canvas_size: Size::new(240, 72),
            left_margin: 16,
            top_margin: 8,
            line_spacing: 16,
            max_text_width: 208,
            alphabet: "Hiab",
            special_chars: &["a_button"],
            composition: TokenComposition::Append,
            width_keying: WidthKeying::Literal,
            width_fallback: WidthFallback::Fixed(8),
            space_tile: None,
        }
    }

    fn widths(entries: &[(&str, i32)]) -> WidthTable {
        let map: HashMap<String, i32> = entries.iter().map(|&(k, v)| (k.to_string(), v)).collect();
        WidthTable::new(map, WidthKeying::Literal)
    }

    fn build_map(spec: &VariantSpec) -> GlyphMap {
        GlyphMap::build(spec, &FontConfig::defaults(spec))
    }

    #[test]
    fn test_two_letter_layout() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("H", 8), ("i", 4)]);
        let commands = layout_text("Hi", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(
            commands,
            vec![
                DrawCommand { tile: 0, x: 16, y: 8 },
                DrawCommand { tile: 1, x: 24, y: 8 },
            ]
        );
    }

    #[test]
    fn test_token_is_one_command() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("a_button", 10), ("a", 5)]);
        let commands = layout_text("<a_button>a", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(
            commands,
            vec![
                DrawCommand { tile: 4, x: 16, y: 8 },
                DrawCommand { tile: 2, x: 26, y: 8 },
            ]
        );
    }

    #[test]
    fn test_unterminated_tag_consumes_the_line() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("a_button", 10), ("H", 8)]);
        // the tag swallows "a_buttonHi"; nothing matches, nothing draws
        let commands = layout_text("<a_buttonHi", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(commands, vec![]);

        // the line after it is unaffected
        let commands = layout_text("<oops\nH", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(commands, vec![DrawCommand { tile: 0, x: 16, y: 24 }]);
    }

    #[test]
    fn test_unknown_token_draws_nothing() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("H", 8)]);
        let commands = layout_text("<nope>H", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(commands, vec![DrawCommand { tile: 0, x: 16, y: 8 }]);
    }

    #[test]
    fn test_unknown_char_advances_zero() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("H", 8), ("i", 4)]);
        // 'Z' has no tile and no width entry
        let commands = layout_text("HZi", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(
            commands,
            vec![
                DrawCommand { tile: 0, x: 16, y: 8 },
                DrawCommand { tile: 1, x: 24, y: 8 },
            ]
        );
        // rendering twice is identical
        assert_eq!(commands, layout_text("HZi", &map, &table, &LayoutMetrics::from(&spec)));
    }

    #[test]
    fn test_missing_width_uses_the_fallback() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("i", 4)]);
        let commands = layout_text("Hi", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(commands[1].x, 16 + 8);

        let mut zero_spec = test_spec();
        zero_spec.width_fallback = WidthFallback::Zero;
        let commands = layout_text("Hi", &map, &table, &LayoutMetrics::from(&zero_spec));
        assert_eq!(commands[1].x, 16);
    }

    #[test]
    fn test_overflow_drops_without_advancing() {
        let mut spec = test_spec();
        spec.max_text_width = 20;
        let map = build_map(&spec);
        let table = widths(&[("H", 12), ("i", 4)]);
        // H at 0 (12), H at 12 (24 > 20 but placed: check precedes placement),
        // then the budget is spent and the rest drops
        let commands = layout_text("HHHi", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(
            commands,
            vec![
                DrawCommand { tile: 0, x: 16, y: 8 },
                DrawCommand { tile: 0, x: 28, y: 8 },
            ]
        );
    }

    #[test]
    fn test_line_spacing_and_line_cap() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("H", 8)]);
        let commands = layout_text("H\nH\nH\nH\nH", &map, &table, &LayoutMetrics::from(&spec));
        let ys: Vec<i32> = commands.iter().map(|cmd| cmd.y).collect();
        assert_eq!(ys, vec![8, 24, 40, 56]);
    }

    #[test]
    fn test_empty_token_name() {
        let spec = test_spec();
        let map = build_map(&spec);
        let table = widths(&[("H", 8)]);
        let commands = layout_text("<>H", &map, &table, &LayoutMetrics::from(&spec));
        assert_eq!(commands, vec![DrawCommand { tile: 0, x: 16, y: 8 }]);
    }
}
