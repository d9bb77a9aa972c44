use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{Rgba, RgbaImage};
use tiletext::{AssetSource, DialogScreen, EditSession, FontVariant, RenderContext};

/// Write a sheet for `variant` where tile `i` is solid with red channel
/// `i % 256`, plus a widths file, and return the asset source.
fn write_assets(variant: FontVariant, dir: &Path, widths_json: &str) -> AssetSource {
    let spec = variant.spec();
    let tile_width = spec.tile_size.width as u32;
    let sheet = RgbaImage::from_fn(
        tile_width * spec.number_of_tiles as u32,
        spec.tile_size.height as u32,
        |x, _| Rgba([(x / tile_width) as u8, 0, 0, 255]),
    );

    let config_path = dir.join(format!("{}_widths.json", spec.name.replace(' ', "_")));
    let sheet_path = dir.join(format!("{}_font.png", spec.name.replace(' ', "_")));
    fs::write(&config_path, widths_json).unwrap();
    sheet.save(&sheet_path).unwrap();

    AssetSource::new(config_path, sheet_path)
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("tiletext_tests").join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn dialog_update_cycle_from_disk_assets() {
    let dir = temp_dir("update_cycle");
    let source = write_assets(FontVariant::VariableWidth, &dir, r#"{"H": 8, "i": 4, "a_button": 10}"#);

    let ctx = RenderContext::load(FontVariant::VariableWidth, &source).unwrap();
    let mut session = EditSession::new();
    let mut screen = DialogScreen::for_variant(FontVariant::VariableWidth);

    // a keyup cycle with a token spliced in at the caret
    session.set_text("Hi");
    session.set_caret(2);
    session.insert_token("a_button");
    assert_eq!(session.text(), "Hi<a_button>");

    let text = session.text().to_string();
    let commands = session.update(&text, &ctx).unwrap();
    assert_eq!(commands.len(), 3);
    // H(8) then i(4) then the 10px token
    assert_eq!(commands[0].x, 6);
    assert_eq!(commands[1].x, 14);
    assert_eq!(commands[2].x, 18);

    screen.render(&ctx, &text);
    for &command in &commands {
        let px = screen.image().get_pixel(command.x as u32, command.y as u32);
        assert_eq!(px.0[0], command.tile as u8);
    }

    // an over-long paste truncates the stored text and renders nothing
    assert!(session.update("a\nb\nc\nd\ne", &ctx).is_none());
    assert_eq!(session.text(), "a\nb\nc\nd");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn font_toggle_round_trip_restores_the_mapping() {
    let dir = temp_dir("toggle");
    let italic_source = write_assets(FontVariant::Italic, &dir, r#"{"H": 8}"#);
    let variable_source = write_assets(FontVariant::VariableWidth, &dir, r#"{"H": 8}"#);

    let italic = RenderContext::load(FontVariant::Italic, &italic_source).unwrap();

    let toggled = italic.toggled(&variable_source).unwrap();
    assert_eq!(toggled.variant(), FontVariant::VariableWidth);
    assert_eq!(toggled.sheet().len(), 112);
    assert_ne!(toggled.glyph_map(), italic.glyph_map());

    let back = toggled.toggled(&italic_source).unwrap();
    assert_eq!(back.variant(), FontVariant::Italic);
    assert_eq!(back.glyph_map(), italic.glyph_map());
    assert_eq!(back.sheet().len(), 224);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fixed_variant_uses_char_code_widths() {
    let dir = temp_dir("char_code");
    // 'H' is 72, 'i' is 105
    let source = write_assets(FontVariant::Fixed, &dir, r#"{"72": 8, "105": 4}"#);

    let ctx = RenderContext::load(FontVariant::Fixed, &source).unwrap();
    let commands = ctx.layout("Hi");
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].x, 16);
    assert_eq!(commands[1].x, 24);

    // no width fallback in this variant: an unmeasured glyph advances zero
    let commands = ctx.layout("zH");
    assert_eq!(commands[0].x, 16);
    assert_eq!(commands[1].x, 16);

    let _ = fs::remove_dir_all(&dir);
}
