//! The user-input surface: authoritative text and caret.

use crate::{DrawCommand, MAX_LINES, RenderContext};

/// What happened to a text update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUpdate {
    Accepted,
    /// The input exceeded the line limit; the stored text was cut back to
    /// the first [`MAX_LINES`] lines and this cycle renders nothing.
    Truncated,
}

/// Owns the text being edited. The stored text is authoritative: inputs
/// past the line limit truncate the text itself, not just the render.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    text: String,
    caret: usize,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret byte position, always on a char boundary.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, position: usize) {
        let mut position = position.min(self.text.len());
        while !self.text.is_char_boundary(position) {
            position -= 1;
        }
        self.caret = position;
    }

    pub fn set_text(&mut self, text: &str) -> TextUpdate {
        let lines: Vec<&str> = text.split('\n').collect();
        if lines.len() > MAX_LINES {
            self.text = lines[..MAX_LINES].join("\n");
            self.set_caret(self.caret);
            log::info!("input of {} lines truncated to {MAX_LINES}", lines.len());
            return TextUpdate::Truncated;
        }
        self.text = text.to_string();
        self.set_caret(self.caret);
        TextUpdate::Accepted
    }

    /// Splice `<name>` into the text at the caret and move the caret past
    /// it.
    pub fn insert_token(&mut self, name: &str) {
        let tag = format!("<{name}>");
        self.text.insert_str(self.caret, &tag);
        self.caret += tag.len();
    }

    /// One keyup-style update cycle: store the text and lay it out, unless
    /// the stored text had to be truncated.
    pub fn update(&mut self, text: &str, ctx: &RenderContext) -> Option<Vec<DrawCommand>> {
        match self.set_text(text) {
            TextUpdate::Truncated => None,
            TextUpdate::Accepted => Some(ctx.layout(&self.text)),
        }
    }
}
