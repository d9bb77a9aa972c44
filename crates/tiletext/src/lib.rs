#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

mod error;
pub use error::*;

mod variant;
pub use variant::*;

mod config;
pub use config::*;

mod glyph_map;
pub use glyph_map::*;

mod tile_sheet;
pub use tile_sheet::*;

mod layout;
pub use layout::*;

mod context;
pub use context::*;

mod screen;
pub use screen::*;

mod session;
pub use session::*;

#[derive(Copy, Clone, Debug, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Size) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Eq for Size {}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from(value: (u32, u32)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}
