//! Shared layout helpers and palette for the views.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Top-left corner that centres a `w` x `h` block
    pub fn centre(&self, w: u16, h: u16) -> (u16, u16) {
        (
            self.width.saturating_sub(w) / 2,
            self.height.saturating_sub(h) / 2,
        )
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WELL_BG: Rgb = Rgb::new(30, 30, 40);

pub fn text() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), BLACK)
}

pub fn label() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold()
}

pub fn hint() -> CellStyle {
    text().dim()
}

pub fn border() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), BLACK)
}

pub fn banner() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold()
}

pub fn accent() -> CellStyle {
    CellStyle::new(Rgb::new(240, 200, 80), BLACK).bold()
}

/// Blank the whole framebuffer at the viewport size
pub fn reset(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().glyph(' '));
}

/// Write `s` horizontally centred inside `[x, x + w)`
pub fn put_centred(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, s: &str, style: CellStyle) {
    let len = s.chars().count() as u16;
    fb.put_str(x.saturating_add(w.saturating_sub(len) / 2), y, s, style);
}
