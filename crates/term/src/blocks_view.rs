//! BlocksView: maps a `BlocksSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::BlocksSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{self, Viewport, WELL_BG};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Falling-block screen: the well, a score panel and overlays.
pub struct BlocksView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BlocksView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl BlocksView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &BlocksSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        layout::reset(fb, viewport);

        let well_w = (BOARD_WIDTH as u16) * self.cell_w;
        let well_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;
        let (start_x, start_y) = viewport.centre(frame_w, frame_h);

        fb.draw_box(start_x, start_y, frame_w, frame_h, layout::border());

        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => self.fill_cell(fb, start_x, start_y, x, y, '█', piece_style(*kind)),
                    None => self.fill_cell(fb, start_x, start_y, x, y, '·', empty),
                }
            }
        }

        if let Some(active) = snap.active {
            for &(x, y) in &active.cells {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    let style = piece_style(active.kind).bold();
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", "r to restart");
        } else if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", "p to resume");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BlocksSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BlocksSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let (label, value) = (layout::label(), layout::text());
        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "SPEED", label);
        let end = fb.put_u32(panel_x, y + 1, snap.drop_interval_ms, value);
        fb.put_str(end, y + 1, "ms", layout::hint());
        y += 3;

        if let Some(lock) = snap.last_lock.filter(|l| l.lines_cleared > 0) {
            let end = fb.put_str(panel_x, y, "+", layout::accent());
            fb.put_u32(end, y, lock.points, layout::accent());
            if lock.level_up {
                fb.put_str(panel_x, y + 1, "LEVEL UP", layout::accent());
            }
        }
        y += 3;

        for line in [
            "←/→  move",
            "↑    rotate",
            "↓    soft drop",
            "spc  hard drop",
            "p    pause",
            "r    restart",
            "q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, layout::hint());
            y += 1;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        subtitle: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        layout::put_centred(fb, start_x, frame_w, mid_y, title, layout::banner());
        layout::put_centred(fb, start_x, frame_w, mid_y + 1, subtitle, layout::hint());
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, WELL_BG)
}
