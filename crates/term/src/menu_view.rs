//! MenuView: start screen for picking a game and the opponent's difficulty.

use crate::fb::FrameBuffer;
use crate::layout::{self, Viewport};
use crate::types::Difficulty;

/// Start-menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Blocks,
    Pairs,
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Blocks, MenuEntry::Pairs, MenuEntry::Quit];

    pub fn title(&self) -> &'static str {
        match self {
            MenuEntry::Blocks => "Falling blocks",
            MenuEntry::Pairs => "Pairs vs computer",
            MenuEntry::Quit => "Quit",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MenuEntry::Blocks => 0,
            MenuEntry::Pairs => 1,
            MenuEntry::Quit => 2,
        }
    }

    /// Entry `step` places away, wrapping
    pub fn offset(&self, step: isize) -> Self {
        let n = Self::ALL.len() as isize;
        Self::ALL[(self.index() as isize + step).rem_euclid(n) as usize]
    }
}

#[derive(Debug, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_into(
        &self,
        selected: MenuEntry,
        difficulty: Difficulty,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        layout::reset(fb, viewport);

        let frame_w = 40;
        let frame_h = 13;
        let (x, y) = viewport.centre(frame_w, frame_h);
        fb.draw_box(x, y, frame_w, frame_h, layout::border());
        layout::put_centred(fb, x, frame_w, y + 1, "TERMINAL MINIGAMES", layout::banner());

        let mut row = y + 3;
        for entry in MenuEntry::ALL {
            let is_selected = entry == selected;
            let style = if is_selected {
                layout::accent()
            } else {
                layout::text()
            };
            let cx = fb.put_str(x + 4, row, if is_selected { "> " } else { "  " }, style);
            fb.put_str(cx, row, entry.title(), style);
            row += 2;
        }

        let cx = fb.put_str(x + 6, row, "Difficulty: ", layout::label());
        let mut diff_x = cx;
        for level in Difficulty::ALL {
            let style = if level == difficulty {
                layout::accent()
            } else {
                layout::hint()
            };
            diff_x = fb.put_str(diff_x, row, level.as_str(), style) + 1;
        }

        layout::put_centred(
            fb,
            x,
            frame_w,
            y + frame_h - 2,
            "↑/↓ choose  ←/→ difficulty  enter",
            layout::hint(),
        );
    }

    pub fn render(&self, selected: MenuEntry, difficulty: Difficulty, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(selected, difficulty, viewport, &mut fb);
        fb
    }
}
