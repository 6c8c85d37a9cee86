//! PairsView: the 13x4 card table, scores and turn status.
//!
//! Pure (no I/O).

use crate::core::{CardSnapshot, CardState, MatchSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{self, Viewport, BLACK};
use crate::types::{Outcome, Side, DECK_SIZE};

/// Cards per table row
pub const TABLE_COLS: usize = 13;
/// Table rows
pub const TABLE_ROWS: usize = DECK_SIZE / TABLE_COLS;

const CARD_W: u16 = 4;
const COL_STRIDE: u16 = CARD_W + 1;
const ROW_STRIDE: u16 = 2;

#[derive(Debug, Default)]
pub struct PairsView;

impl PairsView {
    pub fn new() -> Self {
        Self
    }

    /// Render the table with the cursor on `cursor` (row-major position).
    pub fn render_into(
        &self,
        snap: &MatchSnapshot,
        cursor: usize,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        layout::reset(fb, viewport);

        let grid_w = TABLE_COLS as u16 * COL_STRIDE - 1;
        let grid_h = TABLE_ROWS as u16 * ROW_STRIDE - 1;
        let frame_w = grid_w + 4;
        let frame_h = grid_h + 2;
        // Title above, four lines of status below.
        let (start_x, top) = viewport.centre(frame_w, frame_h + 6);
        let start_y = top + 1;

        let mut title = String::from("PAIRS  ·  ");
        title.push_str(&snap.difficulty.as_str().to_uppercase());
        layout::put_centred(fb, start_x, frame_w, top, &title, layout::label());

        fb.draw_box(start_x, start_y, frame_w, frame_h, layout::border());

        for (pos, card) in snap.cards.iter().enumerate() {
            let col = (pos % TABLE_COLS) as u16;
            let row = (pos / TABLE_COLS) as u16;
            let x = start_x + 2 + col * COL_STRIDE;
            let y = start_y + 1 + row * ROW_STRIDE;
            draw_card(fb, x, y, card, pos == cursor && snap.awaiting_human());
        }

        let mut y = start_y + frame_h;
        let mut x = start_x;
        x = fb.put_str(x, y, "You ", layout::label());
        x = fb.put_u32(x, y, snap.human_score, layout::text());
        x = fb.put_str(x, y, "   Computer ", layout::label());
        x = fb.put_u32(x, y, snap.computer_score, layout::text());
        x = fb.put_str(x, y, "   Pairs left ", layout::label());
        fb.put_u32(x, y, snap.remaining_pairs, layout::text());

        y += 2;
        fb.put_str(start_x, y, status_line(snap), layout::accent());

        y += 2;
        let keys = if snap.outcome.is_some() {
            "r rematch   m menu   q quit"
        } else {
            "arrows move   space/enter flip   r restart   m menu   q quit"
        };
        fb.put_str(start_x, y, keys, layout::hint());
    }

    pub fn render(&self, snap: &MatchSnapshot, cursor: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }
}

fn draw_card(fb: &mut FrameBuffer, x: u16, y: u16, card: &CardSnapshot, selected: bool) {
    let highlight = Rgb::new(240, 200, 80);

    match (card.state, card.face) {
        (CardState::Hidden, _) | (_, None) => {
            let bg = if selected { highlight } else { Rgb::new(40, 60, 120) };
            let style = CellStyle::new(Rgb::new(90, 110, 170), bg);
            fb.fill_rect(x, y, CARD_W, 1, '░', style);
        }
        (state, Some((suit, rank))) => {
            let fg = if suit.is_red() {
                Rgb::new(200, 40, 40)
            } else {
                BLACK
            };
            let bg = if selected {
                highlight
            } else {
                Rgb::new(235, 235, 225)
            };
            let mut style = CellStyle::new(fg, bg).bold();
            if state == CardState::Matched {
                style = CellStyle::new(fg, Rgb::new(120, 120, 115)).dim();
            }

            fb.fill_rect(x, y, CARD_W, 1, ' ', style);
            let label = rank.label();
            let end = fb.put_str(x + 1, y, label, style);
            fb.put_char(end, y, suit.symbol(), style);
        }
    }
}

/// One-line description of whose move it is, or the final result
pub fn status_line(snap: &MatchSnapshot) -> &'static str {
    match snap.outcome {
        Some(Outcome::HumanWins) => "You win!",
        Some(Outcome::ComputerWins) => "The computer wins.",
        Some(Outcome::Tie) => "It's a tie.",
        None => match (snap.active, snap.resolving) {
            (Side::Computer, _) => "Computer's turn...",
            (Side::Human, true) => match snap.last_resolution {
                Some(r) if r.side == Side::Human && !r.matched => "No match.",
                _ => "Checking...",
            },
            (Side::Human, false) => "Your turn: pick a card.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchGame;

    #[test]
    fn renders_hidden_table() {
        let game = MatchGame::new(4);
        let fb = PairsView::new().render(&game.snapshot(), 0, Viewport::new(100, 30));

        let hidden = fb.glyphs().iter().filter(|g| g.ch == '░').count();
        assert_eq!(hidden, DECK_SIZE * CARD_W as usize);
        assert!(fb.contains_text("PAIRS"));
        assert!(fb.contains_text("Your turn"));
        assert!(fb.contains_text("Pairs left 26"));
    }

    #[test]
    fn face_up_card_shows_rank_and_suit() {
        let mut game = MatchGame::new(4);
        game.flip(7).unwrap();
        let card = *game.card(7).unwrap();
        let fb = PairsView::new().render(&game.snapshot(), 0, Viewport::new(100, 30));

        let mut face = String::from(card.rank.label());
        face.push(card.suit.symbol());
        assert!(fb.contains_text(&face));
    }

    #[test]
    fn status_reports_outcome() {
        let mut snap = MatchSnapshot::default();
        assert_eq!(status_line(&snap), "Your turn: pick a card.");
        snap.active = Side::Computer;
        assert_eq!(status_line(&snap), "Computer's turn...");
        snap.outcome = Some(Outcome::Tie);
        assert_eq!(status_line(&snap), "It's a tie.");
    }
}
