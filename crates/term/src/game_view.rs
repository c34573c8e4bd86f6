//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_mask, Tetromino};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::session::GameSnapshot;
use crate::types::{Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(15, 15, 35);
const FRAME: CellStyle = CellStyle::new(Rgb::new(60, 70, 110), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(0, 240, 240), Rgb::new(0, 0, 0));
const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0)).dim();

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
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let origin_x = viewport.width.saturating_sub(frame_w + 16) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        // Locked cells
        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(kind) => ('█', CellStyle::new(Rgb::of_piece(*kind), PLAYFIELD_BG)),
                    None => ('·', CellStyle::new(Rgb::new(40, 45, 80), PLAYFIELD_BG).dim()),
                };
                self.fill_board_cell(fb, origin_x, origin_y, x as i16, y as i16, ch, style);
            }
        }

        // Ghost first so the active piece draws over it where they overlap
        if let Some(ghost) = snap.ghost {
            let style = CellStyle::new(Rgb::new(120, 120, 130), PLAYFIELD_BG).dim();
            self.draw_piece(fb, origin_x, origin_y, &ghost, '░', style);
        }
        if let Some(active) = snap.active {
            let style = CellStyle::new(Rgb::of_piece(active.kind), PLAYFIELD_BG).bold();
            self.draw_piece(fb, origin_x, origin_y, &active, '█', style);
        }

        self.draw_side_panel(fb, snap, origin_x + frame_w + 2, origin_y);

        if !snap.started {
            self.draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, &["PRESS ENTER", "TO START"]);
        } else if snap.game_over {
            let final_score = format!("FINAL SCORE {}", snap.score);
            let level = format!("LEVEL REACHED {}", snap.level);
            self.draw_overlay(
                fb,
                origin_x,
                origin_y,
                frame_w,
                frame_h,
                &["GAME OVER", final_score.as_str(), level.as_str(), "R TO RESTART"],
            );
        } else if snap.paused {
            self.draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, &["PAUSED", "R TO RESTART"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.set(x, y, '┌', FRAME);
        fb.set(x + w - 1, y, '┐', FRAME);
        fb.set(x, y + h - 1, '└', FRAME);
        fb.set(x + w - 1, y + h - 1, '┘', FRAME);
        for dx in 1..w - 1 {
            fb.set(x + dx, y, '─', FRAME);
            fb.set(x + dx, y + h - 1, '─', FRAME);
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, '│', FRAME);
            fb.set(x + w - 1, y + dy, '│', FRAME);
        }
    }

    /// Draw the minos of a piece that fall inside the board
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        piece: &Tetromino,
        ch: char,
        style: CellStyle,
    ) {
        for (x, y) in piece.cells() {
            self.fill_board_cell(fb, origin_x, origin_y, x, y, ch, style);
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= i16::from(BOARD_WIDTH) || y < 0 || y >= i16::from(BOARD_HEIGHT) {
            return;
        }
        let px = origin_x + 1 + (x as u16) * self.cell_w;
        let py = origin_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let mut row = y;
        for (label, value) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, row, label, LABEL);
            fb.put_u32(x, row + 1, value, VALUE);
            row += 3;
        }

        fb.put_str(x, row, "NEXT", LABEL);
        row += 1;
        // Spawn-orientation mask of the next piece, like the preview box
        let mask = get_mask(snap.next.kind, Rotation::North);
        let style = CellStyle::new(Rgb::of_piece(snap.next.kind), Rgb::new(0, 0, 0));
        for (dx, dy) in mask.filled_cells() {
            fb.fill_rect(x + (dx as u16) * self.cell_w, row + dy as u16, self.cell_w, 1, '█', style);
        }
        row += mask.size() as u16 + 1;

        for hint in ["←→ move  ↑ rotate", "↓ down  space drop", "p pause  q quit"] {
            fb.put_str(x, row, hint, HINT);
            row += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let top = origin_y + frame_h / 2 - (lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = origin_x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn find(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn title_overlay_before_start() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        assert!(find(&fb, "PRESS ENTER"));
        assert!(find(&fb, "SCORE"));
    }

    #[test]
    fn active_piece_is_drawn_in_its_colour() {
        let mut snap = GameSnapshot::default();
        snap.started = true;
        snap.active = Some(Tetromino::new(PieceKind::O));
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(60, 24));

        let wanted = Rgb::of_piece(PieceKind::O);
        let painted = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter_map(|(x, y)| fb.get(x, y))
            .filter(|cell| cell.ch == '█' && cell.style.fg == wanted)
            .count();
        // 4 minos on the board, 2 columns each; the next preview is an I piece.
        assert_eq!(painted, 8);
        assert!(!find(&fb, "PRESS ENTER"));
    }

    #[test]
    fn game_over_overlay_shows_final_score_and_level() {
        let mut snap = GameSnapshot::default();
        snap.started = true;
        snap.game_over = true;
        snap.score = 1240;
        snap.level = 3;
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        assert!(find(&fb, "GAME OVER"));
        assert!(find(&fb, "FINAL SCORE 1240"));
        assert!(find(&fb, "LEVEL REACHED 3"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
