//! GameView: maps an engine [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Piece, Player};
use crate::engine::Session;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ModeKind, PieceKind, Seat, BOARD_HEIGHT, BOARD_WIDTH};

/// Columns reserved for the side panel
const PANEL_W: u16 = 16;
/// Blank columns between frames
const GAP: u16 = 2;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Terminal renderer for one or two boards plus a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Outer size of one bordered board
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let seats: &[Seat] = match session.mode() {
            ModeKind::Versus => &[Seat::Left, Seat::Main][..],
            ModeKind::Classic | ModeKind::Hinted => &[Seat::Main][..],
        };
        let n = seats.len() as u16;
        let boards_w = n * frame_w + (n - 1) * GAP;
        let with_panel = viewport.width >= boards_w + GAP + PANEL_W;
        let total_w = if with_panel {
            boards_w + GAP + PANEL_W
        } else {
            boards_w
        };

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        for (i, &seat) in seats.iter().enumerate() {
            let Some(player) = session.player(seat) else {
                continue;
            };
            let x = start_x + i as u16 * (frame_w + GAP);
            let clue = match seat {
                Seat::Main => session.hint().map(|h| &h.clue),
                Seat::Left => None,
            };
            self.draw_board(fb, x, start_y, player, clue);
            if n > 1 {
                let label = match seat {
                    Seat::Left => " P1 ",
                    Seat::Main => " P2 ",
                };
                fb.put_str(x + 2, start_y, label, CellStyle::default().bold());
            }
        }

        if with_panel {
            self.draw_side_panel(fb, session, start_x + boards_w + GAP, start_y);
        }

        let overlay = if session.game_over() {
            Some("GAME OVER")
        } else if session.paused() {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = overlay {
            draw_overlay_text(fb, start_x, start_y, boards_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        player: &Player,
        clue: Option<&Piece>,
    ) {
        let (frame_w, frame_h) = self.frame_size();
        let bg = CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG).dim();

        fb.fill_rect(x0 + 1, y0 + 1, frame_w - 2, frame_h - 2, ' ', bg);
        draw_border(
            fb,
            x0,
            y0,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        let board = player.board();
        for y in 0..BOARD_HEIGHT as usize {
            for (x, cell) in board.row(y).iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, x0, y0, x as i8, y as i8, *kind),
                    None => self.fill_cell(fb, x0, y0, x as i8, y as i8, '·', bg),
                }
            }
        }

        // The clue replaces the ghost when both are available.
        if let Some(clue) = clue {
            let style = CellStyle::plain(Rgb::of_piece(clue.kind), PLAY_BG);
            for (x, y) in clue.cells() {
                self.fill_cell(fb, x0, y0, x, y, '▒', style);
            }
        } else if let Some(ghost) = player.ghost() {
            let style = CellStyle::plain(Rgb::new(140, 140, 140), PLAY_BG).dim();
            for (x, y) in ghost.cells() {
                self.fill_cell(fb, x0, y0, x, y, '░', style);
            }
        }

        if let Some(piece) = player.piece() {
            for (x, y) in piece.cells() {
                self.draw_block(fb, x0, y0, x, y, piece.kind);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::plain(Rgb::of_piece(kind), PLAY_BG).bold();
        self.fill_cell(fb, x0, y0, x, y, '█', style);
    }

    /// Paint one board cell; cells above or outside the grid are skipped.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = x0 + 1 + x as u16 * self.cell_w;
        let py = y0 + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, session: &Session, x: u16, y0: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        let mut y = y0;

        fb.put_str(x, y, "MODE", label);
        y += 1;
        fb.put_str(x, y, session.mode().as_str(), value);
        if session.settings().autopilot {
            fb.put_str(x + 8, y, "AUTO", value.dim());
        }
        y += 2;

        fb.put_str(x, y, "LEVEL", label);
        y += 1;
        fb.put_u32(x, y, session.level(), value);
        y += 2;

        fb.put_str(x, y, "LINES", label);
        y += 1;
        match session.mode() {
            ModeKind::Versus => {
                for (seat, name) in [(Seat::Left, "P1 "), (Seat::Main, "P2 ")] {
                    let lines = session.player(seat).map_or(0, Player::lines_cleared);
                    fb.put_str(x, y, name, value.dim());
                    fb.put_u32(x + 3, y, lines, value);
                    y += 1;
                }
            }
            ModeKind::Classic | ModeKind::Hinted => {
                fb.put_u32(x, y, session.total_lines(), value);
                y += 1;
            }
        }
        y += 1;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let next = session.next_piece();
        fb.put_str(x, y, next.as_str(), value);
        self.draw_preview(fb, x, y + 1, next);
        y += 6;

        if let Some(hint) = session.hint() {
            fb.put_str(x, y, "HINT", label);
            y += 1;
            let text = format!("rot {} shift {:+}", hint.best.rotation(), hint.best.shift());
            fb.put_str(x, y, &text, value);
        }
    }

    /// Small drawing of the next piece in its spawn orientation, with its
    /// bounding box anchored at `(x, y)`.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::plain(Rgb::of_piece(kind), SCREEN_BG);
        let piece = Piece::spawn(kind);
        let offsets = piece.offsets();
        let min_dx = offsets.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
        let min_dy = offsets.iter().map(|&(_, dy)| dy).min().unwrap_or(0);
        for &(dx, dy) in offsets {
            let col = (dx - min_dx) as u16;
            let row = (dy - min_dy) as u16;
            let px = x.saturating_add(col * self.cell_w);
            let py = y.saturating_add(row);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x0: u16, y0: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = x0.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, y0.saturating_add(h / 2), text, style);
}
