//! Projects a `core::Session` into a framebuffer: the well with its locked
//! and falling cells, the side panel, and the menu/banner screens. No I/O
//! happens here, so the whole view is testable against in-memory frames.

use crate::core::{Piece, Session, EMPTY};
use crate::term::fb::{FrameBuffer, Style};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per board cell keeps the well roughly square on
        // common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one gameplay frame into a framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport, high_score: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (start_x, start_y, frame_w, frame_h) = self.frame_rect(viewport);
        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;

        // Title above the frame when there is room.
        if start_y >= 1 {
            let title = "B L O C K F A L L";
            let tx = start_x + frame_w.saturating_sub(title.chars().count() as u16) / 2;
            fb.print(tx, start_y - 1, title, Style::default().bold());
        }

        // Background for play area.
        let well = Style::new(Rgb::new(80, 80, 90), WELL_BG);
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);

        // Border.
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Locked board cells from the projected grid.
        let grid = session.board().grid();
        for (y, row) in grid.iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                if *color == EMPTY {
                    self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16);
                } else {
                    self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, *color);
                }
            }
        }

        // Active piece; cells above the visible top stay hidden.
        let active = session.active();
        for (x, y) in active.cells() {
            if x >= 0 && x < BOARD_WIDTH && y >= 0 && y < BOARD_HEIGHT {
                self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, active.color());
            }
        }

        // Side panel (score/high/level plus hold and next previews).
        self.draw_side_panel(&mut fb, session, viewport, high_score);

        // Overlays.
        if session.paused() {
            self.draw_overlay_text(&mut fb, viewport, "PAUSED");
        } else if session.game_over() {
            self.draw_overlay_text(&mut fb, viewport, "GAME OVER");
        }

        fb
    }

    /// Render the start menu.
    pub fn render_menu(&self, viewport: Viewport, high_score: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let mid_y = viewport.height / 2;
        let title = Style::new(Rgb::new(255, 255, 0), PANEL_BG).bold();
        let hint = Style::default().dim();

        put_centered(&mut fb, mid_y.saturating_sub(2), "B L O C K F A L L", title);
        put_centered(&mut fb, mid_y, "press any key to play", Style::default());
        if high_score > 0 {
            put_centered(&mut fb, mid_y + 2, &format!("high score {}", high_score), hint);
        }
        put_centered(&mut fb, mid_y + 4, "q quits", hint);

        fb
    }

    /// Render a full-screen flash with one centered line, as shown after a
    /// new high score.
    pub fn render_banner(&self, viewport: Viewport, text: &str) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        put_centered(&mut fb, viewport.height / 2, text, style);
        fb
    }

    /// Board frame placement: centered, with one border cell on each side.
    fn frame_rect(&self, viewport: Viewport) -> (u16, u16, u16, u16) {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        (start_x, start_y, frame_w, frame_h)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 60, 60), PANEL_BG);
        if w < 2 || h < 2 {
            return;
        }

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: Rgb,
    ) {
        let style = Style::new(color, WELL_BG).bold();
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (start_x + 1 + x * self.cell_w, start_y + 1 + y * self.cell_h)
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        high_score: u32,
    ) {
        let (start_x, start_y, frame_w, _) = self.frame_rect(viewport);
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.print(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.print(panel_x, y, &format!("{}", session.score()), value);
        y = y.saturating_add(2);

        fb.print(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.print(panel_x, y, &format!("{}", high_score), value);
        y = y.saturating_add(2);

        fb.print(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.print(panel_x, y, &format!("{}", session.level()), value);
        y = y.saturating_add(2);

        fb.print(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        match session.held_piece() {
            Some(held) => self.draw_preview(fb, panel_x, y, &held),
            None => fb.print(panel_x, y, "-", value),
        }
        y = y.saturating_add(6);

        fb.print(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let next = session.next_piece();
        self.draw_preview(fb, panel_x, y, &next);
    }

    /// Draw a piece's 5x5 mask in its shadow color.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let style = Style::new(piece.shadow(), PANEL_BG).bold();
        for (i, row) in piece.frame().iter().enumerate() {
            for (j, byte) in row.bytes().enumerate() {
                if byte == b'0' {
                    fb.fill_rect(
                        x + j as u16 * self.cell_w,
                        y + i as u16,
                        self.cell_w,
                        1,
                        '█',
                        style,
                    );
                }
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        let (start_x, start_y, frame_w, frame_h) = self.frame_rect(viewport);
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.print(x, mid_y, text, style);
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: Style) {
    let text_w = text.chars().count() as u16;
    let x = fb.width().saturating_sub(text_w) / 2;
    fb.print(x, y, text, style);
}
