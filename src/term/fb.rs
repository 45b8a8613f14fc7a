//! Styled-character framebuffer the game view draws into.
//!
//! A frame is a dense row-major grid of glyphs. All drawing clips at the
//! frame edges, so view code never has to bounds-check.

use crate::types::Rgb;

/// Foreground/background colors plus the two attributes the game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One terminal cell: a character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        style: Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)),
    };
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::BLANK
    }
}

/// A finished frame, ready to flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// One row of glyphs, or `None` past the bottom edge.
    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.glyphs[start..start + self.width as usize])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y).and_then(|row| row.get(x as usize).copied())
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.glyphs[i] = Glyph { ch, style };
        }
    }

    /// Write a string starting at (x, y), clipped at the right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            match x.checked_add(i as u16) {
                Some(cx) if cx < self.width => self.put(cx, y, ch, style),
                _ => break,
            }
        }
    }

    /// Fill a rectangle with one glyph, clipped at the frame edges.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_blank() {
        let fb = FrameBuffer::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(fb.get(x, y), Some(Glyph::BLANK));
            }
        }
        assert_eq!(fb.get(3, 0), None);
        assert_eq!(fb.get(0, 2), None);
    }

    #[test]
    fn test_print_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.print(2, 0, "abcdef", Style::default());
        assert_eq!(fb.get(2, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(3, 0).unwrap().ch, 'b');
        // Nothing wrapped onto a following row.
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.fill_rect(1, 1, 10, 10, '#', Style::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 1).unwrap().ch, '#');
        assert_eq!(fb.get(2, 2).unwrap().ch, '#');
    }

    #[test]
    fn test_style_builders() {
        let style = Style::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)).bold();
        assert!(style.bold);
        assert!(!style.dim);
        assert_eq!(style.fg, Rgb::new(1, 2, 3));
    }
}
