//! Flushes framebuffers to the terminal through crossterm.
//!
//! The renderer owns raw mode and the alternate screen. Frames are queued
//! and flushed once each; after the first frame only the horizontal runs of
//! glyphs that changed since the previous frame are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Glyph, Style};
use crate::types::Rgb;

pub struct TerminalRenderer {
    out: io::Stdout,
    /// Previous frame, the diff baseline. `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    /// Last style queued, to skip redundant escape sequences.
    style: Option<Style>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            style: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.queue(cursor::Hide)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the diff baseline so the next frame redraws in full, as after a
    /// terminal resize or a screen the renderer did not draw.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Queue a frame and flush it, keeping it as the next diff baseline.
    pub fn draw(&mut self, fb: FrameBuffer) -> Result<()> {
        self.style = None;
        match self.shown.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                for run in changed_runs(&prev, &fb) {
                    self.out.queue(cursor::MoveTo(run.x, run.y))?;
                    self.write_glyphs(run.glyphs)?;
                }
            }
            _ => {
                self.out.queue(terminal::Clear(terminal::ClearType::All))?;
                for y in 0..fb.height() {
                    self.out.queue(cursor::MoveTo(0, y))?;
                    if let Some(row) = fb.row(y) {
                        self.write_glyphs(row)?;
                    }
                }
            }
        }

        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        self.shown = Some(fb);
        Ok(())
    }

    fn write_glyphs(&mut self, glyphs: &[Glyph]) -> Result<()> {
        for glyph in glyphs {
            if self.style != Some(glyph.style) {
                self.queue_style(glyph.style)?;
                self.style = Some(glyph.style);
            }
            self.out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn queue_style(&mut self, style: Style) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(truecolor(style.fg)))?;
        self.out.queue(SetBackgroundColor(truecolor(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

fn truecolor(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A horizontal run of glyphs that changed between two frames.
struct Run<'a> {
    x: u16,
    y: u16,
    glyphs: &'a [Glyph],
}

/// Walk the changed runs of two same-size frames, row by row. Adjacent
/// changed glyphs coalesce into one run so the cursor moves once per run.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Run<'a>> {
    (0..next.height()).flat_map(move |y| {
        let old = prev.row(y).unwrap_or(&[]);
        let new = next.row(y).unwrap_or(&[]);
        let mut runs = Vec::new();
        let mut x = 0;
        while x < new.len() {
            if old.get(x) == new.get(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < new.len() && old.get(x) != new.get(x) {
                x += 1;
            }
            runs.push(Run {
                x: start as u16,
                y,
                glyphs: &new[start..x],
            });
        }
        runs
    })
}
