//! Flushes frame buffers to a real terminal via crossterm.
//!
//! The renderer owns the previous frame and emits only the cells that
//! changed since it, batching everything into one buffered write per frame
//! so a tick never produces a partially drawn screen.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter). Must run even on error paths, or the
    /// user's shell is left in raw mode.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the previous frame so the next draw repaints everything.
    /// Call after a terminal resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the retained previous frame so the
    /// caller gets a recycled buffer back instead of cloning every frame.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();

        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(0, 0));

        if prev.width() != fb.width() || prev.height() != fb.height() {
            encode_full(fb, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff(&prev, fb, &mut self.buf)?;
        }
        self.flush_buf()?;

        mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for &cell in fb.row(y) {
            queue_cell(out, cell, &mut style)?;
        }
    }
    finish_frame(out)
}

fn encode_diff(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;
    for y in 0..next.height() {
        let prev_row = prev.row(y);
        let next_row = next.row(y);
        let mut x = 0;
        while let Some((start, len)) = next_changed_run(prev_row, next_row, x) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for &cell in &next_row[start..start + len] {
                queue_cell(out, cell, &mut style)?;
            }
            x = start + len;
        }
    }
    finish_frame(out)
}

fn finish_frame(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Locate the next run of cells at or after `from` where `next` differs
/// from `prev`. Adjacent changed cells coalesce into one run so each run
/// costs a single cursor move.
fn next_changed_run(prev: &[Cell], next: &[Cell], from: usize) -> Option<(usize, usize)> {
    let mut start = from;
    while start < next.len() && prev.get(start) == next.get(start) {
        start += 1;
    }
    if start >= next.len() {
        return None;
    }
    let mut end = start + 1;
    while end < next.len() && prev.get(end) != next.get(end) {
        end += 1;
    }
    Some((start, end - start))
}

fn queue_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<CellStyle>) -> Result<()> {
    if *current != Some(cell.style) {
        queue_style(out, cell.style)?;
        *current = Some(cell.style);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // Reset first: SGR 0 clears colors as well as attributes.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetColors(Colors::new(to_color(style.fg), to_color(style.bg))))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
