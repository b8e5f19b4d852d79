//! Terminal canvas: all terminal output lives here.
//!
//! The world is a fixed `screen_width × screen_height` pixel space; the
//! [`Viewport`] scales it onto however many character cells the terminal
//! has.  Drawing goes into an in-memory cell grid and `present` writes the
//! whole grid in one flush, so frames never flicker through a cleared screen.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Print},
    QueueableCommand,
};

use crate::assets::Sprites;
use crate::geometry::{Color, Rect};
use crate::render::{Canvas, Image};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SHIP: Color = Color::rgb(40, 40, 140);
const C_ALIEN: Color = Color::rgb(20, 130, 40);
const C_LIFE_LEFT: Color = Color::rgb(0, 170, 0);
const C_LIFE_LOST: Color = Color::rgb(200, 0, 0);

fn image_color(image: Image) -> Color {
    match image {
        Image::Ship => C_SHIP,
        Image::Alien => C_ALIEN,
        Image::LifeLeft => C_LIFE_LEFT,
        Image::LifeLost => C_LIFE_LOST,
    }
}

fn term_color(c: Color) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world pixels to terminal cells and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: i32,
    pub world_height: i32,
}

/// A half-open range of cells: columns `c0..c1`, rows `r0..r1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub c0: u16,
    pub r0: u16,
    pub c1: u16,
    pub r1: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_width: i32, world_height: i32) -> Self {
        Self {
            cols,
            rows,
            world_width,
            world_height,
        }
    }

    /// Cells covered by `rect`, clipped to the terminal.  Anything on screen
    /// covers at least one cell, so thin lasers stay visible.
    pub fn to_cells(&self, rect: &Rect) -> Option<CellRect> {
        let (cols, rows) = (self.cols as i64, self.rows as i64);
        let (ww, wh) = (self.world_width.max(1) as i64, self.world_height.max(1) as i64);

        let c0 = (rect.left() as i64 * cols).div_euclid(ww);
        let r0 = (rect.top() as i64 * rows).div_euclid(wh);
        let c1 = ceil_div(rect.right() as i64 * cols, ww).max(c0 + 1);
        let r1 = ceil_div(rect.bottom() as i64 * rows, wh).max(r0 + 1);

        let (c0, r0) = (c0.max(0), r0.max(0));
        let (c1, r1) = (c1.min(cols), r1.min(rows));
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some(CellRect {
            c0: c0 as u16,
            r0: r0 as u16,
            c1: c1 as u16,
            r1: r1 as u16,
        })
    }

    /// World point at the centre of a cell (used for mouse clicks).
    pub fn to_world(&self, col: u16, row: u16) -> (i32, i32) {
        let cols = self.cols.max(1) as i64;
        let rows = self.rows.max(1) as i64;
        let x = ((2 * col as i64 + 1) * self.world_width as i64) / (2 * cols);
        let y = ((2 * row as i64 + 1) * self.world_height as i64) / (2 * rows);
        (x as i32, y as i32)
    }
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

// ── Terminal canvas ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

pub struct TerminalCanvas<W: Write> {
    out: W,
    sprites: Sprites,
    viewport: Viewport,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, sprites: Sprites, viewport: Viewport) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: Color::rgb(0, 0, 0),
            bg: Color::rgb(0, 0, 0),
        };
        Self {
            out,
            sprites,
            viewport,
            cells: vec![blank; viewport.cols as usize * viewport.rows as usize],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Follow a terminal resize.  The next `fill` repaints every cell.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport.cols = cols;
        self.viewport.rows = rows;
        let blank = self.cells.first().copied().unwrap_or(Cell {
            ch: ' ',
            fg: Color::rgb(0, 0, 0),
            bg: Color::rgb(0, 0, 0),
        });
        self.cells = vec![blank; cols as usize * rows as usize];
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell_mut(&mut self, col: u16, row: u16) -> Option<&mut Cell> {
        if col >= self.viewport.cols || row >= self.viewport.rows {
            return None;
        }
        let idx = row as usize * self.viewport.cols as usize + col as usize;
        self.cells.get_mut(idx)
    }

    fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color, transparent_spaces: bool) {
        if row < 0 {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i32;
            if c < 0 || (transparent_spaces && ch == ' ') {
                continue;
            }
            if let Some(cell) = self.cell_mut(c as u16, row as u16) {
                cell.ch = ch;
                cell.fg = fg;
            }
        }
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn fill(&mut self, color: Color) {
        for cell in &mut self.cells {
            *cell = Cell {
                ch: ' ',
                fg: color,
                bg: color,
            };
        }
    }

    fn blit(&mut self, image: Image, rect: Rect) {
        let Some(area) = self.viewport.to_cells(&rect) else {
            return;
        };
        let glyph = self.sprites.glyph(image);
        let rows: Vec<String> = glyph.rows().to_vec();
        let (gw, gh) = (glyph.width() as i32, rows.len() as i32);

        // Centre the art on the covered cells.
        let cx = (area.c0 as i32 + area.c1 as i32) / 2;
        let cy = (area.r0 as i32 + area.r1 as i32) / 2;
        let left = cx - gw / 2;
        let top = cy - gh / 2;

        let color = image_color(image);
        for (i, line) in rows.iter().enumerate() {
            self.put_str(left, top + i as i32, line, color, true);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = self.viewport.to_cells(&rect) else {
            return;
        };
        for row in area.r0..area.r1 {
            for col in area.c0..area.c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = ' ';
                    cell.bg = color;
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, rect: Rect, color: Color) {
        let Some(area) = self.viewport.to_cells(&rect) else {
            return;
        };
        let len = text.chars().count() as i32;
        let col = (area.c0 as i32 + area.c1 as i32 - len) / 2;
        let row = (area.r0 as i32 + area.r1 as i32 - 1) / 2;
        self.put_str(col, row, text, color, false);
    }

    fn present(&mut self) -> io::Result<()> {
        let cols = self.viewport.cols as usize;
        if cols == 0 {
            return Ok(());
        }
        for (row, line) in self.cells.chunks(cols).enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;

            // Emit runs of identically-coloured cells.
            let mut run = String::new();
            let mut run_colors = (line[0].fg, line[0].bg);
            for cell in line {
                if (cell.fg, cell.bg) != run_colors {
                    flush_run(&mut self.out, &run, run_colors)?;
                    run.clear();
                    run_colors = (cell.fg, cell.bg);
                }
                run.push(cell.ch);
            }
            flush_run(&mut self.out, &run, run_colors)?;
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

fn flush_run<W: Write>(out: &mut W, run: &str, (fg, bg): (Color, Color)) -> io::Result<()> {
    if run.is_empty() {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(term_color(fg)))?;
    out.queue(style::SetBackgroundColor(term_color(bg)))?;
    out.queue(Print(run))?;
    Ok(())
}
