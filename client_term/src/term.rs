//! Character-cell implementation of `GameLib`
//!
//! The field is scaled onto a grid of terminal cells; each frame is drawn
//! into the grid and then written out in one go.

use std::io::{self, Write};

use game_core::{Align, Color, GameLib};
use termion::{clear, color, cursor};

const TEXT_MARGIN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::White,
};

pub struct TermLib {
    cols: usize,
    rows: usize,
    field_width: f64,
    field_height: f64,
    color: Color,
    cells: Vec<Cell>,
}

impl TermLib {
    pub fn new(cols: u16, rows: u16, field_width: f64, field_height: f64) -> Self {
        let cols = cols.max(1) as usize;
        let rows = rows.max(1) as usize;
        Self {
            cols,
            rows,
            field_width,
            field_height,
            color: Color::White,
            cells: vec![BLANK; cols * rows],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn col(&self, x: f64) -> f64 {
        x / self.field_width * self.cols as f64
    }

    fn row(&self, y: f64) -> f64 {
        y / self.field_height * self.rows as f64
    }

    /// Cell range covering [lo, hi) in cell units, clipped to the grid.
    /// Visible spans are at least one cell wide; off-grid spans are empty.
    fn span(lo: f64, hi: f64, len: usize) -> (usize, usize) {
        if hi <= 0.0 || lo >= len as f64 {
            return (0, 0);
        }
        let start = lo.floor().max(0.0) as usize;
        let end = (hi.ceil() as usize).min(len);
        (start, end.max(start + 1))
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Cell {
                ch,
                color: self.color,
            };
        }
    }

    /// Write the whole grid to `w`
    pub fn present(&self, w: &mut impl Write) -> io::Result<()> {
        write!(w, "{}", clear::All)?;
        for row in 0..self.rows {
            write!(w, "{}", cursor::Goto(1, row as u16 + 1))?;
            let mut current = None;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if current != Some(cell.color) {
                    write!(w, "{}", color::Fg(ansi(cell.color)))?;
                    current = Some(cell.color);
                }
                write!(w, "{}", cell.ch)?;
            }
        }
        write!(w, "{}", color::Fg(color::Reset))?;
        w.flush()
    }

    #[cfg(test)]
    fn char_at(&self, col: usize, row: usize) -> char {
        self.cells[row * self.cols + col].ch
    }

    #[cfg(test)]
    fn row_text(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|c| c.ch)
            .collect()
    }
}

fn ansi(c: Color) -> color::AnsiValue {
    color::AnsiValue(match c {
        Color::White => 15,
        Color::Gray => 8,
        Color::Yellow => 11,
        Color::Green => 10,
        Color::Blue => 12,
        Color::Red => 9,
    })
}

impl GameLib for TermLib {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        let (c0, c1) = Self::span(
            self.col(cx - width / 2.0),
            self.col(cx + width / 2.0),
            self.cols,
        );
        let (r0, r1) = Self::span(
            self.row(cy - height / 2.0),
            self.row(cy + height / 2.0),
            self.rows,
        );
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, '█');
            }
        }
    }

    fn draw_text(&mut self, text: &str, y: f64, align: Align) {
        let row = (self.row(y).floor().max(0.0) as usize).min(self.rows - 1);
        let len = text.chars().count();
        let start = match align {
            Align::Left => TEXT_MARGIN,
            Align::Right => self.cols.saturating_sub(len + TEXT_MARGIN),
        };
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i, row, ch);
        }
    }
}
