//! Colored text grid the terminal surface draws into.
//!
//! A frame is built entirely in memory, then flushed to the terminal in one
//! pass. Tests read frames back with [`TextGrid::to_lines`].

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::keypad::Area;
use crate::theme::Rgb;

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character shown
    pub ch: char,
    /// Foreground color
    pub fg: Rgb,
    /// Background color
    pub bg: Rgb,
    /// Bold text
    pub bold: bool,
}

impl Cell {
    /// A blank cell on the given background
    #[must_use]
    pub const fn blank(fg: Rgb, bg: Rgb) -> Self {
        Self {
            ch: ' ',
            fg,
            bg,
            bold: false,
        }
    }
}

/// Text style for writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Rgb,
    /// Background color
    pub bg: Rgb,
    /// Bold text
    pub bold: bool,
}

impl Style {
    /// Plain style
    #[must_use]
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg, bold: false }
    }

    /// Same colors, bold
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Row-major grid of colored cells
#[derive(Debug, Clone)]
pub struct TextGrid {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl TextGrid {
    /// Creates a grid filled with blank cells
    #[must_use]
    pub fn new(width: u16, height: u16, fill: Cell) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![fill; size],
            width,
            height,
        }
    }

    /// Grid width
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whole grid as an area
    #[must_use]
    pub fn area(&self) -> Area {
        Area::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Gets the cell at (x, y)
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Sets the cell at (x, y); out-of-range writes are dropped
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Paints an area with blanks of the given background
    pub fn fill(&mut self, area: Area, style: Style) {
        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                self.set(x, y, Cell::blank(style.fg, style.bg));
            }
        }
    }

    /// Writes a string starting at (x, y), truncated at the grid edge
    pub fn write_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        let mut pos_x = x;
        for ch in s.chars() {
            if pos_x >= self.width {
                break;
            }
            self.set(
                pos_x,
                y,
                Cell {
                    ch,
                    fg: style.fg,
                    bg: style.bg,
                    bold: style.bold,
                },
            );
            pos_x += 1;
        }
    }

    /// Writes a string flush with the right edge of `area`.
    /// Text wider than the area keeps its rightmost characters.
    pub fn write_right(&mut self, area: Area, y: u16, s: &str, style: Style) {
        let len = s.chars().count();
        let width = area.width as usize;
        let visible: String = s.chars().skip(len.saturating_sub(width)).collect();
        let x = area.x + (width - visible.chars().count()) as u16;
        self.write_str(x, y, &visible, style);
    }

    /// Writes a string centered in `area` on row `y`
    pub fn write_centered(&mut self, area: Area, y: u16, s: &str, style: Style) {
        let len = s.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(len) / 2;
        self.write_str(x, y, s, style);
    }

    /// Returns the characters of each row, trailing spaces trimmed
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| {
                let line: String = row.iter().map(|c| c.ch).collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Writes the grid to a terminal
    pub fn flush<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut current: Option<(Rgb, Rgb, bool)> = None;
        for y in 0..self.height {
            queue!(out, MoveTo(0, y))?;
            for x in 0..self.width {
                let Some(cell) = self.get(x, y) else {
                    continue;
                };
                let style = (cell.fg, cell.bg, cell.bold);
                if current != Some(style) {
                    queue!(
                        out,
                        SetAttribute(if cell.bold {
                            Attribute::Bold
                        } else {
                            Attribute::NormalIntensity
                        }),
                        SetForegroundColor(to_color(cell.fg)),
                        SetBackgroundColor(to_color(cell.bg))
                    )?;
                    current = Some(style);
                }
                queue!(out, Print(cell.ch))?;
            }
        }
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
        out.flush()
    }
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::hex(0x00_00_00);
    const WHITE: Rgb = Rgb::hex(0xff_ff_ff);

    fn grid(w: u16, h: u16) -> TextGrid {
        TextGrid::new(w, h, Cell::blank(WHITE, BLACK))
    }

    fn plain() -> Style {
        Style::new(WHITE, BLACK)
    }

    #[test]
    fn test_new_grid_is_blank() {
        let g = grid(4, 2);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 2);
        assert_eq!(g.to_lines(), vec!["", ""]);
    }

    #[test]
    fn test_write_str_truncates_at_edge() {
        let mut g = grid(5, 1);
        g.write_str(2, 0, "hello", plain());
        assert_eq!(g.to_lines(), vec!["  hel"]);
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        let mut g = grid(2, 2);
        g.set(5, 5, Cell::blank(WHITE, WHITE));
        assert!(g.get(5, 5).is_none());
    }

    #[test]
    fn test_write_right_aligns_and_keeps_tail() {
        let mut g = grid(8, 2);
        g.write_right(Area::new(0, 0, 8, 2), 0, "12", plain());
        g.write_right(Area::new(0, 0, 4, 2), 1, "123456", plain());
        assert_eq!(g.to_lines(), vec!["      12", "3456"]);
    }

    #[test]
    fn test_write_centered() {
        let mut g = grid(7, 1);
        g.write_centered(Area::new(0, 0, 7, 1), 0, "+/-", plain());
        assert_eq!(g.to_lines(), vec!["  +/-"]);
    }

    #[test]
    fn test_fill_sets_background() {
        let mut g = grid(3, 3);
        g.fill(Area::new(1, 1, 1, 1), Style::new(BLACK, WHITE));
        assert_eq!(g.get(1, 1).unwrap().bg, WHITE);
        assert_eq!(g.get(0, 0).unwrap().bg, BLACK);
    }

    #[test]
    fn test_bold_style() {
        let mut g = grid(1, 1);
        g.write_str(0, 0, "x", plain().bold());
        assert!(g.get(0, 0).unwrap().bold);
    }

    #[test]
    fn test_flush_writes_every_character() {
        let mut g = grid(3, 1);
        g.write_str(0, 0, "abc", plain());
        let mut out = Vec::new();
        g.flush(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('a'));
        assert!(text.contains("bc"));
    }
}
