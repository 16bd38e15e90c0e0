//! Mutable character canvas the render passes draw into.

use crate::{
    core::color::{AnsiCode, push_colorized},
    render::glyph::{Glyph, Symbols},
};

/// One canvas position.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Cell {
    #[default]
    Blank,
    /// A whole y-axis label. It fills a single cell; the cells after it keep
    /// their own content, so long labels push the row to the right.
    Label(String),
    Glyph { glyph: Glyph, color: AnsiCode },
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Colour of a tinted glyph; `None` for labels and untinted cells.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Option<AnsiCode> {
        match self {
            Self::Glyph { color, .. } if !color.is_none() => Some(*color),
            _ => None,
        }
    }
}

/// `height × width` cells, row-major, row 0 at the top.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Blank; width]; height],
            width,
        }
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    #[inline]
    pub fn set_glyph(&mut self, row: usize, col: usize, glyph: Glyph, color: AnsiCode) {
        self.set(row, col, Cell::Glyph { glyph, color });
    }

    /// Flatten to text, one line per row, trailing blanks stripped.
    #[must_use]
    pub fn render(&self, symbols: &Symbols) -> String {
        let mut out = String::with_capacity(self.height() * (self.width + 1) * 3);
        let mut line = String::with_capacity(self.width * 3);
        for (i, row) in self.cells.iter().enumerate() {
            line.clear();
            for cell in row {
                match cell {
                    Cell::Blank => line.push(' '),
                    Cell::Label(text) => line.push_str(text),
                    Cell::Glyph { glyph, color } => {
                        push_colorized(&mut line, color, symbols.get(*glyph));
                    }
                }
            }
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line.trim_end());
        }
        out
    }
}
