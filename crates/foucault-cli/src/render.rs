//! Text canvas for drawing a position history.
//!
//! A [`Canvas`] is owned by whoever draws: the render command creates one per
//! invocation and the player keeps one for the length of a run. Nothing about
//! drawing is process-wide.
//!
//! The plot window spans `[-extent, extent]` on both axes with `y` pointing
//! up. With the default extent of 3 and roughly twice as many columns as
//! rows, the unit disc looks round in a typical terminal font.

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};

/// Colour of the path and the bob.
pub const PATH_COLOR: Color = Color::Rgb {
    r: 0xFF,
    g: 0x4B,
    b: 0x4B,
};

/// Half-width of the plot window in model units.
pub const DEFAULT_EXTENT: f64 = 3.0;

const TRAIL: char = '*';
const BOB: char = 'O';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Axis(char),
    Trail,
    Bob,
}

/// A character grid the pendulum path is drawn onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    extent: f64,
    color: bool,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Creates a canvas of `width` columns by `height` rows, not counting
    /// the border. Both are clamped to at least 3.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let width = usize::from(width.max(3));
        let height = usize::from(height.max(3));
        let mut canvas = Self {
            width,
            height,
            extent: DEFAULT_EXTENT,
            color: false,
            cells: vec![Cell::Empty; width * height],
        };
        canvas.clear();
        canvas
    }

    /// Sets the half-width of the plot window. Non-positive values are ignored.
    #[must_use]
    pub fn with_extent(mut self, extent: f64) -> Self {
        if extent.is_finite() && extent > 0.0 {
            self.extent = extent;
        }
        self
    }

    /// Enables or disables ANSI colour in [`Canvas::lines`].
    #[must_use]
    pub const fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Maps a model position to `(column, row)`, or `None` if it falls
    /// outside the window.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let span = 2.0 * self.extent;
        let col = ((x + self.extent) / span * (self.width - 1) as f64).round();
        let row = ((self.extent - y) / span * (self.height - 1) as f64).round();
        let in_range = |v: f64, len: usize| v.is_finite() && v >= 0.0 && v <= (len - 1) as f64;
        (in_range(col, self.width) && in_range(row, self.height))
            .then(|| (col as usize, row as usize))
    }

    /// Resets the grid to empty with the axes drawn through the origin.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        let mid_row = (self.height - 1) / 2;
        let mid_col = (self.width - 1) / 2;
        for col in 0..self.width {
            self.set(col, mid_row, Cell::Axis('─'));
        }
        for row in 0..self.height {
            self.set(mid_col, row, Cell::Axis('│'));
        }
        self.set(mid_col, mid_row, Cell::Axis('┼'));
    }

    /// Redraws the canvas with the given history: consecutive points joined
    /// by straight segments, the last one marked as the bob.
    pub fn draw(&mut self, xs: &[f64], ys: &[f64]) {
        self.clear();

        let mut prev: Option<(usize, usize)> = None;
        for (&x, &y) in xs.iter().zip(ys) {
            let cell = self.to_cell(x, y);
            match (prev, cell) {
                (Some(a), Some(b)) => self.segment(a, b),
                (None, Some(b)) => self.set(b.0, b.1, Cell::Trail),
                _ => {}
            }
            prev = cell;
        }

        if let (Some(&x), Some(&y)) = (xs.last(), ys.last()) {
            if let Some((col, row)) = self.to_cell(x, y) {
                self.set(col, row, Cell::Bob);
            }
        }
    }

    /// Character at `(column, row)`, ignoring colour.
    #[must_use]
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(match self.cells[row * self.width + col] {
            Cell::Empty => ' ',
            Cell::Axis(c) => c,
            Cell::Trail => TRAIL,
            Cell::Bob => BOB,
        })
    }

    /// The canvas as bordered text lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let border = "─".repeat(self.width);
        let mut lines = Vec::with_capacity(self.height + 2);
        lines.push(format!("┌{border}┐"));
        for row in 0..self.height {
            let mut line = String::with_capacity(self.width + 2);
            line.push('│');
            for col in 0..self.width {
                self.write_cell(&mut line, self.cells[row * self.width + col]);
            }
            line.push('│');
            lines.push(line);
        }
        lines.push(format!("└{border}┘"));
        lines
    }

    /// The canvas as a single newline-separated string.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    fn write_cell(&self, out: &mut String, cell: Cell) {
        let _ = match (cell, self.color) {
            (Cell::Empty, _) => write!(out, " "),
            (Cell::Axis(c), false) => write!(out, "{c}"),
            (Cell::Axis(c), true) => write!(out, "{}", c.dark_grey()),
            (Cell::Trail, false) => write!(out, "{TRAIL}"),
            (Cell::Trail, true) => write!(out, "{}", TRAIL.with(PATH_COLOR)),
            (Cell::Bob, false) => write!(out, "{BOB}"),
            (Cell::Bob, true) => write!(out, "{}", BOB.with(PATH_COLOR).bold()),
        };
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = cell;
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn segment(&mut self, from: (usize, usize), to: (usize, usize)) {
        let (mut x0, mut y0) = (from.0 as isize, from.1 as isize);
        let (x1, y1) = (to.0 as isize, to.1 as isize);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0 as usize, y0 as usize, Cell::Trail);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}
