#![forbid(unsafe_code)]

//! Paint boundary.
//!
//! Layout elements draw through the [`Sink`] trait. The real renderer lives
//! outside this workspace; [`CellBuffer`] is a plain `char` grid that
//! implements the trait for tests and demos.
//!
//! Cells are stored in row-major order: `index = y * width + x`.

use crate::geometry::Rect;

/// A drawing surface addressed in cells.
pub trait Sink {
    /// The writable region. Writes outside it are dropped.
    fn bounds(&self) -> Rect;

    /// Write one character at (x, y).
    fn put(&mut self, x: u16, y: u16, ch: char);

    /// Restrict subsequent writes to `rect` until the matching
    /// [`Sink::pop_clip`]. Sinks without clipping may ignore this.
    fn push_clip(&mut self, _rect: Rect) {}

    /// Undo the most recent [`Sink::push_clip`].
    fn pop_clip(&mut self) {}

    /// Fill `area` with `ch`.
    fn fill(&mut self, area: Rect, ch: char) {
        let clipped = self.bounds().intersection(&area);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.put(x, y, ch);
            }
        }
    }

    /// Write `text` starting at (x, y), one `char` per cell, stopping at the
    /// right edge of [`Sink::bounds`].
    fn print(&mut self, x: u16, y: u16, text: &str) {
        let right = self.bounds().right();
        let mut col = x;
        for ch in text.chars() {
            if col >= right {
                break;
            }
            self.put(col, y, ch);
            col = col.saturating_add(1);
        }
    }
}

/// A fixed-size grid of characters with a scissor stack.
///
/// # Example
///
/// ```
/// use trellis_core::geometry::Rect;
/// use trellis_core::sink::{CellBuffer, Sink};
///
/// let mut buf = CellBuffer::new(4, 2);
/// buf.fill(Rect::new(1, 0, 2, 1), '#');
/// assert_eq!(buf.to_lines(), vec![" ## ", "    "]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
    scissor_stack: Vec<Rect>,
}

impl CellBuffer {
    /// Create a buffer filled with spaces.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
            scissor_stack: vec![Rect::from_size(width, height)],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Character at (x, y), `None` when out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Reset every cell to a space.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Current effective scissor region.
    #[inline]
    pub fn current_scissor(&self) -> Rect {
        self.scissor_stack
            .last()
            .copied()
            .unwrap_or_else(|| Rect::from_size(self.width, self.height))
    }

    /// Scissor stack depth (1 when nothing is pushed).
    #[inline]
    pub fn scissor_depth(&self) -> usize {
        self.scissor_stack.len()
    }

    /// Rows as strings, for assertions.
    pub fn to_lines(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height as usize];
        }
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl Sink for CellBuffer {
    fn bounds(&self) -> Rect {
        self.current_scissor()
    }

    fn put(&mut self, x: u16, y: u16, ch: char) {
        if !self.current_scissor().contains(x, y) {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ch;
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        let intersected = self.current_scissor().intersection(&rect);
        self.scissor_stack.push(intersected);
    }

    fn pop_clip(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }
}
