//! Maps the logical playfield onto terminal cells.
//!
//! The playfield has its origin bottom-left with y growing upward; the
//! terminal has row 0 at the top.  Only the terminal size changes at
//! runtime; the playfield size is fixed for the lifetime of a projection.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projection {
    pub cols: u16,
    pub rows: u16,
    pub width: i32,
    pub height: i32,
}

impl Projection {
    pub fn new(cols: u16, rows: u16, width: i32, height: i32) -> Self {
        Projection { cols, rows, width, height }
    }

    /// Follow a terminal resize.  Game state is never touched.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Cell holding the playfield point `(x, y)`, or `None` when the point is
    /// outside the playfield or the terminal has no area.
    pub fn to_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if self.cols == 0 || self.rows == 0 || self.width <= 0 || self.height <= 0 {
            return None;
        }
        if x < 0 || x > self.width || y < 0 || y > self.height {
            return None;
        }
        let col = (x as i64 * self.cols as i64 / self.width as i64).min(self.cols as i64 - 1);
        let row = ((self.height - y) as i64 * self.rows as i64 / self.height as i64)
            .min(self.rows as i64 - 1);
        Some((col as u16, row as u16))
    }

    /// Cell range covering the playfield box `[x0, x1] × [y0, y1]`, clipped to
    /// the playfield.  Returned as `(left, top, right, bottom)`, inclusive.
    pub fn to_cell_rect(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(u16, u16, u16, u16)> {
        let cx0 = x0.max(0);
        let cx1 = x1.min(self.width);
        let cy0 = y0.max(0);
        let cy1 = y1.min(self.height);
        if cx0 > cx1 || cy0 > cy1 {
            return None;
        }
        let (left, bottom) = self.to_cell(cx0, cy0)?;
        let (right, top) = self.to_cell(cx1, cy1)?;
        Some((left, top, right, bottom))
    }
}
