//! Triforce geometry
//!
//! Three isosceles triangles, each widening by one column per side per row:
//! - top: apex at (cy, cx)
//! - bottom-left: apex at (cy + SIZE, cx - SIZE)
//! - bottom-right: apex at (cy + SIZE, cx + SIZE)
//!
//! Triangles are tested in that order and the first one whose row band
//! holds the row decides. The two bottom triangles share a band, so the
//! bottom-left one always decides there and the bottom-right one stays dark.
//!
//! Coordinates are signed so neighbour probes off the canvas edge (row -1,
//! col -1, ...) are ordinary inputs that simply fall outside every band.

use crate::config::Config;

/// Isosceles triangle with its apex on top, `height` rows tall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    apex_row: isize,
    apex_col: isize,
    height: isize,
}

impl Triangle {
    /// Triangle with apex at (`apex_row`, `apex_col`)
    pub const fn new(apex_row: isize, apex_col: isize, height: isize) -> Self {
        Self {
            apex_row,
            apex_col,
            height,
        }
    }

    /// Apex position as (row, col)
    pub fn apex(&self) -> (isize, isize) {
        (self.apex_row, self.apex_col)
    }

    /// True if `row` lies in this triangle's band of rows
    #[inline]
    pub fn in_band(&self, row: isize) -> bool {
        self.apex_row <= row && row < self.apex_row + self.height
    }

    /// Band test, then column span test
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        if !self.in_band(row) {
            return false;
        }
        let span = row - self.apex_row;
        self.apex_col - span <= col && col <= self.apex_col + span
    }
}

/// The three-triangle glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triforce {
    top: Triangle,
    bottom_left: Triangle,
    bottom_right: Triangle,
}

impl Triforce {
    /// Lay out the glyph for a configuration
    pub fn new(config: &Config) -> Self {
        let cx = config.center_col() as isize;
        let cy = config.top_row() as isize;
        let size = config.size() as isize;

        Self {
            top: Triangle::new(cy, cx, size),
            bottom_left: Triangle::new(cy + size, cx - size, size),
            bottom_right: Triangle::new(cy + size, cx + size, size),
        }
    }

    /// Sub-triangles in test order: top, bottom-left, bottom-right
    pub fn triangles(&self) -> [Triangle; 3] {
        [self.top, self.bottom_left, self.bottom_right]
    }

    /// Is (`row`, `col`) inside the glyph?
    ///
    /// The first triangle whose band holds `row` answers; later triangles in
    /// the same band are never consulted. Never fails: any coordinate, on or
    /// off the canvas, is either inside or not.
    #[inline]
    pub fn inside(&self, row: isize, col: isize) -> bool {
        self.triangles()
            .iter()
            .find(|triangle| triangle.in_band(row))
            .is_some_and(|triangle| triangle.contains(row, col))
    }

    /// True if the pixel and its four axis neighbours are all inside
    #[inline]
    pub fn is_interior(&self, row: isize, col: isize) -> bool {
        self.inside(row, col)
            && self.inside(row - 1, col)
            && self.inside(row + 1, col)
            && self.inside(row, col - 1)
            && self.inside(row, col + 1)
    }
}
