//! Grid geometry
//!
//! Maps a viewport onto a square board of whole cells. The board is sized
//! from the smaller viewport side, the cell size is an integer division of
//! that side by the desired column count, and the column/row counts are
//! derived back from the cell size so no partial cells appear at the edges.
//!
//! Canvas layout (border inset on every side):
//!
//! ```text
//! +--------------------------+
//! | border                   |
//! |   +------------------+   |
//! |   | cols x cell_size |   |
//! |   +------------------+   |
//! +--------------------------+
//! ```

use glam::IVec2;

use crate::settings::Settings;

/// Largest board side in px; browsers refuse bigger canvases anyway
const MAX_BOARD_PX: f64 = 16384.0;

/// A grid position in (column, row) cell coordinates
pub type Cell = IVec2;

/// Board dimensions in cells and their pixel mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Number of columns (>= 1)
    pub cols: i32,
    /// Number of rows (>= 1)
    pub rows: i32,
    /// Side of one cell in px (>= 1)
    pub cell_size: u32,
    /// Border inset in px
    pub border: u32,
}

impl GridGeometry {
    pub fn new(cols: i32, rows: i32, cell_size: u32, border: u32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            cell_size: cell_size.max(1),
            border,
        }
    }

    /// Derive the board from viewport dimensions (CSS px)
    ///
    /// Pure and idempotent: the same viewport always yields the same board.
    /// Degenerate viewports collapse to a single 1 px cell instead of an
    /// empty grid.
    pub fn from_viewport(width: f64, height: f64, settings: &Settings) -> Self {
        let side = (width.min(height) * settings.viewport_fill).clamp(0.0, MAX_BOARD_PX);
        let inset = 2.0 * settings.border_width as f64;
        let inner = (side - inset).max(0.0);

        let target_columns = settings.target_columns.max(1) as f64;
        let cell_size = ((inner / target_columns).floor() as u32).max(1);
        let count = (inner / cell_size as f64).floor() as i32;

        Self::new(count, count, cell_size, settings.border_width)
    }

    /// Canvas size in px, border included
    pub fn canvas_size(&self) -> (u32, u32) {
        let side = |cells: i32| {
            (cells as u32)
                .saturating_mul(self.cell_size)
                .saturating_add(self.border.saturating_mul(2))
        };
        (side(self.cols), side(self.rows))
    }

    /// Top-left pixel of a cell on the canvas
    #[inline]
    pub fn cell_origin(&self, cell: Cell) -> (f64, f64) {
        let size = self.cell_size as f64;
        let border = self.border as f64;
        (
            cell.x as f64 * size + border,
            cell.y as f64 * size + border,
        )
    }

    /// Whether the cell lies on the board
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Center cell, used as the snake's starting point
    pub fn center(&self) -> Cell {
        IVec2::new(self.cols / 2, self.rows / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_viewport() {
        let settings = Settings::default();
        let geo = GridGeometry::from_viewport(1280.0, 800.0, &settings);

        // 800 * 0.98 = 784, minus 12 px of border = 772, / 20 = 38 px cells
        assert_eq!(geo.cell_size, 38);
        assert_eq!(geo.cols, 20);
        assert_eq!(geo.rows, 20);
        assert_eq!(geo.canvas_size(), (20 * 38 + 12, 20 * 38 + 12));
    }

    #[test]
    fn test_canvas_is_exact_multiple_of_cell() {
        let settings = Settings::default();
        for (w, h) in [(320.0, 568.0), (375.0, 667.0), (1920.0, 1080.0), (97.0, 4000.0)] {
            let geo = GridGeometry::from_viewport(w, h, &settings);
            let (cw, ch) = geo.canvas_size();
            assert_eq!((cw - 2 * geo.border) % geo.cell_size, 0);
            assert_eq!((ch - 2 * geo.border) % geo.cell_size, 0);
            assert!(cw as f64 <= w.min(h));
        }
    }

    #[test]
    fn test_tiny_viewport_is_clamped() {
        let settings = Settings::default();
        let geo = GridGeometry::from_viewport(5.0, 5.0, &settings);
        assert_eq!(geo.cell_size, 1);
        assert_eq!(geo.cols, 1);
        assert_eq!(geo.rows, 1);

        let geo = GridGeometry::from_viewport(0.0, -10.0, &settings);
        assert_eq!((geo.cols, geo.rows, geo.cell_size), (1, 1, 1));

        let geo = GridGeometry::from_viewport(f64::NAN, f64::NAN, &settings);
        assert_eq!((geo.cols, geo.rows, geo.cell_size), (1, 1, 1));
    }

    #[test]
    fn test_huge_viewport_is_capped() {
        let g = GridGeometry::from_viewport(1e12, 1e12, &Settings::default());
        assert_eq!(g.cols, 20);
        assert_eq!(g.cell_size, 818);
        assert_eq!(g.canvas_size(), (16372, 16372));

        let wide = GridGeometry::new(i32::MAX, 1, u32::MAX, u32::MAX);
        assert_eq!(wide.canvas_size().0, u32::MAX);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let settings = Settings::default();
        let a = GridGeometry::from_viewport(414.0, 896.0, &settings);
        let b = GridGeometry::from_viewport(414.0, 896.0, &settings);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_border() {
        let settings = Settings {
            border_width: 0,
            viewport_fill: 1.0,
            ..Default::default()
        };
        let geo = GridGeometry::from_viewport(400.0, 400.0, &settings);
        assert_eq!(geo.cell_size, 20);
        assert_eq!(geo.canvas_size(), (400, 400));
        assert_eq!(geo.cell_origin(IVec2::new(0, 0)), (0.0, 0.0));
        assert_eq!(geo.cell_origin(IVec2::new(3, 2)), (60.0, 40.0));
    }

    #[test]
    fn test_cell_origin_includes_border() {
        let geo = GridGeometry::new(10, 10, 16, 6);
        assert_eq!(geo.cell_origin(IVec2::new(0, 0)), (6.0, 6.0));
        assert_eq!(geo.cell_origin(IVec2::new(2, 1)), (38.0, 22.0));
    }

    #[test]
    fn test_contains() {
        let geo = GridGeometry::new(10, 8, 16, 0);
        assert!(geo.contains(IVec2::new(0, 0)));
        assert!(geo.contains(IVec2::new(9, 7)));
        assert!(!geo.contains(IVec2::new(10, 0)));
        assert!(!geo.contains(IVec2::new(0, 8)));
        assert!(!geo.contains(IVec2::new(-1, 3)));
        assert_eq!(geo.area(), 80);
        assert_eq!(geo.center(), IVec2::new(5, 4));
    }
}
