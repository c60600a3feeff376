//! Row-major partition of a source image into grid cells
//!
//! Cell sizes use floor division, so when the source dimensions are not
//! multiples of the grid dimension the trailing right/bottom pixels belong
//! to no cell.

use super::Region;

/// Number of rows and columns in an avatar sheet
pub const GRID_DIMENSION: u32 = 3;

/// Total number of cells in an avatar sheet
pub const CELL_COUNT: usize = (GRID_DIMENSION * GRID_DIMENSION) as usize;

/// Cell geometry for one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Width of every cell in pixels
    pub cell_width: u32,
    /// Height of every cell in pixels
    pub cell_height: u32,
}

impl GridLayout {
    /// Compute the layout for a source image of the given dimensions
    pub fn for_image(width: u32, height: u32) -> Self {
        GridLayout {
            cell_width: width / GRID_DIMENSION,
            cell_height: height / GRID_DIMENSION,
        }
    }

    /// Width of the source covered by cells
    pub fn covered_width(&self) -> u32 {
        self.cell_width * GRID_DIMENSION
    }

    /// Height of the source covered by cells
    pub fn covered_height(&self) -> u32 {
        self.cell_height * GRID_DIMENSION
    }

    /// Whether the cells have at least one pixel each
    pub fn has_pixels(&self) -> bool {
        !self.cell(0, 0).is_empty()
    }

    /// Region of the cell at the given row and column
    pub fn cell(&self, row: u32, col: u32) -> Region {
        Region::new(
            col * self.cell_width,
            row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// All cells in row-major order, paired with their 1-based number
    pub fn cells(&self) -> impl Iterator<Item = (usize, Region)> + '_ {
        (0..GRID_DIMENSION)
            .flat_map(move |row| (0..GRID_DIMENSION).map(move |col| self.cell(row, col)))
            .enumerate()
            .map(|(i, region)| (i + 1, region))
    }
}
