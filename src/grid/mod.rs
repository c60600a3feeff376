//! Grid geometry for avatar sheets
//!
//! This module computes the crop rectangles of the nine cells of a 3x3
//! avatar sheet.

mod region;
mod layout;

pub use region::Region;
pub use layout::{GridLayout, CELL_COUNT, GRID_DIMENSION};
