//! Terminal rendering of the grid.
//!
//! - [`render`]: Draw the grid (and the content panel when a cell is open)
//! - [`outline`]: Indented list of cell ids
//! - [`style`]: Mapping from cell formatting to terminal styles

pub mod style;

mod render;

pub use render::{outline, render, render_to_lines, split_panel_columns};

pub const CANVAS_WIDTH_PERCENT: u16 = 65;
pub const PANEL_WIDTH_PERCENT: u16 = 35;
/// Characters of a cell id shown in its border.
pub const ID_LABEL_LEN: usize = 8;

#[cfg(test)]
mod tests;
