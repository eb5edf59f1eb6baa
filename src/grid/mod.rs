//! The layout tree.
//!
//! A [`GridStructure`] wraps a root [`Cell`]. Cells are either leaves that
//! display their [`CellContent`], or splits holding exactly two children laid
//! out in a [`SplitDirection`]. Trees are immutable: [`mutate`] functions
//! return new roots that share every untouched subtree with the input.

mod ids;
pub mod mutate;
mod types;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use mutate::{cells, delete_cell, find_cell, split_cell, update_cell};
pub use types::{
    Cell, CellContent, CellId, ContentElement, DEFAULT_CELL_PADDING, FontSize, FontStyle,
    FontWeight, GridStructure, Padding, ShapeError, Split, SplitDirection, TextAlign,
    TextDecoration, TextFormat,
};
