// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. grid::GridStructure)
    clippy::module_name_repetitions
)]

//! # Gridmaker
//!
//! A recursive grid-cell layout editor for email and content templates.
//!
//! A layout is a binary tree of cells. Leaves carry content (title,
//! subtitle, description, background, padding); split cells divide their
//! area between exactly two children, side by side or stacked.
//!
//! ## Architecture
//!
//! Gridmaker uses The Elm Architecture (TEA) pattern:
//! - **Model**: The layout tree plus selection state
//! - **Message**: Split, delete, edit content, reset, select
//! - **Update**: Pure state transitions over an immutable tree
//! - **View**: Render to a terminal buffer
//!
//! Every structural change is handed to the host through a callback as soon
//! as it is applied.
//!
//! ## Modules
//!
//! - [`grid`]: Tree model and immutable tree operations
//! - [`app`]: Editor state, messages and change propagation
//! - [`panel`]: Field-by-field content editing
//! - [`ui`]: Terminal rendering
//! - [`store`]: JSON file persistence
//! - [`config`]: Saved command-line defaults

pub mod app;
pub mod config;
pub mod grid;
pub mod panel;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{Editor, Message, Model};
    pub use crate::grid::{Cell, CellContent, CellId, GridStructure, SplitDirection};
    pub use crate::panel::{FieldEdit, TextSlot};
}
