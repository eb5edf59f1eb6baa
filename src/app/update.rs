use crate::app::Model;
use crate::grid::{CellContent, CellId, SplitDirection, delete_cell, split_cell, update_cell};
use crate::panel::{FieldEdit, apply_edit};

/// All possible events in the editor.
///
/// Structural messages change the grid and are propagated to the host;
/// selection messages only touch local UI state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Structure
    /// Split a cell into two fresh children
    Split(CellId, SplitDirection),
    /// Delete a cell; the root resets the tree instead
    Delete(CellId),
    /// Replace a cell's content wholesale
    SaveContent(CellId, CellContent),
    /// Merge one panel field into a cell's content
    EditField(CellId, FieldEdit),
    /// Start over with an empty root
    Reset,

    // Selection
    /// Highlight a cell (or clear the highlight)
    Select(Option<CellId>),
    /// Open a cell in the content panel (or close it)
    Edit(Option<CellId>),
}

impl Message {
    /// Whether the message produces a new grid for the host.
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::Select(_) | Self::Edit(_))
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Split(..) => "split",
            Self::Delete(_) => "delete",
            Self::SaveContent(..) => "save_content",
            Self::EditField(..) => "edit_field",
            Self::Reset => "reset",
            Self::Select(_) => "select",
            Self::Edit(_) => "edit",
        }
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here. Propagating
/// the new grid is a side effect and lives in the editor.
pub fn update(mut model: Model, msg: Message) -> Model {
    tracing::debug!(message = msg.kind(), "update");

    match msg {
        // Structure
        Message::Split(id, direction) => {
            let first = model.fresh_cell();
            let second = model.fresh_cell();
            model.grid.root_cell = split_cell(&model.grid.root_cell, &id, direction, first, second);
        }
        Message::Delete(id) => {
            if id.is_root() {
                model.reset_grid();
            } else {
                model.grid.root_cell = delete_cell(&model.grid.root_cell, &id);
            }
            model.selected_cell_id = None;
        }
        Message::SaveContent(id, content) => {
            model.grid.root_cell =
                update_cell(&model.grid.root_cell, &id, |cell| cell.with_content(content));
        }
        Message::EditField(id, edit) => {
            model.grid.root_cell = update_cell(&model.grid.root_cell, &id, |cell| {
                cell.with_content(apply_edit(&cell.content, edit))
            });
        }
        Message::Reset => {
            model.reset_grid();
            model.selected_cell_id = None;
            model.editing_cell_id = None;
        }

        // Selection
        Message::Select(id) => {
            model.selected_cell_id = id;
        }
        Message::Edit(id) => {
            model.editing_cell_id = id;
        }
    }

    model
}
