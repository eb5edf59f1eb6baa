use crate::grid::{Cell, CellId, GridStructure, IdGenerator, UuidIds, find_cell};

/// The complete editor state.
///
/// All state lives here - no global or scattered state. The grid is the only
/// part the host sees; the two ids are local UI state.
pub struct Model {
    /// Current layout tree
    pub grid: GridStructure,
    /// Cell highlighted in the canvas
    pub selected_cell_id: Option<CellId>,
    /// Cell whose content panel is open
    pub editing_cell_id: Option<CellId>,
    /// Source of ids for cells created by splits
    ids: Box<dyn IdGenerator>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("root", &self.grid.root_cell.id)
            .field("selected_cell_id", &self.selected_cell_id)
            .field("editing_cell_id", &self.editing_cell_id)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model from the host's initial value, or a lone empty root.
    pub fn new(initial: Option<GridStructure>) -> Self {
        Self {
            grid: initial.unwrap_or_default(),
            selected_cell_id: None,
            editing_cell_id: None,
            ids: Box::new(UuidIds),
        }
    }

    /// Use `ids` for every cell created from now on.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn selected_cell(&self) -> Option<&Cell> {
        self.selected_cell_id
            .as_ref()
            .and_then(|id| find_cell(&self.grid.root_cell, id))
    }

    /// The cell open in the panel, if it still exists.
    pub fn editing_cell(&self) -> Option<&Cell> {
        self.editing_cell_id
            .as_ref()
            .and_then(|id| find_cell(&self.grid.root_cell, id))
    }

    pub(super) fn fresh_cell(&mut self) -> Cell {
        Cell::fresh(self.ids.as_mut())
    }

    /// Replace the whole tree with a lone empty root.
    pub(super) fn reset_grid(&mut self) {
        self.grid = GridStructure::empty();
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(None)
    }
}
