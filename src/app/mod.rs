//! Editor state and controller.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: All possible events
//! - [`update`]: Pure function for state transitions
//! - [`Editor`]: Owns the model and the host's change callback

mod effects;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use crate::grid::{CellContent, CellId, GridStructure, IdGenerator, SplitDirection};
use crate::panel::FieldEdit;

/// A mounted editor.
///
/// Every structural message is applied with [`update`] and the resulting
/// grid is passed to `on_change` right away, once per message. Selection
/// messages never reach the host.
pub struct Editor<F>
where
    F: FnMut(&GridStructure),
{
    model: Model,
    on_change: F,
}

impl<F> Editor<F>
where
    F: FnMut(&GridStructure),
{
    /// Mount an editor on the host's initial value, or an empty root.
    pub fn new(initial: Option<GridStructure>, on_change: F) -> Self {
        Self {
            model: Model::new(initial),
            on_change,
        }
    }

    /// Use `ids` for cells created by splits.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.model = self.model.with_id_generator(ids);
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn grid(&self) -> &GridStructure {
        &self.model.grid
    }

    /// Apply a message and run its side effects.
    pub fn dispatch(&mut self, msg: Message) {
        let model = std::mem::take(&mut self.model);
        self.model = update(model, msg.clone());
        self.handle_message_side_effects(&msg);
    }

    pub fn split(&mut self, cell_id: CellId, direction: SplitDirection) {
        self.dispatch(Message::Split(cell_id, direction));
    }

    pub fn delete(&mut self, cell_id: CellId) {
        self.dispatch(Message::Delete(cell_id));
    }

    pub fn save_content(&mut self, cell_id: CellId, content: CellContent) {
        self.dispatch(Message::SaveContent(cell_id, content));
    }

    pub fn edit_field(&mut self, cell_id: CellId, edit: FieldEdit) {
        self.dispatch(Message::EditField(cell_id, edit));
    }

    pub fn reset(&mut self) {
        self.dispatch(Message::Reset);
    }

    pub fn select(&mut self, cell_id: Option<CellId>) {
        self.dispatch(Message::Select(cell_id));
    }

    pub fn edit(&mut self, cell_id: Option<CellId>) {
        self.dispatch(Message::Edit(cell_id));
    }

    /// Unmount, returning the final state.
    pub fn into_model(self) -> Model {
        self.model
    }
}

impl<F> std::fmt::Debug for Editor<F>
where
    F: FnMut(&GridStructure),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
