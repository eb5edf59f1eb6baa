use crate::app::{Editor, Message};
use crate::grid::{GridStructure, mutate};

impl<F> Editor<F>
where
    F: FnMut(&GridStructure),
{
    /// Hand the committed grid to the host after every structural message.
    pub(super) fn handle_message_side_effects(&mut self, msg: &Message) {
        if !msg.is_mutation() {
            return;
        }
        tracing::debug!(
            message = msg.kind(),
            cells = mutate::cell_count(&self.model.grid.root_cell),
            "propagating grid change"
        );
        (self.on_change)(&self.model.grid);
    }
}
