//! Immutable tree operations.
//!
//! Every mutation returns a new root. Only the path from the root to the
//! changed node is reallocated; every other subtree is shared with the input
//! through its `Arc`. A target id that is not in the tree leaves the tree
//! untouched and the original root is returned.

use std::sync::Arc;

use super::types::{Cell, CellId, SplitDirection};

/// Depth-first pre-order search for `target`.
pub fn find_cell<'a>(root: &'a Cell, target: &CellId) -> Option<&'a Cell> {
    cells(root).map(|(_, cell)| cell).find(|cell| cell.id == *target)
}

/// Replace the cell with id `target` by `updater(cell)`.
///
/// The updater must keep the id; a changed id is put back. Ancestors of the
/// match are rebuilt, everything else is shared.
pub fn update_cell<F>(root: &Arc<Cell>, target: &CellId, updater: F) -> Arc<Cell>
where
    F: FnOnce(&Cell) -> Cell,
{
    let mut updater = Some(updater);
    let updated = rebuild(root, target, &mut updater);
    if updater.is_some() {
        tracing::warn!(cell = %target, "update target not found");
    }
    updated
}

fn rebuild<F>(node: &Arc<Cell>, target: &CellId, updater: &mut Option<F>) -> Arc<Cell>
where
    F: FnOnce(&Cell) -> Cell,
{
    if node.id == *target
        && let Some(apply) = updater.take()
    {
        let mut replacement = apply(node);
        if replacement.id != node.id {
            tracing::warn!(
                expected = %node.id,
                found = %replacement.id,
                "updater changed cell id, restoring"
            );
            replacement.id = node.id.clone();
        }
        return Arc::new(replacement);
    }

    let Some(split) = &node.split else {
        return Arc::clone(node);
    };
    let [first, second] = &split.children;
    let new_first = rebuild(first, target, updater);
    // Ids are unique, so once the updater is spent the rest is untouched.
    let new_second = if updater.is_some() {
        rebuild(second, target, updater)
    } else {
        Arc::clone(second)
    };
    if Arc::ptr_eq(&new_first, first) && Arc::ptr_eq(&new_second, second) {
        return Arc::clone(node);
    }

    let mut parent = Cell::clone(node);
    if let Some(split) = parent.split.as_mut() {
        split.children = [new_first, new_second];
    }
    Arc::new(parent)
}

/// Remove the subtree with id `target`.
///
/// The parent of the removed cell collapses back into a leaf that keeps its
/// own content; the removed cell's sibling goes with it. The root itself is
/// never matched.
pub fn delete_cell(root: &Arc<Cell>, target: &CellId) -> Arc<Cell> {
    let deleted = remove(root, target);
    if Arc::ptr_eq(&deleted, root) {
        tracing::warn!(cell = %target, "delete target not found");
    }
    deleted
}

fn remove(node: &Arc<Cell>, target: &CellId) -> Arc<Cell> {
    let Some(split) = &node.split else {
        return Arc::clone(node);
    };
    if split.children.iter().any(|child| child.id == *target) {
        return Arc::new(node.collapsed());
    }

    let [first, second] = &split.children;
    let new_first = remove(first, target);
    let new_second = if Arc::ptr_eq(&new_first, first) {
        remove(second, target)
    } else {
        Arc::clone(second)
    };
    if Arc::ptr_eq(&new_first, first) && Arc::ptr_eq(&new_second, second) {
        return Arc::clone(node);
    }

    let mut parent = Cell::clone(node);
    if let Some(split) = parent.split.as_mut() {
        split.children = [new_first, new_second];
    }
    Arc::new(parent)
}

/// Split `target` into `first` and `second`, keeping its content on the
/// now-internal node. An existing split is replaced.
pub fn split_cell(
    root: &Arc<Cell>,
    target: &CellId,
    direction: SplitDirection,
    first: Cell,
    second: Cell,
) -> Arc<Cell> {
    update_cell(root, target, |cell| cell.split_into(direction, first, second))
}

/// Pre-order iterator over a tree, yielding each cell with its depth.
pub struct Cells<'a> {
    stack: Vec<(usize, &'a Cell)>,
}

impl<'a> Iterator for Cells<'a> {
    type Item = (usize, &'a Cell);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, cell) = self.stack.pop()?;
        if let Some([first, second]) = cell.children() {
            self.stack.push((depth + 1, &**second));
            self.stack.push((depth + 1, &**first));
        }
        Some((depth, cell))
    }
}

/// Walk `root` depth-first, parents before children, first child first.
pub fn cells(root: &Cell) -> Cells<'_> {
    Cells {
        stack: vec![(0, root)],
    }
}

pub fn cell_count(root: &Cell) -> usize {
    cells(root).count()
}

/// Number of levels below the root; a lone root has depth 0.
pub fn depth(root: &Cell) -> usize {
    cells(root).map(|(depth, _)| depth).max().unwrap_or(0)
}

/// Ids of the displayed (leaf) cells, left to right.
pub fn leaf_ids(root: &Cell) -> Vec<CellId> {
    cells(root)
        .filter(|(_, cell)| cell.is_leaf())
        .map(|(_, cell)| cell.id.clone())
        .collect()
}
