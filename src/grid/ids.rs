//! Cell id generation.
//!
//! The editor never creates ids on its own; it asks an [`IdGenerator`].
//! [`UuidIds`] is the default, [`SequentialIds`] gives reproducible ids.

use uuid::Uuid;

use super::mutate::cells;
use super::types::{Cell, CellId};

/// Source of fresh, unique cell ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> CellId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> CellId {
        CellId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids of the form `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    /// `None` once every number has been handed out.
    next: Option<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Some(1),
        }
    }

    /// Continue numbering past every `prefix-N` id already in the tree.
    pub fn continuing(prefix: impl Into<String>, root: &Cell) -> Self {
        let prefix = prefix.into();
        let marker = format!("{prefix}-");
        let last = cells(root)
            .filter_map(|(_, cell)| cell.id.as_str().strip_prefix(marker.as_str()))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max();
        Self {
            prefix,
            next: last.map_or(Some(1), |last| last.checked_add(1)),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("cell")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> CellId {
        match self.next {
            Some(next) => {
                self.next = next.checked_add(1);
                CellId::new(format!("{}-{next}", self.prefix))
            }
            None => {
                tracing::warn!(prefix = %self.prefix, "sequential ids exhausted, using a uuid");
                CellId::new(format!("{}-{}", self.prefix, Uuid::new_v4()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(!a.is_root());
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let mut ids = SequentialIds::new("n");
        assert_eq!(ids.next_id(), CellId::new("n-1"));
        assert_eq!(ids.next_id(), CellId::new("n-2"));
    }

    #[test]
    fn test_sequential_ids_continue_past_existing() {
        let root = Cell::empty(CellId::root()).split_into(
            crate::grid::SplitDirection::Horizontal,
            Cell::empty(CellId::new("cell-4")),
            Cell::empty(CellId::new("other-9")),
        );
        let mut ids = SequentialIds::continuing("cell", &root);
        assert_eq!(ids.next_id(), CellId::new("cell-5"));
    }

    #[test]
    fn test_sequential_ids_continue_on_empty_tree() {
        let root = Cell::empty(CellId::root());
        let mut ids = SequentialIds::continuing("cell", &root);
        assert_eq!(ids.next_id(), CellId::new("cell-1"));
    }

    #[test]
    fn test_sequential_ids_never_overflow() {
        let root = Cell::empty(CellId::root()).split_into(
            crate::grid::SplitDirection::Vertical,
            Cell::empty(CellId::new(format!("cell-{}", u64::MAX - 1))),
            Cell::empty(CellId::new("cell-3")),
        );
        let mut ids = SequentialIds::continuing("cell", &root);
        assert_eq!(ids.next_id(), CellId::new(format!("cell-{}", u64::MAX)));

        let after = ids.next_id();
        let again = ids.next_id();
        assert!(after.as_str().starts_with("cell-"));
        assert_ne!(after, again);
        assert_ne!(after, CellId::new(format!("cell-{}", u64::MAX)));
    }

    #[test]
    fn test_continuing_past_largest_id_stays_unique() {
        let root = Cell::empty(CellId::root()).split_into(
            crate::grid::SplitDirection::Horizontal,
            Cell::empty(CellId::new(format!("cell-{}", u64::MAX))),
            Cell::empty(CellId::new("cell-1")),
        );
        let mut ids = SequentialIds::continuing("cell", &root);
        let fresh = ids.next_id();
        assert!(crate::grid::find_cell(&root, &fresh).is_none());
    }
}
