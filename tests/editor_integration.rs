use std::sync::Arc;

use gridmaker::grid::mutate::leaf_ids;
use gridmaker::grid::{SequentialIds, find_cell};
use gridmaker::panel::{BackgroundChoice, PaddingSide};
use gridmaker::prelude::*;
use gridmaker::store::{load_structure, save_structure};

#[test]
fn test_editor_session_saves_every_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    let mut saves = 0;

    let model = {
        let mut editor = Editor::new(None, |grid: &GridStructure| {
            save_structure(&path, grid, false).unwrap();
            saves += 1;
        })
        .with_id_generator(SequentialIds::new("cell"));

        editor.split(CellId::root(), SplitDirection::Horizontal);
        editor.split(CellId::new("cell-2"), SplitDirection::Vertical);
        editor.select(Some(CellId::new("cell-3")));
        editor.edit(Some(CellId::new("cell-3")));
        editor.edit_field(
            CellId::new("cell-3"),
            FieldEdit::Text(TextSlot::Title, "Summer sale".to_string()),
        );
        editor.edit_field(
            CellId::new("cell-3"),
            FieldEdit::Padding(PaddingSide::Left, "-8".to_string()),
        );
        editor.into_model()
    };

    assert_eq!(saves, 4, "selection changes are not saved");
    let stored = load_structure(&path).unwrap().unwrap();
    assert_eq!(stored, model.grid);
    assert_eq!(
        leaf_ids(&stored.root_cell),
        vec![
            CellId::new("cell-1"),
            CellId::new("cell-3"),
            CellId::new("cell-4"),
        ]
    );

    let edited = find_cell(&stored.root_cell, &CellId::new("cell-3")).unwrap();
    let title = edited.content.title.as_ref().unwrap();
    assert_eq!(title.content, "Summer sale");
    assert_eq!(edited.content.padding.unwrap().left, 0.0);
    assert_eq!(edited.content.padding.unwrap().top, 16.0);
}

#[test]
fn test_resumed_session_continues_sequential_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut first = Editor::new(None, |_: &GridStructure| {})
        .with_id_generator(SequentialIds::new("cell"));
    first.split(CellId::root(), SplitDirection::Vertical);
    save_structure(&path, first.grid(), true).unwrap();

    let loaded = load_structure(&path).unwrap();
    let ids = SequentialIds::continuing("cell", &loaded.as_ref().unwrap().root_cell);
    let mut second = Editor::new(loaded, |_: &GridStructure| {}).with_id_generator(ids);
    second.split(CellId::new("cell-1"), SplitDirection::Horizontal);

    assert_eq!(
        leaf_ids(&second.grid().root_cell),
        vec![
            CellId::new("cell-3"),
            CellId::new("cell-4"),
            CellId::new("cell-2"),
        ]
    );
}

#[test]
fn test_deleting_root_clears_the_layout() {
    let mut last = None;
    {
        let mut editor = Editor::new(None, |grid: &GridStructure| last = Some(grid.clone()));
        editor.split(CellId::root(), SplitDirection::Horizontal);
        editor.select(Some(CellId::root()));
        editor.delete(CellId::root());
        assert_eq!(editor.model().selected_cell_id, None);
    }
    let last = last.unwrap();
    assert!(last.root_cell.is_leaf());
    assert!(last.root_cell.content.padding.is_some());
}

#[test]
fn test_untouched_subtrees_are_shared_between_versions() {
    let mut versions: Vec<GridStructure> = Vec::new();
    {
        let mut editor = Editor::new(None, |grid: &GridStructure| versions.push(grid.clone()))
            .with_id_generator(SequentialIds::new("n"));
        editor.split(CellId::root(), SplitDirection::Horizontal);
        editor.split(CellId::new("n-1"), SplitDirection::Vertical);
        editor.edit_field(
            CellId::new("n-2"),
            FieldEdit::Background(BackgroundChoice::Color),
        );
    }

    let before = versions[1].root_cell.children().unwrap();
    let after = versions[2].root_cell.children().unwrap();
    assert!(Arc::ptr_eq(&before[0], &after[0]));
    assert!(!Arc::ptr_eq(&before[1], &after[1]));
    assert_eq!(
        after[1].content.background_color.as_deref(),
        Some("#ffffff")
    );
}
