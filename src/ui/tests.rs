use super::*;
use crate::app::{Message, Model, update};
use crate::grid::{CellId, SequentialIds, SplitDirection};
use crate::panel::{BackgroundChoice, FieldEdit, PaddingSide, TextSlot};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(60, 20);
    Terminal::new(backend).unwrap()
}

fn create_test_model() -> Model {
    Model::new(None).with_id_generator(SequentialIds::new("c"))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_empty_root_shows_root_label() {
    let model = create_test_model();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();
    assert!(buffer_text(&terminal).contains("root"));
}

#[test]
fn test_render_split_shows_each_leaf_once() {
    let mut model = create_test_model();
    model = update(model, Message::Split(CellId::root(), SplitDirection::Horizontal));
    model = update(model, Message::Split(CellId::new("c-2"), SplitDirection::Vertical));

    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();
    let text = buffer_text(&terminal);

    for id in ["c-1", "c-3", "c-4"] {
        assert_eq!(text.matches(id).count(), 1, "{id} should be drawn once");
    }
    // Internal cells are not drawn
    assert!(!text.contains("c-2"));
    assert!(!text.contains("root"));
}

#[test]
fn test_horizontal_split_places_children_side_by_side() {
    let model = update(
        create_test_model(),
        Message::Split(CellId::root(), SplitDirection::Horizontal),
    );
    let lines = render_to_lines(&model, 40, 6);
    assert!(lines[0].contains("c-1"));
    assert!(lines[0].contains("c-2"));
}

#[test]
fn test_vertical_split_stacks_children() {
    let model = update(
        create_test_model(),
        Message::Split(CellId::root(), SplitDirection::Vertical),
    );
    let lines = render_to_lines(&model, 40, 10);
    assert!(lines[0].contains("c-1"));
    assert!(!lines[0].contains("c-2"));
    assert!(lines.iter().skip(1).any(|line| line.contains("c-2")));
}

#[test]
fn test_render_shows_leaf_text() {
    let mut model = create_test_model();
    model = update(
        model,
        Message::EditField(CellId::root(), FieldEdit::Text(TextSlot::Title, "Welcome".into())),
    );
    model = update(
        model,
        Message::EditField(
            CellId::root(),
            FieldEdit::Text(TextSlot::Description, "Body copy".into()),
        ),
    );
    let text = render_to_lines(&model, 40, 10).join("\n");
    assert!(text.contains("Welcome"));
    assert!(text.contains("Body copy"));
}

#[test]
fn test_render_hides_content_of_split_cells() {
    let mut model = create_test_model();
    model = update(
        model,
        Message::EditField(CellId::root(), FieldEdit::Text(TextSlot::Title, "Hidden".into())),
    );
    model = update(model, Message::Split(CellId::root(), SplitDirection::Horizontal));
    let text = render_to_lines(&model, 40, 10).join("\n");
    assert!(!text.contains("Hidden"));
}

#[test]
fn test_render_marks_selected_cell() {
    let mut model = update(
        create_test_model(),
        Message::Split(CellId::root(), SplitDirection::Horizontal),
    );
    model = update(model, Message::Select(Some(CellId::new("c-2"))));
    let text = render_to_lines(&model, 40, 6).join("\n");
    assert!(text.contains("* c-2"));
    assert!(!text.contains("* c-1"));
}

#[test]
fn test_render_shows_panel_for_editing_cell() {
    let mut model = create_test_model();
    model = update(
        model,
        Message::EditField(CellId::root(), FieldEdit::Background(BackgroundChoice::Color)),
    );
    model = update(
        model,
        Message::EditField(CellId::root(), FieldEdit::Padding(PaddingSide::Top, "4".into())),
    );
    model = update(model, Message::Edit(Some(CellId::root())));

    let text = render_to_lines(&model, 120, 30).join("\n");
    assert!(text.contains("Edit root"));
    assert!(text.contains("(*) Color"));
    assert!(text.contains("#ffffff"));
    assert!(text.contains("T 4  R 16  B 16  L 16"));
    assert!(text.contains("Subtitle"));
}

#[test]
fn test_render_image_placeholder() {
    let model = update(
        create_test_model(),
        Message::EditField(
            CellId::root(),
            FieldEdit::BackgroundImage("https://x.io/a.png".into()),
        ),
    );
    let text = render_to_lines(&model, 60, 8).join("\n");
    assert!(text.contains("[image: https://x.io/a.png]"));
}

#[test]
fn test_render_to_lines_respects_size() {
    let model = create_test_model();
    let lines = render_to_lines(&model, 30, 5);
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.chars().count() <= 30));
}

#[test]
fn test_render_tiny_area_does_not_panic() {
    let mut model = create_test_model();
    for _ in 0..6 {
        let target = crate::grid::mutate::leaf_ids(&model.grid.root_cell)
            .last()
            .cloned()
            .unwrap();
        model = update(model, Message::Split(target, SplitDirection::Vertical));
    }
    let lines = render_to_lines(&model, 4, 3);
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_split_panel_columns() {
    let chunks = split_panel_columns(ratatui::layout::Rect::new(0, 0, 100, 10));
    assert_eq!(chunks[0].width, 65);
    assert_eq!(chunks[1].width, 35);
}

#[test]
fn test_outline_lists_cells_by_depth() {
    let mut model = update(
        create_test_model(),
        Message::Split(CellId::root(), SplitDirection::Horizontal),
    );
    model = update(model, Message::Split(CellId::new("c-1"), SplitDirection::Vertical));
    model = update(
        model,
        Message::EditField(CellId::new("c-2"), FieldEdit::Text(TextSlot::Title, "Hero".into())),
    );
    assert_eq!(
        outline(&model.grid.root_cell),
        vec![
            "root [horizontal]".to_string(),
            "  c-1 [vertical]".to_string(),
            "    c-3".to_string(),
            "    c-4".to_string(),
            "  c-2 \"Hero\"".to_string(),
        ]
    );
}
