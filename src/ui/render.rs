use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::Model;
use crate::grid::{Cell, CellId, SplitDirection, mutate};
use crate::panel::{BackgroundChoice, PanelView, TextSlot};

use super::{CANVAS_WIDTH_PERCENT, ID_LABEL_LEN, PANEL_WIDTH_PERCENT, style};

pub fn split_panel_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(CANVAS_WIDTH_PERCENT),
            Constraint::Percentage(PANEL_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    draw(model, area, frame.buffer_mut());
}

/// Render the UI into a plain-text canvas of `width` x `height`.
pub fn render_to_lines(model: &Model, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(model, area, &mut buf);
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

fn draw(model: &Model, area: Rect, buf: &mut Buffer) {
    if let Some(cell) = model.editing_cell() {
        let chunks = split_panel_columns(area);
        render_cell(model, &model.grid.root_cell, chunks[0], buf);
        render_panel(cell, chunks[1], buf);
    } else {
        render_cell(model, &model.grid.root_cell, area, buf);
    }
}

fn render_cell(model: &Model, cell: &Cell, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let Some(split) = &cell.split else {
        render_leaf(model, cell, area, buf);
        return;
    };
    let direction = match split.direction {
        SplitDirection::Horizontal => Direction::Horizontal,
        SplitDirection::Vertical => Direction::Vertical,
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);
    for (child, chunk) in split.children.iter().zip(chunks.iter()) {
        render_cell(model, child, *chunk, buf);
    }
}

fn render_leaf(model: &Model, cell: &Cell, area: Rect, buf: &mut Buffer) {
    let selected = model.selected_cell_id.as_ref() == Some(&cell.id);
    let editing = model.editing_cell_id.as_ref() == Some(&cell.id);
    let border_style = if selected {
        style::selected_border()
    } else if editing {
        style::editing_border()
    } else {
        style::plain_border()
    };
    let marker = if selected { "* " } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if editing {
            BorderType::Double
        } else {
            BorderType::Plain
        })
        .border_style(border_style)
        .title(format!("{marker}{}", id_label(&cell.id)))
        .padding(style::block_padding(cell.content.padding))
        .style(style::background(&cell.content));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines: Vec<Line> = TextSlot::ALL
        .iter()
        .filter_map(|slot| slot.get(&cell.content))
        .filter(|element| !element.content.is_empty())
        .map(|element| {
            Line::styled(element.content.clone(), style::text_style(&element.format))
                .alignment(style::alignment(&element.format))
        })
        .collect();
    if let Some(url) = &cell.content.background_image {
        let url = if url.is_empty() { "(none)" } else { url.as_str() };
        lines.push(Line::styled(
            format!("[image: {url}]"),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn render_panel(cell: &Cell, area: Rect, buf: &mut Buffer) {
    let view = PanelView::of(&cell.content);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::editing_border())
        .title(format!("Edit {}", id_label(&cell.id)));
    let inner = block.inner(area);
    block.render(area, buf);

    let radio = |choice: BackgroundChoice, label: &str| {
        let mark = if view.background == choice { "(*)" } else { "( )" };
        format!("{mark} {label}")
    };
    let mut lines = vec![
        Line::from("Background").bold(),
        Line::from(format!(
            "{}  {}  {}",
            radio(BackgroundChoice::None, "None"),
            radio(BackgroundChoice::Color, "Color"),
            radio(BackgroundChoice::Image, "Image"),
        )),
    ];
    if let Some(value) = &view.background_value {
        lines.push(Line::from(format!("  {value}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Padding").bold());
    lines.push(Line::from(format!(
        "T {}  R {}  B {}  L {}",
        view.padding.top, view.padding.right, view.padding.bottom, view.padding.left
    )));
    for (slot, text) in &view.texts {
        lines.push(Line::from(""));
        lines.push(Line::from(slot.label()).bold());
        lines.push(match text {
            Some(text) => Line::from(format!("  {text}")),
            None => Line::from("  -").dim(),
        });
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

/// One line per cell, indented by depth: split cells show their direction,
/// leaves show their title when they have one.
pub fn outline(root: &Cell) -> Vec<String> {
    mutate::cells(root)
        .map(|(depth, cell)| {
            let indent = "  ".repeat(depth);
            match (cell.direction(), &cell.content.title) {
                (Some(SplitDirection::Horizontal), _) => format!("{indent}{} [horizontal]", cell.id),
                (Some(SplitDirection::Vertical), _) => format!("{indent}{} [vertical]", cell.id),
                (None, Some(title)) if !title.content.is_empty() => {
                    format!("{indent}{} \"{}\"", cell.id, title.content)
                }
                (None, _) => format!("{indent}{}", cell.id),
            }
        })
        .collect()
}

/// Ids are usually UUIDs; show only the start.
fn id_label(id: &CellId) -> String {
    id.as_str().chars().take(ID_LABEL_LEN).collect()
}
