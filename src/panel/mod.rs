//! Content-editing panel.
//!
//! The panel edits one cell's [`CellContent`] a field at a time. Each
//! [`FieldEdit`] is merged into the current content by [`apply_edit`] and the
//! result is saved immediately; there is no submit step.

use crate::grid::{
    CellContent, ContentElement, FontSize, FontStyle, FontWeight, Padding, TextAlign,
    TextDecoration, TextFormat,
};

/// Color picked when switching to a color background with none set.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Which kind of background the panel shows as selected.
///
/// Derived from the content, never stored.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundChoice {
    None,
    Color,
    Image,
}

impl BackgroundChoice {
    pub const fn of(content: &CellContent) -> Self {
        if content.background_image.is_some() {
            Self::Image
        } else if content.background_color.is_some() {
            Self::Color
        } else {
            Self::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// One of the three text elements of a cell.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Title,
    Subtitle,
    Description,
}

impl TextSlot {
    pub const ALL: [Self; 3] = [Self::Title, Self::Subtitle, Self::Description];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Subtitle => "Subtitle",
            Self::Description => "Description",
        }
    }

    pub const fn get(self, content: &CellContent) -> Option<&ContentElement> {
        match self {
            Self::Title => content.title.as_ref(),
            Self::Subtitle => content.subtitle.as_ref(),
            Self::Description => content.description.as_ref(),
        }
    }

    const fn get_mut(self, content: &mut CellContent) -> &mut Option<ContentElement> {
        match self {
            Self::Title => &mut content.title,
            Self::Subtitle => &mut content.subtitle,
            Self::Description => &mut content.description,
        }
    }
}

/// A partial [`TextFormat`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormatPatch {
    pub font_family: Option<String>,
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub text_decoration: Option<TextDecoration>,
    pub margin: Option<f64>,
    pub padding: Option<f64>,
    pub is_quote: Option<bool>,
    pub border_radius: Option<f64>,
}

impl TextFormatPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, base: &TextFormat) -> TextFormat {
        TextFormat {
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| base.font_family.clone()),
            font_size: self.font_size.unwrap_or(base.font_size),
            font_weight: self.font_weight.unwrap_or(base.font_weight),
            font_style: self.font_style.unwrap_or(base.font_style),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| base.background_color.clone()),
            text_align: self.text_align.unwrap_or(base.text_align),
            text_decoration: self.text_decoration.unwrap_or(base.text_decoration),
            margin: self.margin.map_or(base.margin, clamp_non_negative),
            padding: self.padding.map_or(base.padding, clamp_non_negative),
            is_quote: self.is_quote.unwrap_or(base.is_quote),
            border_radius: self
                .border_radius
                .map_or(base.border_radius, clamp_non_negative),
        }
    }
}

/// A partial [`ContentElement`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub content: Option<String>,
    pub format: Option<TextFormatPatch>,
}

/// Create an element from defaults, or merge into the existing one.
pub fn merge_element(existing: Option<&ContentElement>, patch: ElementPatch) -> ContentElement {
    let base = existing.cloned().unwrap_or_default();
    let format = match patch.format {
        Some(format) => format.apply_to(&base.format),
        None => base.format,
    };
    ContentElement {
        content: patch.content.unwrap_or(base.content),
        format,
    }
}

/// A single change made in the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Switch the background option, clearing the other kind
    Background(BackgroundChoice),
    /// Pick a background color
    BackgroundColor(String),
    /// Set the background image URL
    BackgroundImage(String),
    /// Raw text typed into one padding input
    Padding(PaddingSide, String),
    /// Replace the text of an element, keeping its format
    Text(TextSlot, String),
    /// Merge a format change into an element
    Format(TextSlot, TextFormatPatch),
}

/// Apply `edit` to a copy of `content`.
pub fn apply_edit(content: &CellContent, edit: FieldEdit) -> CellContent {
    let mut next = content.clone();
    match edit {
        FieldEdit::Background(BackgroundChoice::None) => {
            next.background_color = None;
            next.background_image = None;
        }
        FieldEdit::Background(BackgroundChoice::Color) => {
            next.background_image = None;
            next.background_color
                .get_or_insert_with(|| DEFAULT_BACKGROUND_COLOR.to_string());
        }
        FieldEdit::Background(BackgroundChoice::Image) => {
            next.background_color = None;
            next.background_image.get_or_insert_with(String::new);
        }
        FieldEdit::BackgroundColor(color) => {
            next.background_image = None;
            next.background_color = Some(color);
        }
        FieldEdit::BackgroundImage(url) => {
            next.background_color = None;
            next.background_image = Some(url);
        }
        FieldEdit::Padding(side, input) => {
            let value = parse_padding_input(&input);
            let padding = next.padding.get_or_insert_with(Padding::default);
            match side {
                PaddingSide::Top => padding.top = value,
                PaddingSide::Right => padding.right = value,
                PaddingSide::Bottom => padding.bottom = value,
                PaddingSide::Left => padding.left = value,
            }
        }
        FieldEdit::Text(slot, text) => {
            let slot_value = slot.get_mut(&mut next);
            let merged = merge_element(
                slot_value.as_ref(),
                ElementPatch {
                    content: Some(text),
                    format: None,
                },
            );
            *slot_value = Some(merged);
        }
        FieldEdit::Format(slot, format) => {
            let slot_value = slot.get_mut(&mut next);
            let merged = merge_element(
                slot_value.as_ref(),
                ElementPatch {
                    content: None,
                    format: Some(format),
                },
            );
            *slot_value = Some(merged);
        }
    }
    next
}

/// Parse a padding input, falling back to 0 and never going below 0.
pub fn parse_padding_input(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map_or(0.0, clamp_non_negative)
}

const fn clamp_non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

/// What the panel displays for a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub background: BackgroundChoice,
    pub background_value: Option<String>,
    pub padding: Padding,
    pub texts: [(TextSlot, Option<String>); 3],
}

impl PanelView {
    pub fn of(content: &CellContent) -> Self {
        let background = BackgroundChoice::of(content);
        let background_value = match background {
            BackgroundChoice::None => None,
            BackgroundChoice::Color => content.background_color.clone(),
            BackgroundChoice::Image => content.background_image.clone(),
        };
        Self {
            background,
            background_value,
            padding: content.padding.unwrap_or_default(),
            texts: TextSlot::ALL
                .map(|slot| (slot, slot.get(content).map(|element| element.content.clone()))),
        }
    }
}
