//! Core grid types.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::ids::IdGenerator;

/// Padding applied to every side of a freshly created cell.
pub const DEFAULT_CELL_PADDING: f64 = 16.0;

/// Identifier of a cell. Opaque; only compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    /// The fixed identifier of the root cell.
    pub const ROOT: &'static str = "root";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CellId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How a split cell lays out its two children.
///
/// `Horizontal` places the children side by side (a row), `Vertical`
/// stacks them (a column).
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    #[value(name = "xlarge")]
    #[serde(rename = "xlarge")]
    ExtraLarge,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

/// Rich-text formatting attached to a [`ContentElement`].
///
/// Fields missing from serialized input take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFormat {
    pub font_family: String,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub color: String,
    pub background_color: String,
    pub text_align: TextAlign,
    pub text_decoration: TextDecoration,
    pub margin: f64,
    pub padding: f64,
    pub is_quote: bool,
    pub border_radius: f64,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            font_size: FontSize::Medium,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            color: "#000000".to_string(),
            background_color: "transparent".to_string(),
            text_align: TextAlign::Left,
            text_decoration: TextDecoration::None,
            margin: 0.0,
            padding: 0.0,
            is_quote: false,
            border_radius: 0.0,
        }
    }
}

/// A text payload with its formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentElement {
    pub content: String,
    #[serde(default)]
    pub format: TextFormat,
}

impl ContentElement {
    /// Create an element with the default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            format: TextFormat::default(),
        }
    }
}

/// Per-side padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(DEFAULT_CELL_PADDING)
    }
}

/// Payload of a cell. Displayed only while the cell is a leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ContentElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<ContentElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ContentElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl CellContent {
    /// Content of a newly created cell: default padding and nothing else.
    pub fn with_default_padding() -> Self {
        Self {
            padding: Some(Padding::default()),
            ..Self::default()
        }
    }
}

/// Direction and the two children of a split cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub direction: SplitDirection,
    pub children: [Arc<Cell>; 2],
}

/// A node of the layout tree.
///
/// A cell is a leaf when `split` is `None`. A split cell keeps its own
/// `content`, which is not displayed until the cell collapses back to a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: CellId,
    pub content: CellContent,
    pub split: Option<Split>,
}

impl Cell {
    /// A leaf with default padding.
    pub fn empty(id: CellId) -> Self {
        Self {
            id,
            content: CellContent::with_default_padding(),
            split: None,
        }
    }

    /// A leaf with default padding and a freshly generated id.
    pub fn fresh(ids: &mut dyn IdGenerator) -> Self {
        Self::empty(ids.next_id())
    }

    pub const fn is_leaf(&self) -> bool {
        self.split.is_none()
    }

    pub fn direction(&self) -> Option<SplitDirection> {
        self.split.as_ref().map(|split| split.direction)
    }

    pub fn children(&self) -> Option<&[Arc<Cell>; 2]> {
        self.split.as_ref().map(|split| &split.children)
    }

    /// Same id and content, split into the given children.
    pub fn split_into(&self, direction: SplitDirection, first: Self, second: Self) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            split: Some(Split {
                direction,
                children: [Arc::new(first), Arc::new(second)],
            }),
        }
    }

    /// Same id and split, with the content replaced.
    pub fn with_content(&self, content: CellContent) -> Self {
        Self {
            id: self.id.clone(),
            content,
            split: self.split.clone(),
        }
    }

    /// Same id and content, collapsed to a leaf.
    pub fn collapsed(&self) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            split: None,
        }
    }
}

/// The value exchanged with the host on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStructure {
    pub root_cell: Arc<Cell>,
}

impl GridStructure {
    pub fn new(root_cell: Cell) -> Self {
        Self {
            root_cell: Arc::new(root_cell),
        }
    }

    /// A single empty root cell.
    pub fn empty() -> Self {
        Self::new(Cell::empty(CellId::root()))
    }

    /// Decode a grid of any depth from JSON.
    ///
    /// serde_json's recursion limit is lifted and the stack grows on demand,
    /// so every tree the editor can build can be read back.
    ///
    /// # Errors
    /// Returns an error for malformed JSON or a tree failing [`ShapeError`]
    /// checks.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut json_de = serde_json::Deserializer::from_str(json);
        json_de.disable_recursion_limit();
        let grid = Self::deserialize(serde_stacker::Deserializer::new(&mut json_de))?;
        json_de.end()?;
        Ok(grid)
    }

    /// Check the root id and id uniqueness across the tree.
    ///
    /// # Errors
    /// Returns the first violation found in pre-order.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !self.root_cell.id.is_root() {
            return Err(ShapeError::RootId(self.root_cell.id.clone()));
        }
        let mut seen = HashSet::new();
        for (_, cell) in super::mutate::cells(&self.root_cell) {
            if !seen.insert(&cell.id) {
                return Err(ShapeError::DuplicateId(cell.id.clone()));
            }
        }
        Ok(())
    }
}

impl Default for GridStructure {
    fn default() -> Self {
        Self::empty()
    }
}

/// A serialized tree that breaks the cell invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("cell {0} has a direction but no children")]
    DirectionWithoutChildren(CellId),
    #[error("cell {0} has children but no direction")]
    ChildrenWithoutDirection(CellId),
    #[error("cell {id} has {count} children, expected 2")]
    ChildCount { id: CellId, count: usize },
    #[error("root cell must have id \"root\", found {0}")]
    RootId(CellId),
    #[error("cell id {0} appears more than once")]
    DuplicateId(CellId),
}

#[derive(Serialize)]
struct CellRef<'a> {
    id: &'a CellId,
    content: &'a CellContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<SplitDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [Arc<Cell>; 2]>,
}

#[derive(Deserialize)]
struct CellRepr {
    id: CellId,
    #[serde(default)]
    content: CellContent,
    #[serde(default)]
    direction: Option<SplitDirection>,
    #[serde(default)]
    children: Option<Vec<Cell>>,
}

impl TryFrom<CellRepr> for Cell {
    type Error = ShapeError;

    fn try_from(repr: CellRepr) -> Result<Self, Self::Error> {
        let split = match (repr.direction, repr.children) {
            (None, None) => None,
            (Some(_), None) => return Err(ShapeError::DirectionWithoutChildren(repr.id)),
            (None, Some(_)) => return Err(ShapeError::ChildrenWithoutDirection(repr.id)),
            (Some(direction), Some(children)) => {
                let count = children.len();
                let children: [Cell; 2] = children
                    .try_into()
                    .map_err(|_| ShapeError::ChildCount {
                        id: repr.id.clone(),
                        count,
                    })?;
                Some(Split {
                    direction,
                    children: children.map(Arc::new),
                })
            }
        };
        Ok(Self {
            id: repr.id,
            content: repr.content,
            split,
        })
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CellRef {
            id: &self.id,
            content: &self.content,
            direction: self.direction(),
            children: self.children(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CellRepr::deserialize(deserializer)?;
        Self::try_from(repr).map_err(serde::de::Error::custom)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridRepr {
    root_cell: Cell,
}

impl<'de> Deserialize<'de> for GridStructure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        let grid = Self::new(repr.root_cell);
        grid.validate().map_err(serde::de::Error::custom)?;
        Ok(grid)
    }
}
