//! Gridmaker - Edit recursive grid layouts stored as JSON.
//!
//! # Usage
//!
//! ```bash
//! gridmaker layout.json init
//! gridmaker layout.json split root horizontal
//! gridmaker layout.json set <cell> --title "Welcome" --color "#fafafa"
//! gridmaker layout.json show --edit <cell>
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gridmaker::app::{Editor, Message, Model, update};
use gridmaker::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use gridmaker::grid::{
    CellId, FontSize, FontStyle, FontWeight, GridStructure, SequentialIds, SplitDirection,
    TextAlign, TextDecoration, find_cell,
};
use gridmaker::panel::{BackgroundChoice, FieldEdit, PaddingSide, TextFormatPatch, TextSlot};
use gridmaker::store::{load_structure, save_structure};
use gridmaker::ui::{outline, render_to_lines};

/// Prefix for ids handed out with --seq-ids.
const SEQUENTIAL_ID_PREFIX: &str = "cell";

/// Edit recursive grid layouts stored as JSON
#[derive(Parser, Debug)]
#[command(name = "gridmaker", version, about, long_about = None)]
struct Cli {
    /// Grid file to edit
    #[arg(value_name = "FILE")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,

    /// Write pretty-printed JSON
    #[arg(long, global = true)]
    pretty: bool,

    /// Preview width in columns
    #[arg(long, global = true, value_name = "COLS")]
    width: Option<u16>,

    /// Preview height in rows
    #[arg(long, global = true, value_name = "ROWS")]
    height: Option<u16>,

    /// Give new cells sequential ids (cell-1, cell-2, ...) instead of UUIDs
    #[arg(long, global = true)]
    seq_ids: bool,

    /// Save current command-line flags as defaults
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults
    #[arg(long, global = true)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a grid holding a single empty root cell
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Split a cell into two children
    Split {
        cell: String,
        #[arg(value_enum)]
        direction: SplitDirection,
    },
    /// Delete a cell; deleting the root resets the grid
    Delete { cell: String },
    /// Replace the grid with a single empty root cell
    Reset,
    /// Edit the content of a cell
    Set(SetArgs),
    /// Change the formatting of a cell's text
    Format(FormatArgs),
    /// Print the grid
    Show {
        /// Highlight a cell
        #[arg(long, value_name = "CELL")]
        select: Option<String>,
        /// Open the content panel for a cell
        #[arg(long, value_name = "CELL")]
        edit: Option<String>,
        /// Print an indented list of cells instead of the preview
        #[arg(long)]
        outline: bool,
    },
}

#[derive(Args, Debug)]
struct SetArgs {
    cell: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    subtitle: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Switch the background option
    #[arg(long, value_enum, conflicts_with = "no_background")]
    background: Option<BackgroundChoice>,

    /// Remove any background color or image
    #[arg(long)]
    no_background: bool,

    /// Background color
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    /// Background image URL
    #[arg(long, value_name = "URL")]
    image: Option<String>,

    /// Padding in pixels; invalid input counts as 0
    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    padding_top: Option<String>,

    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    padding_right: Option<String>,

    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    padding_bottom: Option<String>,

    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    padding_left: Option<String>,
}

impl SetArgs {
    /// Edits in panel order: background, padding, then text.
    fn edits(self) -> Vec<FieldEdit> {
        let mut edits = Vec::new();
        if self.no_background {
            edits.push(FieldEdit::Background(BackgroundChoice::None));
        }
        edits.extend(self.background.map(FieldEdit::Background));
        edits.extend(self.color.map(FieldEdit::BackgroundColor));
        edits.extend(self.image.map(FieldEdit::BackgroundImage));
        let paddings = [
            (PaddingSide::Top, self.padding_top),
            (PaddingSide::Right, self.padding_right),
            (PaddingSide::Bottom, self.padding_bottom),
            (PaddingSide::Left, self.padding_left),
        ];
        for (side, input) in paddings {
            edits.extend(input.map(|input| FieldEdit::Padding(side, input)));
        }
        edits.extend(self.title.map(|text| FieldEdit::Text(TextSlot::Title, text)));
        edits.extend(self.subtitle.map(|text| FieldEdit::Text(TextSlot::Subtitle, text)));
        edits.extend(
            self.description
                .map(|text| FieldEdit::Text(TextSlot::Description, text)),
        );
        edits
    }
}

#[derive(Args, Debug)]
struct FormatArgs {
    cell: String,

    #[arg(value_enum)]
    slot: TextSlot,

    #[arg(long, value_name = "FAMILY")]
    font: Option<String>,

    #[arg(long, value_enum)]
    size: Option<FontSize>,

    #[arg(long, value_enum)]
    weight: Option<FontWeight>,

    #[arg(long, value_enum)]
    style: Option<FontStyle>,

    /// Text color
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    /// Text background color
    #[arg(long, value_name = "COLOR")]
    highlight: Option<String>,

    #[arg(long, value_enum)]
    align: Option<TextAlign>,

    #[arg(long, value_enum)]
    decoration: Option<TextDecoration>,

    #[arg(long, value_name = "PX")]
    margin: Option<f64>,

    #[arg(long, value_name = "PX")]
    padding: Option<f64>,

    #[arg(long, value_name = "BOOL")]
    quote: Option<bool>,

    #[arg(long, value_name = "PX")]
    radius: Option<f64>,
}

impl FormatArgs {
    fn patch(self) -> TextFormatPatch {
        TextFormatPatch {
            font_family: self.font,
            font_size: self.size,
            font_weight: self.weight,
            font_style: self.style,
            color: self.color,
            background_color: self.highlight,
            text_align: self.align,
            text_decoration: self.decoration,
            margin: self.margin,
            padding: self.padding,
            is_quote: self.quote,
            border_radius: self.radius,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so `show` output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        pretty: cli.pretty,
        seq_ids: cli.seq_ids,
        width: cli.width,
        height: cli.height,
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    match cli.command {
        Command::Init { force } => init(&cli.file, force, &effective),
        Command::Show {
            select,
            edit,
            outline,
        } => show(&cli.file, select, edit, outline, &effective),
        command => apply(&cli.file, command, &effective),
    }
}

fn init(path: &Path, force: bool, flags: &ConfigFlags) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    save_structure(path, &GridStructure::empty(), flags.pretty)?;
    println!("{}", path.display());
    Ok(())
}

fn show(
    path: &Path,
    select: Option<String>,
    edit: Option<String>,
    as_outline: bool,
    flags: &ConfigFlags,
) -> Result<()> {
    let grid = load_structure(path)?;
    if as_outline {
        let grid = grid.unwrap_or_default();
        for line in outline(&grid.root_cell) {
            println!("{line}");
        }
        return Ok(());
    }

    let mut model = Model::new(grid);
    model = update(model, Message::Select(select.map(CellId::from)));
    model = update(model, Message::Edit(edit.map(CellId::from)));
    if let Some(id) = &model.editing_cell_id
        && model.editing_cell().is_none()
    {
        tracing::warn!(cell = %id, "no such cell to edit");
    }

    let (width, height) = flags.preview_size();
    for line in render_to_lines(&model, width, height) {
        println!("{line}");
    }
    Ok(())
}

/// Turn a structural command into messages for the editor.
fn messages(command: Command) -> Result<(Option<CellId>, Vec<Message>)> {
    let planned = match command {
        Command::Split { cell, direction } => {
            let id = CellId::from(cell);
            (Some(id.clone()), vec![Message::Split(id, direction)])
        }
        Command::Delete { cell } => {
            let id = CellId::from(cell);
            (Some(id.clone()), vec![Message::Delete(id)])
        }
        Command::Reset => (None, vec![Message::Reset]),
        Command::Set(args) => {
            let id = CellId::from(args.cell.clone());
            let edits = args.edits();
            if edits.is_empty() {
                anyhow::bail!("Nothing to set; pass at least one field");
            }
            let messages = edits
                .into_iter()
                .map(|edit| Message::EditField(id.clone(), edit))
                .collect();
            (Some(id), messages)
        }
        Command::Format(args) => {
            let id = CellId::from(args.cell.clone());
            let slot = args.slot;
            let patch = args.patch();
            if patch.is_empty() {
                anyhow::bail!("Nothing to format; pass at least one option");
            }
            (
                Some(id.clone()),
                vec![Message::EditField(id, FieldEdit::Format(slot, patch))],
            )
        }
        Command::Init { .. } | Command::Show { .. } => (None, Vec::new()),
    };
    Ok(planned)
}

fn apply(path: &Path, command: Command, flags: &ConfigFlags) -> Result<()> {
    let is_split = matches!(command, Command::Split { .. });
    let (target, messages) = messages(command)?;

    let initial = load_structure(path)?;
    if let Some(id) = &target {
        let root = initial.as_ref().map(|grid| &*grid.root_cell);
        let known = root.is_some_and(|root| find_cell(root, id).is_some()) || id.is_root();
        if !known {
            anyhow::bail!("No cell with id {id} in {}", path.display());
        }
    }
    let ids = initial.as_ref().map_or_else(
        || SequentialIds::new(SEQUENTIAL_ID_PREFIX),
        |grid| SequentialIds::continuing(SEQUENTIAL_ID_PREFIX, &grid.root_cell),
    );

    let mut write_error = None;
    let grid = {
        let on_change = |grid: &GridStructure| {
            if write_error.is_some() {
                return;
            }
            if let Err(err) = save_structure(path, grid, flags.pretty) {
                write_error = Some(err);
            }
        };
        let editor = Editor::new(initial, on_change);
        let mut editor = if flags.seq_ids {
            editor.with_id_generator(ids)
        } else {
            editor
        };
        for msg in messages {
            editor.dispatch(msg);
        }
        editor.into_model().grid
    };
    if let Some(err) = write_error {
        return Err(err).context("Failed to save grid");
    }

    if is_split
        && let Some(id) = &target
        && let Some(children) = find_cell(&grid.root_cell, id).and_then(|cell| cell.children())
    {
        for child in children {
            println!("{}", child.id);
        }
    }
    Ok(())
}
