//! JSON file persistence for the command-line host.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::grid::GridStructure;

/// Read a grid from `path`. A missing file yields `None`.
pub fn load_structure(path: &Path) -> Result<Option<GridStructure>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid {}", path.display()))?;
    let grid = GridStructure::from_json(&content)
        .with_context(|| format!("Invalid grid in {}", path.display()))?;
    Ok(Some(grid))
}

/// Write `grid` to `path`, creating parent directories as needed.
pub fn save_structure(path: &Path, grid: &GridStructure, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(grid)
    } else {
        serde_json::to_string(grid)
    }
    .context("Failed to encode grid")?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("Failed to write grid {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "saved grid");
    Ok(())
}
