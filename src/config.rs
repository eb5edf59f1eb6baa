use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Preview canvas size used when no width/height is configured.
pub const DEFAULT_PREVIEW_WIDTH: u16 = 80;
pub const DEFAULT_PREVIEW_HEIGHT: u16 = 24;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub pretty: bool,
    pub seq_ids: bool,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            pretty: self.pretty || other.pretty,
            seq_ids: self.seq_ids || other.seq_ids,
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }

    pub fn preview_size(&self) -> (u16, u16) {
        (
            self.width.unwrap_or(DEFAULT_PREVIEW_WIDTH),
            self.height.unwrap_or(DEFAULT_PREVIEW_HEIGHT),
        )
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("gridmaker").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("gridmaker")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gridmaker").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("gridmaker")
                .join("config");
        }
    }

    PathBuf::from(".gridmakerrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".gridmakerrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# gridmaker defaults (saved with --save)".to_string());
    if flags.pretty {
        lines.push("--pretty".to_string());
    }
    if flags.seq_ids {
        lines.push("--seq-ids".to_string());
    }
    if let Some(width) = flags.width {
        lines.push(format!("--width {width}"));
    }
    if let Some(height) = flags.height {
        lines.push(format!("--height {height}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--pretty" {
            flags.pretty = true;
        } else if token == "--seq-ids" {
            flags.seq_ids = true;
        } else if token == "--width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.width = parse_size(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--width=") {
            flags.width = parse_size(value);
        } else if token == "--height" {
            if let Some(next) = tokens.get(i + 1) {
                flags.height = parse_size(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--height=") {
            flags.height = parse_size(value);
        }
        i += 1;
    }
    flags
}

fn parse_size(s: &str) -> Option<u16> {
    s.parse::<u16>().ok().filter(|size| *size > 0)
}
