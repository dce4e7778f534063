//! Render configuration.
//!
//! [`RenderConfig`] is a plain value: callers build it with the `with_*`
//! methods (each returns an updated copy) or load it from
//! `${PANELGRID_HOME}/config.toml`, falling back to documented defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Layout options for the grid renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces appended after every cell in a row.
    pub padding: usize,

    /// Blank lines inserted between consecutive rows.
    #[serde(deserialize_with = "deserialize_clamped")]
    pub bottom_padding: usize,

    /// Pad all cells sharing a column index to one common width.
    pub same_column_width: bool,
}

impl RenderConfig {
    pub const DEFAULT_PADDING: usize = 1;
    pub const DEFAULT_BOTTOM_PADDING: usize = 0;

    /// Returns a copy with the given horizontal padding.
    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Returns a copy with the given bottom padding; negative values clamp to 0.
    #[must_use]
    pub fn with_bottom_padding(mut self, bottom_padding: i64) -> Self {
        self.bottom_padding = clamp_non_negative(bottom_padding);
        self
    }

    /// Returns a copy with same-column-width mode enabled.
    #[must_use]
    pub fn with_same_column_width(self) -> Self {
        self.with_same_column_width_enabled(true)
    }

    /// Returns a copy with same-column-width mode set explicitly.
    #[must_use]
    pub fn with_same_column_width_enabled(mut self, enabled: bool) -> Self {
        self.same_column_width = enabled;
        self
    }

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Keeps the comments of the embedded template and overwrites its values
    /// with those of `RenderConfig::default()`. Used by `xtask` to keep
    /// `default_config.toml` in sync.
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let generated_toml = toml::to_string(&Self::default())
            .context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: Self::DEFAULT_PADDING,
            bottom_padding: Self::DEFAULT_BOTTOM_PADDING,
            same_column_width: false,
        }
    }
}

fn clamp_non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

fn deserialize_clamped<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_non_negative)
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                // Keep the template's decor (comments) on the key
                if let Some(Item::Value(existing)) = target.get_mut(key) {
                    let decor = existing.decor().clone();
                    *existing = v.clone();
                    *existing.decor_mut() = decor;
                } else {
                    target[key] = Item::Value(v.clone());
                }
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

/// Writes config content to a file, creating parent directories as needed.
/// Uses atomic write (temp file + rename) to prevent corruption.
fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

pub mod paths {
    //! Path resolution for panelgrid configuration.
    //!
    //! PANELGRID_HOME resolution order:
    //! 1. PANELGRID_HOME environment variable (if set)
    //! 2. ~/.config/panelgrid (default)
    //! 3. ./.panelgrid when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the panelgrid home directory.
    pub fn panelgrid_home() -> PathBuf {
        if let Ok(home) = std::env::var("PANELGRID_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".panelgrid"),
            |h| h.join(".config").join("panelgrid"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        panelgrid_home().join("config.toml")
    }
}
