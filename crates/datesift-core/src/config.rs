//! Configuration types for datesift.
//!
//! [`Config::load`] reads `~/.config/datesift/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::from_path`] layers
//! an explicit file over the defaults. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::Shape;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[dates]
enabled_patterns = [
    "MMMDD,YYYY", "DDMMMYYYY", "DDMMYYYY", "MMDDYYYY", "YYYYMMDD",
    "DDMMMYY", "DDMMYY", "MMDDYY", "YYMMDD",
    "MMMYYYY", "YYYYMMM", "MMYYYY", "YYYYMM",
    "QYYYY", "YYYY",
]
output_format = "%d-%b-%y"
day_first     = false

[cleaning]
trim                = true
ascii_only          = true
collapse_whitespace = false
join_lists          = false
html_decode         = false
"#;

/// Two-digit day, abbreviated month, two-digit year: `05-Mar-24`.
pub const DEFAULT_OUTPUT_FORMAT: &str = "%d-%b-%y";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/datesift/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dates: DateConfig,
    #[serde(default)]
    pub cleaning: CleaningConfig,
}

/// `[dates]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateConfig {
    /// Shape names to match. Unknown names are a startup error.
    #[serde(default = "default_enabled_patterns")]
    pub enabled_patterns: Vec<String>,
    /// strftime-style output pattern.
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Read ambiguous `01/02/2024` as 1 February instead of 2 January.
    #[serde(default)]
    pub day_first: bool,
}

fn default_enabled_patterns() -> Vec<String> {
    Shape::ALL.iter().map(|s| s.name().to_string()).collect()
}
fn default_output_format() -> String { DEFAULT_OUTPUT_FORMAT.to_string() }

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            enabled_patterns: default_enabled_patterns(),
            output_format: default_output_format(),
            day_first: false,
        }
    }
}

/// `[cleaning]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CleaningConfig {
    #[serde(default = "default_true")]
    pub trim: bool,
    #[serde(default = "default_true")]
    pub ascii_only: bool,
    /// Turn tabs and line breaks into spaces and squeeze runs of spaces.
    #[serde(default)]
    pub collapse_whitespace: bool,
    /// Join list values into a single space-separated string.
    #[serde(default)]
    pub join_lists: bool,
    /// Decode HTML entities such as `&amp;` and `&nbsp;` before anything else.
    #[serde(default)]
    pub html_decode: bool,
}

fn default_true() -> bool { true }

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            trim: true,
            ascii_only: true,
            collapse_whitespace: false,
            join_lists: false,
            html_decode: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/datesift/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::from_path(&path)
    }

    /// Layer the TOML file at `path` over the built-in defaults. The file
    /// must exist.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("datesift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
