//! Configuration for the statement tree builder with per-project overrides.
//!
//! Config priority: project-relative (.stree.toml) > user (~/.config/stree/config.toml) > defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Project-relative config file name
pub const PROJECT_CONFIG_FILE: &str = ".stree.toml";

// ============================================================================
// Offset Configuration
// ============================================================================

/// Unit used for every offset crossing the public API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OffsetEncoding {
  /// Unicode scalar values (`str::chars`)
  #[default]
  Char,
  /// UTF-16 code units, as used by editors speaking LSP
  Utf16,
  /// Raw UTF-8 bytes
  Utf8,
}

impl OffsetEncoding {
  /// Width of `c` in this encoding
  pub fn width(&self, c: char) -> usize {
    match self {
      OffsetEncoding::Char => 1,
      OffsetEncoding::Utf16 => c.len_utf16(),
      OffsetEncoding::Utf8 => c.len_utf8(),
    }
  }

  /// Length of `text` in this encoding
  pub fn measure(&self, text: &str) -> usize {
    match self {
      OffsetEncoding::Utf8 => text.len(),
      OffsetEncoding::Char if text.is_ascii() => text.len(),
      OffsetEncoding::Char => text.chars().count(),
      OffsetEncoding::Utf16 => text.encode_utf16().count(),
    }
  }
}

impl FromStr for OffsetEncoding {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "char" | "chars" => Ok(OffsetEncoding::Char),
      "utf16" | "utf-16" => Ok(OffsetEncoding::Utf16),
      "utf8" | "utf-8" | "byte" | "bytes" => Ok(OffsetEncoding::Utf8),
      other => Err(ConfigError::InvalidValue {
        key: "offset_encoding",
        value: other.to_string(),
      }),
    }
  }
}

// ============================================================================
// Parser Configuration
// ============================================================================

/// Parsing and reduction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
  /// Offset unit for ranges and reported node spans (default: char)
  pub offset_encoding: OffsetEncoding,

  /// Run the parse on tokio's blocking pool inside `build()` (default: true)
  /// Disable for hosts that already call `build()` off their UI thread
  pub parse_on_worker: bool,

  /// Syntax nodes visited between cancellation checks while reducing (default: 256)
  pub cancel_check_interval: usize,
}

impl Default for ParserConfig {
  fn default() -> Self {
    Self {
      offset_encoding: OffsetEncoding::Char,
      parse_on_worker: true,
      cancel_check_interval: 256,
    }
  }
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Errors raised when a config file is loaded explicitly
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The file could not be read.
  #[error("Failed to read config {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  /// The file is not valid TOML for this schema.
  #[error("Failed to parse config {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
  /// A value was outside its accepted set.
  #[error("Invalid value for {key}: {value}")]
  InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
  /// Parsing and reduction settings
  #[serde(default)]
  pub parser: ParserConfig,
}

impl Config {
  /// Load config for a project, with fallback to user config
  pub fn load_for_project(project_path: &Path) -> Self {
    // Try project-relative first
    let project_config = Self::project_config_path(project_path);
    if project_config.exists()
      && let Ok(config) = Self::from_path(&project_config)
    {
      return config;
    }

    // Fall back to user config
    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
      && let Ok(config) = Self::from_path(&user_config_path)
    {
      return config;
    }

    Self::default()
  }

  /// Load a single config file, reporting why it could not be used
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STREE_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("stree").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("stree").join("config.toml"))
  }

  /// Get the project-relative config path
  pub fn project_config_path(project_path: &Path) -> PathBuf {
    project_path.join(PROJECT_CONFIG_FILE)
  }

  /// Generate a default config file as a string
  pub fn generate_template() -> String {
    let defaults = ParserConfig::default();
    format!(
      r#"# Statement tree configuration
# Place in {PROJECT_CONFIG_FILE} (project) or ~/.config/stree/config.toml (user)

# ============================================================================
# Parser
# ============================================================================

[parser]
# Offset unit for ranges and node spans: char, utf16, or utf8
offset_encoding = "char"

# Parse on tokio's blocking pool when build() is awaited
parse_on_worker = {parse_on_worker}

# Syntax nodes visited between cancellation checks
cancel_check_interval = {cancel_check_interval}
"#,
      parse_on_worker = defaults.parse_on_worker,
      cancel_check_interval = defaults.cancel_check_interval,
    )
  }
}
