//! Where artifacts go and how documents are laid out.
//!
//! The configuration lives in a TOML file, by default
//! `<config dir>/logbook/config.toml`:
//!
//! ```toml
//! output_dir = "/home/alice/Documents/logbook"
//! document_name = "research_logbook.pdf"
//! table_name = "research_logbook.csv"
//! layout = "legacy"
//! ```
//!
//! Every key is optional; missing keys take their default value.

use super::*;

/// Default file name of the PDF document.
pub const DEFAULT_DOCUMENT_NAME: &str = "research_logbook.pdf";
/// Default file name of the CSV table.
pub const DEFAULT_TABLE_NAME: &str = "research_logbook.csv";

/// Output settings shared by the library and the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directory receiving the generated files
  pub output_dir:    PathBuf,
  /// File name of the PDF document
  pub document_name: String,
  /// File name of the CSV table
  pub table_name:    String,
  /// Layout style of the PDF document
  pub layout:        LayoutStyle,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      output_dir:    PathBuf::from("."),
      document_name: DEFAULT_DOCUMENT_NAME.to_string(),
      table_name:    DEFAULT_TABLE_NAME.to_string(),
      layout:        LayoutStyle::default(),
    }
  }
}

impl Config {
  /// Returns the default location of the configuration file.
  ///
  /// - On Unix: `~/.config/logbook/config.toml`
  /// - On macOS: `~/Library/Application Support/logbook/config.toml`
  /// - On Windows: `%APPDATA%\logbook\config.toml`
  /// - Fallback: `./logbook/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("logbook").join("config.toml")
  }

  /// Reads the configuration at `path`, using defaults when the file does not exist.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No config at {path:?}, using defaults");
      return Ok(Self::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    config.check()?;
    trace!("Loaded config: {config:?}");
    Ok(config)
  }

  /// Writes the configuration to `path`, creating parent directories.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    self.check()?;
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    debug!("Saved config to {path:?}");
    Ok(())
  }

  /// Sets the output directory.
  pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
    self.output_dir = dir.as_ref().to_path_buf();
    self
  }

  /// Sets the PDF file name.
  pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
    self.document_name = name.into();
    self
  }

  /// Sets the CSV file name.
  pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
    self.table_name = name.into();
    self
  }

  /// Sets the layout style.
  pub fn with_layout(mut self, layout: LayoutStyle) -> Self {
    self.layout = layout;
    self
  }

  /// File names must be plain, distinct and non-empty.
  fn check(&self) -> Result<()> {
    for name in [&self.document_name, &self.table_name] {
      if name.is_empty() || name.contains(['/', '\\']) {
        return Err(LogbookError::Config(format!("Invalid output file name \"{name}\"")));
      }
    }
    if self.document_name == self.table_name {
      return Err(LogbookError::Config(
        "The document and the table cannot share a file name".to_string(),
      ));
    }
    Ok(())
  }
}
