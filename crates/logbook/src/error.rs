//! Error types for the logbook library.
//!
//! Only one kind of failure concerns the person filling in the form: a required
//! top-level field is missing. Everything else wraps an underlying I/O or
//! serialization error.
//!
//! # Examples
//!
//! ```
//! use logbook::{error::LogbookError, FormBuilder};
//!
//! match FormBuilder::default().build() {
//!   Err(LogbookError::MissingField(field)) => println!("Please fill in {field}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`logbook`](crate) crate.
pub type Result<T> = core::result::Result<T, LogbookError>;

/// Errors that can occur when building forms or generating artifacts.
#[derive(Error, Debug)]
pub enum LogbookError {
  /// A required top-level field was left empty.
  ///
  /// The string names the field as it is shown to the user, e.g. "Researcher's Name".
  #[error("Please fill in all the required fields: {0} is missing")]
  MissingField(&'static str),

  /// The form lists no publications at all.
  #[error("Please fill in all the required fields: at least one publication is needed")]
  NoPublications,

  /// PDF construction or parsing failed.
  ///
  /// This wraps errors from `lopdf`, raised while encoding content streams or
  /// when reading a document back with [`crate::pdf::inspect`].
  #[error(transparent)]
  Lopdf(#[from] lopdf::Error),

  /// Writing a CSV record failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A TOML form or config file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A config could not be written as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// A JSON form file could not be parsed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// Configuration problems that are not parse errors.
  #[error("{0}")]
  Config(String),
}
