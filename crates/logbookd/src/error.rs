//! Error types for the `logbook` binary.

use thiserror::Error;

use super::*;

/// Error type alias used for the `logbook` binary.
pub type Result<T> = core::result::Result<T, LogbookdError>;

/// Errors raised while running a command.
#[derive(Error, Debug)]
pub enum LogbookdError {
  /// Form, generation or configuration failure from the library.
  #[error(transparent)]
  Logbook(#[from] LogbookError),

  /// Reading from the terminal failed.
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),
}
