//! Research dissemination logbook generation.
//!
//! `logbook` turns a researcher's publication record into two artifacts:
//!
//! - A PDF document listing every publication with its metadata and links
//! - A CSV table with one row per publication
//!
//! # Features
//!
//! - **Explicit input**: a single immutable [`ResearcherForm`] feeds both generators
//! - **Two layout styles**: the legacy fixed-offset layout and a flowing, paginated one
//! - **Deterministic output**: identical forms produce byte-identical files
//! - **Form files**: load forms from TOML or JSON
//!
//! # Getting Started
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use logbook::{form::Publication, prelude::*, Config, FormBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let form = FormBuilder::default()
//!   .with_researcher_name("A. Lee")
//!   .with_project_name("P1")
//!   .with_join_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!   .with_fill_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
//!   .with_publication(Publication { title: "On Logbooks".into(), ..Default::default() })
//!   .build()?;
//!
//! let config = Config::default();
//! let artifacts = logbook::export(&form, &config)?;
//! artifacts.write_to(&config.output_dir, &config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`form`]: Researcher and publication records, form files, presence checks
//! - [`layout`]: Text placement on document pages
//! - [`pdf`]: PDF serialization and read-back
//! - [`table`]: CSV export
//! - [`config`]: Output locations and layout selection

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

pub mod config;
pub mod error;
pub mod form;
pub mod layout;
pub mod pdf;
pub mod table;

pub use crate::{
  config::Config,
  form::{FormBuilder, Publication, ResearcherForm},
  layout::LayoutStyle,
};
use crate::error::*;

/// Common traits and types for ergonomic imports.
///
/// ```
/// use logbook::prelude::*;
///
/// fn example() -> Result<(), LogbookError> { Ok(()) }
/// ```
pub mod prelude {
  pub use crate::{error::LogbookError, layout::LayoutStyle};
}

/// The two generated files, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
  /// PDF document bytes
  pub document: Vec<u8>,
  /// CSV table bytes
  pub table:    Vec<u8>,
}

impl Artifacts {
  /// Writes both artifacts into `dir`, creating it if needed.
  ///
  /// File names come from [`Config::document_name`] and [`Config::table_name`].
  /// Returns the paths of the document and the table, in that order.
  pub fn write_to(&self, dir: &Path, config: &Config) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;

    let document_path = dir.join(&config.document_name);
    let table_path = dir.join(&config.table_name);

    debug!("Writing document to {document_path:?}");
    std::fs::write(&document_path, &self.document)?;
    debug!("Writing table to {table_path:?}");
    std::fs::write(&table_path, &self.table)?;

    Ok((document_path, table_path))
  }
}

/// Checks the form and runs both generators.
///
/// Nothing is generated when the presence check fails.
///
/// # Errors
///
/// - [`LogbookError::MissingField`] or [`LogbookError::NoPublications`] for incomplete forms
/// - Serialization errors from the PDF or CSV writers
#[instrument(skip_all, fields(publications = form.publications.len(), layout = ?config.layout))]
pub fn export(form: &ResearcherForm, config: &Config) -> Result<Artifacts> {
  form.validate()?;

  let document = pdf::render(form, config.layout)?;
  trace!("Rendered document of {} bytes", document.len());
  let table = table::render(form)?;
  trace!("Rendered table of {} bytes", table.len());

  Ok(Artifacts { document, table })
}

/// Formats a date the way both artifacts print it (`YYYY-MM-DD`).
pub fn iso_date(date: NaiveDate) -> String { date.format("%Y-%m-%d").to_string() }
