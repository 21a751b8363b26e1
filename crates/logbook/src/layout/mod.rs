//! Placement of logbook content on document pages.
//!
//! The layout engine turns a [`ResearcherForm`] into a [`Canvas`] of positioned
//! text runs. Two styles are available:
//!
//! - [`LayoutStyle::Legacy`] reproduces the historical logbook output exactly: a single page, fixed
//!   offsets for the metadata fields, and cursor arithmetic that lets long author lists, titles and
//!   data links overlap the lines that follow them.
//! - [`LayoutStyle::Flowing`] moves the cursor by the height of what was actually drawn and starts a
//!   new page before the bottom margin. Positions differ from legacy output.
//!
//! # Examples
//!
//! ```no_run
//! use logbook::{layout::{layout, LayoutStyle}, ResearcherForm};
//!
//! # fn example(form: &ResearcherForm) {
//! let canvas = layout(form, LayoutStyle::Legacy);
//! for run in canvas.runs() {
//!   println!("({}, {}) {}", run.x, run.y, run.text);
//! }
//! # }
//! ```

use std::{fmt, str::FromStr};

use super::*;

pub mod canvas;
mod flowing;
mod legacy;
pub mod wrap;

use self::canvas::line_offset;
pub use self::{
  canvas::{Canvas, Page, PageSize, TextRun, LETTER},
  wrap::{hard_wrap, line_count, word_count},
};

/// Title stored in the document metadata.
pub const DOCUMENT_TITLE: &str = "Research Dissemination Metadata";
/// First line drawn on the first page.
pub const HEADING: &str = "Research Logbook";
/// Characters per wrapped line.
pub const WRAP_WIDTH: usize = 50;
/// Vertical distance between consecutive lines.
pub const LINE_HEIGHT: i64 = 20;
/// Left edge of labels and single-line fields.
pub const LABEL_X: i64 = 100;
/// Left edge of wrapped blocks and link lists.
pub const INDENT_X: i64 = 120;
/// Baseline of the heading.
pub const TOP_Y: i64 = 750;
/// Cursor position of the first publication.
pub const FIRST_PUBLICATION_Y: i64 = 650;

/// How content is positioned on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
  /// Fixed offsets on a single page, identical to historical logbooks
  #[default]
  Legacy,
  /// Measured cursor advances with automatic page breaks
  Flowing,
}

impl FromStr for LayoutStyle {
  type Err = LogbookError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "legacy" => Ok(Self::Legacy),
      "flowing" => Ok(Self::Flowing),
      other => Err(LogbookError::Config(format!(
        "Unknown layout style \"{other}\", expected \"legacy\" or \"flowing\""
      ))),
    }
  }
}

impl fmt::Display for LayoutStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Legacy => write!(f, "legacy"),
      Self::Flowing => write!(f, "flowing"),
    }
  }
}

/// Lays out the whole form on a fresh US Letter canvas.
#[instrument(skip(form), fields(publications = form.publications.len()), level = "debug")]
pub fn layout(form: &ResearcherForm, style: LayoutStyle) -> Canvas {
  let mut canvas = Canvas::new(DOCUMENT_TITLE, LETTER);
  draw_header(&mut canvas, form);

  match style {
    LayoutStyle::Legacy => legacy::draw_publications(&mut canvas, &form.publications),
    LayoutStyle::Flowing => flowing::draw_publications(&mut canvas, &form.publications),
  }

  debug!(pages = canvas.pages().len(), runs = canvas.runs().count(), "Layout finished");
  canvas
}

/// Heading and researcher details, identical in both styles.
fn draw_header(canvas: &mut Canvas, form: &ResearcherForm) {
  let lines = [
    HEADING.to_string(),
    format!("Researcher's Name: {}", form.researcher_name),
    format!("Project: {}", form.project_name),
    format!("Joining Date: {}", iso_date(form.join_date)),
    format!("Form Filling Date: {}", iso_date(form.fill_date)),
  ];
  for (idx, line) in lines.into_iter().enumerate() {
    canvas.draw_string(LABEL_X, TOP_Y - line_offset(idx), line);
  }
}

/// The six single-line metadata fields of a publication, labelled.
fn metadata_lines(publication: &Publication) -> [String; 6] {
  [
    format!("Journal Name: {}", publication.journal_name),
    format!("Volume: {}", publication.volume),
    format!("Year: {}", publication.year),
    format!("Article Number: {}", publication.article_number),
    format!("DOI: {}", publication.doi),
    format!("Impact Factor (Current): {}", publication.impact_factor),
  ]
}
