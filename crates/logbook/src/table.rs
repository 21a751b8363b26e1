//! CSV export of a logbook.
//!
//! The table has one row per publication. Researcher, project and dates are
//! repeated on every row. Link lists are joined into a single cell with
//! [`LINK_SEPARATOR`].
//!
//! The table is first assembled column by column, then every column is padded
//! to the length of the longest one before rows are written.

use super::*;

/// Separator placed between links sharing one cell.
///
/// Links that themselves contain a `|` cannot be told apart after joining.
pub const LINK_SEPARATOR: &str = "|";

/// Number of columns in the table.
pub const COLUMN_COUNT: usize = 14;

/// Header row, in column order.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
  "Researcher Name",
  "Project Name",
  "Join Date",
  "Fill Date",
  "Author Names",
  "Title",
  "Journal Name",
  "Volume",
  "Year",
  "Article Number",
  "DOI",
  "Impact Factor (Current)",
  "Open Access Link",
  "Data and Codes Links",
];

/// Column-major table contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
  /// One vector of cells per entry of [`COLUMNS`]
  columns: Vec<Vec<String>>,
}

impl Default for Table {
  fn default() -> Self { Self { columns: vec![Vec::new(); COLUMN_COUNT] } }
}

impl Table {
  /// Collects the cells for every publication of `form`.
  pub fn from_form(form: &ResearcherForm) -> Self {
    let mut table = Self::default();
    let join_date = iso_date(form.join_date);
    let fill_date = iso_date(form.fill_date);

    for publication in &form.publications {
      table.push_row([
        form.researcher_name.clone(),
        form.project_name.clone(),
        join_date.clone(),
        fill_date.clone(),
        publication.author_names.clone(),
        publication.title.clone(),
        publication.journal_name.clone(),
        publication.volume.clone(),
        publication.year.clone(),
        publication.article_number.clone(),
        publication.doi.clone(),
        publication.impact_factor.clone(),
        join_links(&publication.open_access_links),
        join_links(&publication.data_code_links),
      ]);
    }
    table
  }

  /// Appends one cell to every column.
  fn push_row(&mut self, row: [String; COLUMN_COUNT]) {
    for (column, cell) in self.columns.iter_mut().zip(row) {
      column.push(cell);
    }
  }

  /// Cells of the column named `name`, if it exists.
  pub fn column(&self, name: &str) -> Option<&[String]> {
    COLUMNS.iter().position(|c| *c == name).map(|idx| self.columns[idx].as_slice())
  }

  /// Number of data rows, that is the length of the longest column.
  pub fn row_count(&self) -> usize { self.columns.iter().map(Vec::len).max().unwrap_or(0) }

  /// Fills every column with empty cells up to [`Table::row_count`].
  pub fn pad(&mut self) {
    let rows = self.row_count();
    for column in &mut self.columns {
      column.resize(rows, String::new());
    }
  }

  /// Writes the header and all rows as CSV.
  pub fn to_csv(mut self) -> Result<Vec<u8>> {
    self.pad();

    let mut writer = csv::WriterBuilder::new()
      .has_headers(false)
      .terminator(csv::Terminator::Any(b'\n'))
      .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for row in 0..self.row_count() {
      writer.write_record(self.columns.iter().map(|column| column[row].as_str()))?;
    }

    writer.into_inner().map_err(|e| LogbookError::Io(e.into_error()))
  }
}

/// Joins links into one cell; an empty list gives an empty cell.
pub fn join_links(links: &[String]) -> String { links.join(LINK_SEPARATOR) }

/// Splits a link cell back into links; an empty cell gives no links.
pub fn split_links(cell: &str) -> Vec<String> {
  if cell.is_empty() {
    return Vec::new();
  }
  cell.split(LINK_SEPARATOR).map(str::to_string).collect()
}

/// Renders the CSV table for `form`.
#[instrument(skip(form), fields(publications = form.publications.len()), level = "debug")]
pub fn render(form: &ResearcherForm) -> Result<Vec<u8>> {
  let table = Table::from_form(form);
  debug!(rows = table.row_count(), "Built table");
  table.to_csv()
}
