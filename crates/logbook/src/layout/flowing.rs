//! Measured layout with page breaks.
//!
//! Every line is drawn at the cursor, and the cursor then moves down by one
//! line. Blank fields still take a line, so each publication keeps the shape of
//! the legacy layout. Before each line the cursor is checked against the bottom
//! margin and a new page is started when it has crossed it.

use super::*;

/// Lowest baseline allowed on a page.
pub(crate) const BOTTOM_MARGIN: i64 = 72;

/// Space left after each block of a publication.
const BLOCK_GAP: i64 = LINE_HEIGHT;

/// Space left between publications.
const PUBLICATION_GAP: i64 = 2 * LINE_HEIGHT;

/// A canvas together with the running cursor.
struct Flow<'a> {
  /// Surface drawn on
  canvas: &'a mut Canvas,
  /// Baseline of the next line
  y:      i64,
}

impl Flow<'_> {
  /// Moves to a new page if the next line would cross the bottom margin.
  fn ensure_room(&mut self) {
    if self.y < BOTTOM_MARGIN {
      trace!(y = self.y, "Starting a new page");
      self.canvas.show_page();
      self.y = TOP_Y;
    }
  }

  /// Draws one line at the cursor.
  fn line(&mut self, x: i64, text: impl Into<String>) {
    self.ensure_room();
    self.canvas.draw_string(x, self.y, text);
    self.y -= LINE_HEIGHT;
  }

  /// Draws a hard-wrapped block; empty text leaves one blank line.
  fn block(&mut self, x: i64, text: &str) {
    let lines = hard_wrap(text, WRAP_WIDTH);
    if lines.is_empty() {
      self.y -= LINE_HEIGHT;
    }
    for chunk in lines {
      self.line(x, chunk);
    }
  }

  /// Leaves vertical space without drawing.
  fn gap(&mut self, height: i64) { self.y -= height; }
}

/// Draws every publication, starting at [`FIRST_PUBLICATION_Y`] on the first page.
pub(super) fn draw_publications(canvas: &mut Canvas, publications: &[Publication]) {
  let mut flow = Flow { canvas, y: FIRST_PUBLICATION_Y };

  for (idx, publication) in publications.iter().enumerate() {
    flow.line(LABEL_X, format!("Publication {}", idx + 1));

    flow.line(LABEL_X, "Author Names:");
    flow.block(INDENT_X, &publication.author_names);
    flow.gap(BLOCK_GAP);

    flow.line(LABEL_X, "Title:");
    flow.block(INDENT_X, &publication.title);
    flow.gap(BLOCK_GAP);

    for line in metadata_lines(publication) {
      flow.line(LABEL_X, line);
    }
    flow.gap(BLOCK_GAP);

    if !publication.open_access_links.is_empty() {
      flow.line(LABEL_X, "Open Access Links:");
      for link in &publication.open_access_links {
        flow.line(INDENT_X, link.as_str());
      }
      flow.gap(BLOCK_GAP);
    }

    if !publication.data_code_links.is_empty() {
      flow.line(LABEL_X, "Data and Codes Links:");
      for link in &publication.data_code_links {
        flow.block(INDENT_X, link);
      }
      flow.gap(BLOCK_GAP);
    }

    flow.gap(PUBLICATION_GAP);
  }
}
