//! Fixed-offset layout matching historical logbooks.
//!
//! Everything goes on the first page. The cursor arithmetic is kept exactly as
//! it has always been, including its quirks:
//!
//! - metadata fields sit at fixed offsets below the cursor, so long author lists or titles overlap
//!   them;
//! - every data link starts one line below the previous link, however many lines the previous one
//!   wrapped to;
//! - the space reserved for data links is computed from their word count, not their length.

use super::*;

/// Gap between the end of one publication and the next.
const PUBLICATION_GAP: i64 = 200;

/// Draws every publication, starting at [`FIRST_PUBLICATION_Y`].
pub(super) fn draw_publications(canvas: &mut Canvas, publications: &[Publication]) {
  let mut y = FIRST_PUBLICATION_Y;
  for (idx, publication) in publications.iter().enumerate() {
    y = draw_publication(canvas, idx + 1, publication, y);
  }
}

/// Draws one publication with its cursor at `y` and returns the next cursor.
fn draw_publication(canvas: &mut Canvas, number: usize, publication: &Publication, y: i64) -> i64 {
  let mut y = y;
  canvas.draw_string(LABEL_X, y, format!("Publication {number}"));

  canvas.draw_string(LABEL_X, y - LINE_HEIGHT, "Author Names:");
  canvas.draw_wrapped(INDENT_X, y - 2 * LINE_HEIGHT, &publication.author_names);
  y -= wrapped_block_advance(&publication.author_names);

  canvas.draw_string(LABEL_X, y, "Title:");
  canvas.draw_wrapped(INDENT_X, y - LINE_HEIGHT, &publication.title);
  y -= wrapped_block_advance(&publication.title);

  for (idx, line) in metadata_lines(publication).into_iter().enumerate() {
    canvas.draw_string(LABEL_X, y - line_offset(idx + 1), line);
  }

  let open_access = &publication.open_access_links;
  if !open_access.is_empty() {
    canvas.draw_string(LABEL_X, y - 8 * LINE_HEIGHT, "Open Access Links:");
    for (idx, link) in open_access.iter().enumerate() {
      canvas.draw_string(INDENT_X, y - 9 * LINE_HEIGHT - line_offset(idx), link.as_str());
    }
  }
  y -= open_access_advance(open_access);

  let data_links = &publication.data_code_links;
  if !data_links.is_empty() {
    canvas.draw_string(LABEL_X, y - 9 * LINE_HEIGHT, "Data and Codes Links:");
    for (idx, link) in data_links.iter().enumerate() {
      canvas.draw_wrapped(INDENT_X, y - 10 * LINE_HEIGHT - line_offset(idx), link);
    }
  }
  y -= data_links_advance(data_links);

  y - PUBLICATION_GAP
}

/// Cursor advance after the Author Names or Title block.
pub(super) fn wrapped_block_advance(text: &str) -> i64 {
  line_offset(line_count(text, WRAP_WIDTH)) + 2 * LINE_HEIGHT
}

/// Cursor advance after the open access links, reserving at least one line.
pub(super) fn open_access_advance(links: &[String]) -> i64 {
  line_offset(links.len().max(1)) + 3 * LINE_HEIGHT
}

/// Cursor advance after the data and code links.
///
/// Each link reserves `ceil(words / 50) + 1` lines, where `words` is its
/// whitespace separated word count. With no links the advance is 40; the
/// old script clamped to one link and gave 60.
pub(super) fn data_links_advance(links: &[String]) -> i64 {
  let lines: usize = links.iter().map(|link| word_count(link).div_ceil(WRAP_WIDTH) + 1).sum();
  line_offset(lines) + 2 * LINE_HEIGHT
}
