//! An in-memory drawing surface holding positioned text.
//!
//! Coordinates are PDF points with the origin at the bottom left of the page,
//! so `y` shrinks as content moves down. Nothing is clipped: text may be placed
//! at negative or off-page positions.

use super::*;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
  /// Page width
  pub width:  i64,
  /// Page height
  pub height: i64,
}

/// US Letter, 8.5 × 11 inches.
pub const LETTER: PageSize = PageSize { width: 612, height: 792 };

/// A single line of text at an absolute position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
  /// Horizontal position of the baseline start
  pub x:    i64,
  /// Vertical position of the baseline
  pub y:    i64,
  /// Text drawn, never containing a line break
  pub text: String,
}

/// The text runs drawn on one page, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
  /// Runs in the order they were drawn
  pub runs: Vec<TextRun>,
}

/// Drawing surface for a whole document.
///
/// Drawing always goes to the last page; [`Canvas::show_page`] starts a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
  /// Document title stored in the document metadata
  pub title:     String,
  /// Size shared by every page
  pub page_size: PageSize,
  /// Pages drawn so far, the last one being the current page
  pages:         Vec<Page>,
}

impl Canvas {
  /// Creates a canvas with one empty page.
  pub fn new(title: impl Into<String>, page_size: PageSize) -> Self {
    Self { title: title.into(), page_size, pages: vec![Page::default()] }
  }

  /// Draws one line of text on the current page.
  pub fn draw_string(&mut self, x: i64, y: i64, text: impl Into<String>) {
    let run = TextRun { x, y, text: text.into() };
    trace!("Drawing {run:?}");
    self.current_page().runs.push(run);
  }

  /// Hard-wraps `text` and draws the chunks downward from `y`, [`LINE_HEIGHT`]
  /// apart.
  ///
  /// Returns the number of lines drawn, zero for empty text.
  pub fn draw_wrapped(&mut self, x: i64, y: i64, text: &str) -> usize {
    let lines = hard_wrap(text, WRAP_WIDTH);
    let count = lines.len();
    for (idx, line) in lines.into_iter().enumerate() {
      self.draw_string(x, y - line_offset(idx), line);
    }
    count
  }

  /// Finishes the current page and starts a new one.
  pub fn show_page(&mut self) { self.pages.push(Page::default()); }

  /// All pages, including the current one.
  pub fn pages(&self) -> &[Page] { &self.pages }

  /// Every run on every page, in drawing order.
  pub fn runs(&self) -> impl Iterator<Item = &TextRun> { self.pages.iter().flat_map(|p| &p.runs) }

  /// The page currently drawn on.
  fn current_page(&mut self) -> &mut Page {
    if self.pages.is_empty() {
      self.pages.push(Page::default());
    }
    let last = self.pages.len() - 1;
    &mut self.pages[last]
  }
}

/// Vertical distance of the `idx`-th line below the first one.
pub(crate) fn line_offset(idx: usize) -> i64 { idx as i64 * LINE_HEIGHT }
