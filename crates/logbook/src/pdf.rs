//! PDF serialization of laid out logbooks, and reading them back.
//!
//! Documents are written with `lopdf`: one content stream per page, every text
//! run in its own `BT`/`ET` block, Helvetica 12 with `WinAnsiEncoding`. No
//! creation dates or file identifiers are written, so the same form always
//! produces the same bytes.
//!
//! [`PDFAnalyzer`] reverses the process for documents produced here, which is
//! what the tests and the `inspect` command rely on.

use lopdf::{
  content::{Content, Operation},
  dictionary, Document, Object, ObjectId, Stream,
};

use super::*;
use crate::layout::{layout, Canvas, TextRun};

/// Resource name of the single font.
const FONT_NAME: &str = "F1";
/// Font size of every run.
const FONT_SIZE: i64 = 12;

/// Lays out `form` and serializes it to PDF bytes.
///
/// Text is limited to Windows-1252; other characters show up as `?`.
#[instrument(skip(form), fields(publications = form.publications.len()), level = "debug")]
pub fn render(form: &ResearcherForm, style: LayoutStyle) -> Result<Vec<u8>> {
  write_canvas(&layout(form, style))
}

/// Serializes a canvas, one PDF page per canvas page.
pub fn write_canvas(canvas: &Canvas) -> Result<Vec<u8>> {
  let mut doc = Document::with_version("1.5");
  let pages_id = doc.new_object_id();

  let font_id = doc.add_object(dictionary! {
    "Type" => "Font",
    "Subtype" => "Type1",
    "BaseFont" => "Helvetica",
    "Encoding" => "WinAnsiEncoding",
  });
  let resources_id = doc.add_object(dictionary! {
    "Font" => dictionary! { FONT_NAME => font_id },
  });

  let mut kids: Vec<Object> = Vec::with_capacity(canvas.pages().len());
  for (number, page) in canvas.pages().iter().enumerate() {
    let operations: Vec<Operation> = page.runs.iter().flat_map(text_operations).collect();
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
      "Type" => "Page",
      "Parent" => pages_id,
      "Contents" => content_id,
    });
    trace!(page = number + 1, runs = page.runs.len(), "Wrote page {page_id:?}");
    kids.push(page_id.into());
  }

  let page_count = kids.len() as i64;
  let pages = dictionary! {
    "Type" => "Pages",
    "Kids" => kids,
    "Count" => page_count,
    "Resources" => resources_id,
    "MediaBox" => vec![
      0.into(),
      0.into(),
      canvas.page_size.width.into(),
      canvas.page_size.height.into(),
    ],
  };
  doc.objects.insert(pages_id, Object::Dictionary(pages));

  let catalog_id = doc.add_object(dictionary! {
    "Type" => "Catalog",
    "Pages" => pages_id,
  });
  let info_id = doc.add_object(dictionary! {
    "Title" => Object::string_literal(encode_text(&canvas.title)),
  });
  doc.trailer.set("Root", catalog_id);
  doc.trailer.set("Info", info_id);

  let mut bytes = Vec::new();
  doc.save_to(&mut bytes)?;
  debug!("Serialized {} page(s) into {} bytes", canvas.pages().len(), bytes.len());
  Ok(bytes)
}

/// Operators drawing one run.
fn text_operations(run: &TextRun) -> [Operation; 5] {
  [
    Operation::new("BT", vec![]),
    Operation::new("Tf", vec![FONT_NAME.into(), FONT_SIZE.into()]),
    Operation::new("Td", vec![run.x.into(), run.y.into()]),
    Operation::new("Tj", vec![Object::string_literal(encode_text(&run.text))]),
    Operation::new("ET", vec![]),
  ]
}

/// Encodes text for the WinAnsi font encoding.
///
/// Characters outside Windows-1252 are written as `?`, one byte per
/// character, so wrapped chunks keep their width.
fn encode_text(text: &str) -> Vec<u8> {
  let mut bytes = Vec::with_capacity(text.len());
  let mut buffer = [0; 4];
  let mut replaced = false;
  for c in text.chars() {
    let (encoded, _, unmappable) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut buffer));
    if unmappable {
      replaced = true;
      bytes.push(b'?');
    } else {
      bytes.extend_from_slice(&encoded);
    }
  }
  if replaced {
    warn!("Replaced characters Helvetica cannot show with '?' in {text:?}");
  }
  bytes
}

/// Decodes text written by [`encode_text`].
fn decode_text(bytes: &[u8]) -> String {
  let (text, ..) = encoding_rs::WINDOWS_1252.decode(bytes);
  text.into_owned()
}

/// Everything [`PDFAnalyzer`] recovers from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PDFContent {
  /// Document information
  pub metadata: PDFMetadata,
  /// Pages in document order
  pub pages:    Vec<PageContent>,
}

impl PDFContent {
  /// Every run on every page, in drawing order.
  pub fn runs(&self) -> impl Iterator<Item = &TextRun> { self.pages.iter().flat_map(|p| &p.runs) }
}

/// Entries of the document information dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PDFMetadata {
  /// Document title, if set
  pub title: Option<String>,
}

/// Text runs found on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
  /// One-based page number
  pub page_number: u32,
  /// Runs with the position set by the preceding `Td`
  pub runs:        Vec<TextRun>,
}

/// Reads logbook documents back into positioned text.
#[derive(Default)]
pub struct PDFAnalyzer;

impl PDFAnalyzer {
  /// Creates an analyzer.
  pub fn new() -> Self { Self }

  /// Reads the document at `path`.
  pub fn analyze<P: AsRef<Path>>(&self, path: P) -> Result<PDFContent> {
    let doc = Document::load(path)?;
    self.analyze_document(&doc)
  }

  /// Reads a document held in memory.
  pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<PDFContent> {
    let doc = Document::load_mem(bytes)?;
    self.analyze_document(&doc)
  }

  /// Collects metadata and the runs of every page.
  fn analyze_document(&self, doc: &Document) -> Result<PDFContent> {
    let metadata = self.extract_metadata(doc)?;

    let mut pages = Vec::new();
    for (page_number, page_id) in doc.get_pages() {
      pages.push(PageContent { page_number, runs: self.extract_runs(doc, page_id)? });
    }

    Ok(PDFContent { metadata, pages })
  }

  /// Reads the information dictionary referenced from the trailer.
  fn extract_metadata(&self, doc: &Document) -> Result<PDFMetadata> {
    let info_ref = doc.trailer.get(b"Info").ok().and_then(|o| o.as_reference().ok());

    let info = match info_ref {
      Some(reference) => doc.get_object(reference).and_then(|obj| obj.as_dict())?,
      None => return Ok(PDFMetadata::default()),
    };

    let title = info.get(b"Title").ok().and_then(|obj| obj.as_str().ok()).map(decode_text);
    Ok(PDFMetadata { title })
  }

  /// Pairs every `Tj` with the position of the last `Td`.
  fn extract_runs(&self, doc: &Document, page_id: ObjectId) -> Result<Vec<TextRun>> {
    let content = Content::decode(&doc.get_page_content(page_id)?)?;

    let mut position = (0, 0);
    let mut runs = Vec::new();
    for operation in content.operations {
      match (operation.operator.as_str(), operation.operands.as_slice()) {
        ("Td", [x, y]) => position = (number(x), number(y)),
        ("Tj", [text]) => {
          let text = text.as_str().map(decode_text)?;
          runs.push(TextRun { x: position.0, y: position.1, text });
        },
        _ => {},
      }
    }
    Ok(runs)
  }
}

/// Reads a numeric operand, truncating reals.
fn number(object: &Object) -> i64 {
  match object {
    Object::Integer(value) => *value,
    Object::Real(value) => *value as i64,
    _ => 0,
  }
}

/// Reads a document produced by [`render`] from memory.
pub fn inspect(bytes: &[u8]) -> Result<PDFContent> { PDFAnalyzer::new().analyze_bytes(bytes) }
