//! Talking to the person at the terminal.
//!
//! Commands only see the [`UserInteraction`] trait, so they can be driven by
//! scripted answers in tests.

use dialoguer::{Confirm, Input};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Prefix for section headings
pub static SECTION_PREFIX: &str = "» ";
/// Branch character for lists
pub static ITEM_PREFIX: &str = "├─";
/// Branch character for the last list entry
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A step finished
  Success(&'a str),
  /// A command failed
  Error(LogbookdError),
  /// Neutral information
  Info(&'a str),
  /// A heading introducing the prompts that follow
  Section(&'a str),
  /// Text recovered from a generated document
  Document(&'a PDFContent),
}

/// The operations commands need from a user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks for a line of text, which may be empty.
  fn prompt(&self, message: &str) -> Result<String>;
  /// Shows a message.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction on the attached terminal.
pub struct Terminal {
  /// Answer every confirmation with yes
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      trace!("Accepting by default: {message}");
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{}{message}", style(PROMPT_PREFIX).cyan()))
        .default(false)
        .interact()?,
    )
  }

  fn prompt(&self, message: &str) -> Result<String> {
    Ok(
      Input::<String>::new()
        .with_prompt(format!("{}{message}", style(PROMPT_PREFIX).cyan()))
        .allow_empty(true)
        .interact_text()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Success(message) => {
        println!("{}{}", style(SUCCESS_PREFIX).green(), message)
      },
      ResponseContent::Error(error) => {
        eprintln!("{}{}", style(ERROR_PREFIX).red(), style(error).red())
      },
      ResponseContent::Info(message) => println!("{}{}", style(INFO_PREFIX).blue(), message),
      ResponseContent::Section(title) => {
        println!("\n{}{}", style(SECTION_PREFIX).cyan(), style(title).bold())
      },
      ResponseContent::Document(content) => print_document(content),
    }
    Ok(())
  }
}

/// Prints the title and every run, page by page.
fn print_document(content: &PDFContent) {
  let title = content.metadata.title.as_deref().unwrap_or("(untitled)");
  println!("{}{}", style(INFO_PREFIX).blue(), style(title).bold());

  for page in &content.pages {
    println!("\n{} {}", style("Page").cyan(), style(page.page_number).cyan());
    for (idx, run) in page.runs.iter().enumerate() {
      let branch = if idx + 1 == page.runs.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
      let position = format!("({}, {})", run.x, run.y);
      println!("{} {} {}", style(branch).dim(), style(position).dim(), run.text);
    }
  }
}
