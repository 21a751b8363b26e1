//! Module for showing the text of a generated document.

use super::*;

/// Function for the [`Commands::Inspect`] in the CLI.
pub fn inspect<I: UserInteraction>(interaction: &I, document: &Path) -> Result<()> {
  let content = PDFAnalyzer::new().analyze(document)?;
  debug!(pages = content.pages.len(), "Read {document:?}");
  interaction.reply(ResponseContent::Document(&content))
}
