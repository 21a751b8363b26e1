//! Module for checking form files without exporting them.

use super::*;

/// Function for the [`Commands::Check`] in the CLI.
pub fn check<I: UserInteraction>(interaction: &I, form_path: &Path) -> Result<()> {
  let form = FormBuilder::from_path(form_path)?.build()?;
  interaction.reply(ResponseContent::Success(&format!(
    "All required fields are filled in ({} publication(s))",
    form.publications.len()
  )))
}
