//! Module for exporting a logbook from a form file.

use super::*;

/// Function for the [`Commands::Render`] in the CLI.
pub fn render<I: UserInteraction>(
  interaction: &I,
  config: Config,
  args: &RenderArgs,
) -> Result<()> {
  let config = args.output.apply(config);

  let form = FormBuilder::from_path(&args.form)?.build()?;
  interaction.reply(ResponseContent::Info(&format!(
    "Loaded {} publication(s) for {} ({})",
    form.publications.len(),
    form.researcher_name,
    form.project_name,
  )))?;

  write_artifacts(interaction, &form, &config)
}
