//! Module for filling in a logbook form on the terminal.
//!
//! Questions follow the order of the paper form: researcher details, the
//! number of publications, then every publication with its link lists. Dates
//! and counts are asked again until they parse; empty text answers are kept
//! and left to the presence check.

use chrono::NaiveDate;

use super::*;

/// Function for the [`Commands::New`] in the CLI.
pub fn new_form<I: UserInteraction>(
  interaction: &I,
  config: Config,
  args: &OutputArgs,
) -> Result<()> {
  let config = args.apply(config);
  let form = collect_form(interaction)?.build()?;
  write_artifacts(interaction, &form, &config)
}

/// Asks every question of the form.
pub(crate) fn collect_form<I: UserInteraction>(interaction: &I) -> Result<FormBuilder> {
  interaction.reply(ResponseContent::Section("Researcher"))?;
  let mut draft = FormBuilder::default()
    .with_researcher_name(interaction.prompt(logbook::form::RESEARCHER_NAME)?)
    .with_project_name(interaction.prompt(logbook::form::PROJECT_NAME)?)
    .with_join_date(prompt_date(interaction, logbook::form::JOIN_DATE)?)
    .with_fill_date(prompt_date(interaction, logbook::form::FILL_DATE)?);

  let count = prompt_count(interaction, "Number of Publications", 1)?;
  for number in 1..=count {
    interaction.reply(ResponseContent::Section(&format!("Publication {number}")))?;
    draft = draft.with_publication(collect_publication(interaction)?);
  }

  trace!("Collected draft: {draft:?}");
  Ok(draft)
}

/// Asks for the fields and links of one publication.
fn collect_publication<I: UserInteraction>(interaction: &I) -> Result<Publication> {
  Ok(Publication {
    author_names:      interaction.prompt("Author Names")?,
    title:             interaction.prompt("Title")?,
    journal_name:      interaction.prompt("Journal Name")?,
    volume:            interaction.prompt("Volume")?,
    year:              interaction.prompt("Year")?,
    article_number:    interaction.prompt("Article Number")?,
    doi:               interaction.prompt("DOI")?,
    impact_factor:     interaction.prompt("Impact Factor (Current)")?,
    open_access_links: prompt_links(interaction, "Open Access Link")?,
    data_code_links:   prompt_links(interaction, "Data and Codes Link")?,
  })
}

/// Asks how many links there are, then for each of them.
fn prompt_links<I: UserInteraction>(interaction: &I, label: &str) -> Result<Vec<String>> {
  let count = prompt_count(interaction, &format!("Number of {label}s"), 0)?;
  (1..=count).map(|number| interaction.prompt(&format!("{label} {number}"))).collect()
}

/// Asks for a `YYYY-MM-DD` date until one parses.
fn prompt_date<I: UserInteraction>(interaction: &I, label: &str) -> Result<NaiveDate> {
  loop {
    let answer = interaction.prompt(&format!("{label} (YYYY-MM-DD)"))?;
    match NaiveDate::parse_from_str(answer.trim(), "%Y-%m-%d") {
      Ok(date) => return Ok(date),
      Err(e) => {
        debug!("Rejected date {answer:?}: {e}");
        interaction.reply(ResponseContent::Info("Please enter a date like 2024-06-01"))?;
      },
    }
  }
}

/// Asks for a whole number of at least `min` until one parses.
fn prompt_count<I: UserInteraction>(interaction: &I, label: &str, min: usize) -> Result<usize> {
  loop {
    let answer = interaction.prompt(label)?;
    match answer.trim().parse::<usize>() {
      Ok(count) if count >= min => return Ok(count),
      _ => interaction
        .reply(ResponseContent::Info(&format!("Please enter a whole number of at least {min}")))?,
    }
  }
}
