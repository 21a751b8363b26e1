//! Researcher and publication records.
//!
//! A [`ResearcherForm`] is what both generators consume. It is produced by a
//! [`FormBuilder`], which holds a partially filled form (from an interactive
//! session or a form file) and performs the presence check on
//! [`FormBuilder::build`].
//!
//! Form files are TOML or JSON. Keys are snake_case; the labels shown on the
//! original form ("Author Names", "Open Access Link", ...) are accepted too:
//!
//! ```toml
//! researcher_name = "A. Lee"
//! project_name = "P1"
//! join_date = "2024-01-01"
//! fill_date = "2024-06-01"
//!
//! [[publications]]
//! author_names = "A. Lee, B. Chen"
//! title = "On Logbooks"
//! open_access_links = ["http://a", "http://b"]
//! ```

use super::*;

/// One bibliographic entry.
///
/// Every field is optional in form files and defaults to empty. Empty fields are
/// rendered as blanks, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
  /// Author list as free text
  #[serde(alias = "Author Names")]
  pub author_names:       String,
  /// Publication title
  #[serde(alias = "Title")]
  pub title:              String,
  /// Journal the publication appeared in
  #[serde(alias = "Journal Name")]
  pub journal_name:       String,
  /// Journal volume
  #[serde(alias = "Volume")]
  pub volume:             String,
  /// Publication year, kept as entered
  #[serde(alias = "Year")]
  pub year:               String,
  /// Article number within the volume
  #[serde(alias = "Article Number")]
  pub article_number:     String,
  /// Digital Object Identifier, not validated
  #[serde(alias = "DOI")]
  pub doi:                String,
  /// Current impact factor of the journal
  #[serde(alias = "Impact Factor", alias = "Impact Factor (Current)")]
  pub impact_factor:      String,
  /// Links to open access full texts
  #[serde(alias = "Open Access Link", alias = "Open Access Links")]
  pub open_access_links:  Vec<String>,
  /// Links to datasets and code
  #[serde(alias = "Data and Codes Links")]
  pub data_code_links:    Vec<String>,
}

/// A submitted logbook form.
///
/// Generators borrow it and never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherForm {
  /// Name of the researcher filling in the logbook
  pub researcher_name: String,
  /// Project the publications belong to
  pub project_name:    String,
  /// Date the researcher joined the project
  pub join_date:       NaiveDate,
  /// Date the form was filled in
  pub fill_date:       NaiveDate,
  /// Publications in the order they were entered
  pub publications:    Vec<Publication>,
}

impl ResearcherForm {
  /// Checks that every required top-level field is present.
  ///
  /// Required are the researcher name, the project name and at least one
  /// publication. Dates are always present once the form is built. The first
  /// missing field is reported.
  pub fn validate(&self) -> Result<()> {
    if self.researcher_name.is_empty() {
      return Err(LogbookError::MissingField(RESEARCHER_NAME));
    }
    if self.project_name.is_empty() {
      return Err(LogbookError::MissingField(PROJECT_NAME));
    }
    if self.publications.is_empty() {
      return Err(LogbookError::NoPublications);
    }
    Ok(())
  }
}

/// Label of the researcher name field.
pub const RESEARCHER_NAME: &str = "Researcher's Name";
/// Label of the project name field.
pub const PROJECT_NAME: &str = "Project Name";
/// Label of the joining date field.
pub const JOIN_DATE: &str = "Joining Date";
/// Label of the form filling date field.
pub const FILL_DATE: &str = "Form Filling Date";

/// A form that may still be missing fields.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use logbook::{error::LogbookError, FormBuilder, Publication};
///
/// let draft = FormBuilder::default()
///   .with_researcher_name("A. Lee")
///   .with_project_name("P1")
///   .with_join_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
///
/// assert!(matches!(draft.clone().build(), Err(LogbookError::MissingField("Form Filling Date"))));
///
/// let form = draft
///   .with_fill_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
///   .with_publication(Publication::default())
///   .build()
///   .unwrap();
/// assert_eq!(form.publications.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBuilder {
  /// Name of the researcher
  #[serde(
    alias = "Researcher's Name",
    alias = "Researcher Name",
    skip_serializing_if = "Option::is_none"
  )]
  pub researcher_name: Option<String>,
  /// Project name
  #[serde(alias = "Project Name", skip_serializing_if = "Option::is_none")]
  pub project_name:    Option<String>,
  /// Joining date
  #[serde(alias = "Joining Date", alias = "Join Date", skip_serializing_if = "Option::is_none")]
  pub join_date:       Option<NaiveDate>,
  /// Form filling date
  #[serde(
    alias = "Form Filling Date",
    alias = "Fill Date",
    skip_serializing_if = "Option::is_none"
  )]
  pub fill_date:       Option<NaiveDate>,
  /// Publications entered so far
  pub publications:    Vec<Publication>,
}

impl FormBuilder {
  /// Loads a draft from a form file.
  ///
  /// Files ending in `.json` are read as JSON, anything else as TOML.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading form from {path:?}");
    let content = std::fs::read_to_string(path)?;

    let is_json = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let draft: Self =
      if is_json { serde_json::from_str(&content)? } else { toml::from_str(&content)? };

    trace!("Loaded form draft: {draft:?}");
    Ok(draft)
  }

  /// Saves the draft as TOML so it can be rendered again later.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Sets the researcher name.
  pub fn with_researcher_name(mut self, name: impl Into<String>) -> Self {
    self.researcher_name = Some(name.into());
    self
  }

  /// Sets the project name.
  pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
    self.project_name = Some(name.into());
    self
  }

  /// Sets the joining date.
  pub fn with_join_date(mut self, date: NaiveDate) -> Self {
    self.join_date = Some(date);
    self
  }

  /// Sets the form filling date.
  pub fn with_fill_date(mut self, date: NaiveDate) -> Self {
    self.fill_date = Some(date);
    self
  }

  /// Appends a publication.
  pub fn with_publication(mut self, publication: Publication) -> Self {
    self.publications.push(publication);
    self
  }

  /// Runs the presence check and produces the final form.
  ///
  /// Fields are checked in the order they appear on the form: researcher name,
  /// project name, joining date, form filling date, publications.
  pub fn build(self) -> Result<ResearcherForm> {
    let researcher_name = self
      .researcher_name
      .filter(|s| !s.is_empty())
      .ok_or(LogbookError::MissingField(RESEARCHER_NAME))?;
    let project_name = self
      .project_name
      .filter(|s| !s.is_empty())
      .ok_or(LogbookError::MissingField(PROJECT_NAME))?;
    let join_date = self.join_date.ok_or(LogbookError::MissingField(JOIN_DATE))?;
    let fill_date = self.fill_date.ok_or(LogbookError::MissingField(FILL_DATE))?;

    let form = ResearcherForm {
      researcher_name,
      project_name,
      join_date,
      fill_date,
      publications: self.publications,
    };
    form.validate()?;
    Ok(form)
  }
}
