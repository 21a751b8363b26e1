use super::*;

const FORM: &str = r#"
researcher_name = "A. Lee"
project_name = "P1"
join_date = "2024-01-01"
fill_date = "2024-06-01"

[[publications]]
author_names = "Lee, A. and Chen, B."
title = "On Logbooks"
journal_name = "Journal of Records"
doi = "10.1000/xyz"
open_access_links = ["http://a"]
data_code_links = ["http://data/one", "http://data/two"]

[[publications]]
title = "A Second Look"
"#;

#[traced_test]
#[test]
fn test_form_file_to_files_on_disk() -> TestResult<()> {
  let dir = tempdir()?;
  let form_path = dir.path().join("form.toml");
  std::fs::write(&form_path, FORM)?;

  let form = FormBuilder::from_path(&form_path)?.build()?;
  let config = Config::default().with_output_dir(dir.path().join("out"));
  let (document_path, table_path) =
    logbook::export(&form, &config)?.write_to(&config.output_dir, &config)?;

  let content = pdf::PDFAnalyzer::new().analyze(&document_path)?;
  assert_eq!(content.metadata.title.as_deref(), Some("Research Dissemination Metadata"));
  assert!(content.runs().any(|r| r.text == "DOI: 10.1000/xyz"));
  assert!(content.runs().any(|r| r.text == "Publication 2"));

  let rows = data_rows(&std::fs::read(&table_path)?);
  assert_eq!(rows.len(), 2);
  assert_eq!(&rows[0][13], "http://data/one|http://data/two");
  assert_eq!(table::split_links(&rows[0][13]), form.publications[0].data_code_links);
  assert_eq!(&rows[1][5], "A Second Look");
  Ok(())
}

#[test]
fn test_flowing_layout_from_config_file() -> TestResult<()> {
  let dir = tempdir()?;
  let config_path = dir.path().join("config.toml");
  std::fs::write(&config_path, "layout = \"flowing\"\ndocument_name = \"lee.pdf\"\n")?;
  let config = Config::load(&config_path)?.with_output_dir(dir.path());

  let mut form = lee_form();
  form.publications = vec![form.publications[0].clone(); 8];
  let (document_path, _) = logbook::export(&form, &config)?.write_to(dir.path(), &config)?;

  assert!(document_path.ends_with("lee.pdf"));
  let content = pdf::PDFAnalyzer::new().analyze(&document_path)?;
  assert!(content.pages.len() > 1);
  assert!(content.runs().all(|r| r.y >= 72));
  Ok(())
}

#[test]
fn test_legacy_layout_stays_on_one_page() -> TestResult<()> {
  let mut form = lee_form();
  form.publications = vec![form.publications[0].clone(); 8];

  let content = pdf::inspect(&pdf::render(&form, LayoutStyle::Legacy)?)?;
  assert_eq!(content.pages.len(), 1);
  assert!(content.runs().any(|r| r.y < 0));
  Ok(())
}

#[test]
fn test_incomplete_form_produces_nothing() {
  let dir = tempdir().unwrap();
  let draft = FormBuilder::default().with_researcher_name("A. Lee");

  let err = draft.build().unwrap_err();
  assert!(matches!(err, LogbookError::MissingField("Project Name")));
  assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
