use super::*;

#[traced_test]
#[test]
fn test_long_author_list() -> TestResult<()> {
  let form = lee_form();
  let artifacts = logbook::export(&form, &Config::default())?;

  let content = pdf::inspect(&artifacts.document)?;
  let authors = block_after(&content, "Author Names:");
  assert_eq!(authors.len(), 3);
  assert!(authors.iter().all(|r| r.text.chars().all(|c| c == 'X')));
  assert_eq!(authors.iter().map(|r| r.text.len()).collect::<Vec<_>>(), vec![50, 50, 20]);

  let rows = data_rows(&artifacts.table);
  assert_eq!(rows.len(), 1);
  assert_eq!(&rows[0][12], "");
  assert_eq!(&rows[0][13], "");
  Ok(())
}

#[test]
fn test_two_open_access_links() -> TestResult<()> {
  let mut form = lee_form();
  form.publications[0].open_access_links = vec!["http://a".to_string(), "http://b".to_string()];
  let artifacts = logbook::export(&form, &Config::default())?;

  let content = pdf::inspect(&artifacts.document)?;
  let label = content.runs().find(|r| r.text == "Open Access Links:").unwrap();
  assert_eq!(label.x, LABEL_X);

  let links = block_after(&content, "Open Access Links:");
  assert_eq!(links.len(), 2);
  assert_eq!((links[0].y, links[0].text.as_str()), (label.y - LINE_HEIGHT, "http://a"));
  assert_eq!((links[1].y, links[1].text.as_str()), (label.y - 2 * LINE_HEIGHT, "http://b"));

  assert_eq!(&data_rows(&artifacts.table)[0][12], "http://a|http://b");
  Ok(())
}

#[test]
fn test_wrapped_author_lines_follow_length() -> TestResult<()> {
  for (length, expected) in [(1, 1), (49, 1), (50, 1), (51, 2), (100, 2), (101, 3), (250, 5)] {
    let mut form = lee_form();
    form.publications[0].author_names = "a".repeat(length);

    let content = pdf::inspect(&pdf::render(&form, LayoutStyle::Legacy)?)?;
    assert_eq!(block_after(&content, "Author Names:").len(), expected, "length {length}");
  }
  Ok(())
}

#[test]
fn test_empty_author_list_still_reserves_a_line() -> TestResult<()> {
  let mut form = lee_form();
  form.publications[0].author_names.clear();

  let content = pdf::inspect(&pdf::render(&form, LayoutStyle::Legacy)?)?;
  assert!(block_after(&content, "Author Names:").is_empty());
  let y_of = |text: &str| content.runs().find(|r| r.text == text).unwrap().y;
  assert_eq!(y_of("Title:"), y_of("Publication 1") - 3 * LINE_HEIGHT);
  Ok(())
}

#[test]
fn test_rows_repeat_researcher_details() -> TestResult<()> {
  let mut form = lee_form();
  for idx in 0..3 {
    form.publications.push(Publication { title: format!("Extra {idx}"), ..Default::default() });
  }

  let rows = data_rows(&table::render(&form)?);
  assert_eq!(rows.len(), form.publications.len());
  for row in &rows {
    assert_eq!(&row[0], "A. Lee");
    assert_eq!(&row[1], "P1");
    assert_eq!(&row[2], "2024-01-01");
    assert_eq!(&row[3], "2024-06-01");
  }
  Ok(())
}

#[test]
fn test_both_artifacts_are_reproducible() -> TestResult<()> {
  let form = lee_form();
  for style in [LayoutStyle::Legacy, LayoutStyle::Flowing] {
    let config = Config::default().with_layout(style);
    assert_eq!(logbook::export(&form, &config)?, logbook::export(&form, &config)?);
  }
  Ok(())
}
