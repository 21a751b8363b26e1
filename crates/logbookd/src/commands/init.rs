//! Module for setting up a `logbook` configuration.

use super::*;

/// Function for the [`Commands::Init`] in the CLI.
pub fn init<I: UserInteraction>(interaction: &I, config_path: &Path) -> Result<()> {
  if config_path.exists()
    && !interaction.confirm(&format!(
      "A configuration already exists at {}, do you want to overwrite it?",
      config_path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info(
      "Kept the existing configuration. Pass a different location with --config",
    ))?;
    return Ok(());
  }

  let mut config = Config::default();
  if !interaction.confirm("Write generated files to the current directory?")? {
    let dir = interaction.prompt("Output directory")?;
    if !dir.trim().is_empty() {
      config = config.with_output_dir(dir.trim());
    }
  }

  config.save(config_path)?;
  interaction.reply(ResponseContent::Success(&format!(
    "Created logbook configuration with\nConfig path: {}\nOutput directory: {}\nLayout: {}",
    config_path.display(),
    config.output_dir.display(),
    config.layout,
  )))
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;
  use crate::commands::test_support::*;

  #[test]
  fn test_writes_default_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logbook").join("config.toml");

    let interaction = Scripted::new(&[]);
    init(&interaction, &path).unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default());
    assert!(interaction.replied("Created logbook configuration"));
  }

  #[test]
  fn test_asks_for_output_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut interaction = Scripted::new(&["/srv/logbooks"]);
    interaction.confirm = false;
    init(&interaction, &path).unwrap();

    assert_eq!(Config::load(&path).unwrap().output_dir, PathBuf::from("/srv/logbooks"));
  }

  #[test]
  fn test_keeps_existing_config_when_declined() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "layout = \"flowing\"\n").unwrap();

    let mut interaction = Scripted::new(&[]);
    interaction.confirm = false;
    init(&interaction, &path).unwrap();

    assert_eq!(Config::load(&path).unwrap().layout, LayoutStyle::Flowing);
    assert!(interaction.replied("Kept the existing configuration"));
  }
}
