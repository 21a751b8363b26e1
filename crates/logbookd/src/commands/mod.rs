use super::*;

pub mod check;
pub mod init;
pub mod inspect;
pub mod new;
pub mod render;

pub use check::check;
pub use init::init;
pub use inspect::inspect;
pub use new::new_form;
pub use render::render;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a default configuration file
  Init,

  /// Fill in a logbook form on the terminal and export it
  New(OutputArgs),

  /// Export a logbook from a TOML or JSON form file
  Render(RenderArgs),

  /// Check a form file for missing required fields without writing anything
  Check {
    /// Path to the form file (TOML, or JSON with a `.json` extension)
    form: PathBuf,
  },

  /// Print the title and text runs of a generated PDF
  Inspect {
    /// Path to the PDF document
    document: PathBuf,
  },
}

/// Where to write artifacts and how to lay them out, overriding the config.
#[derive(Args, Clone, Default)]
pub struct OutputArgs {
  /// Directory receiving the PDF and CSV files
  #[arg(long, short)]
  pub output: Option<PathBuf>,

  /// Layout style of the PDF (legacy, flowing)
  #[arg(long, value_parser = parse_layout)]
  pub layout: Option<LayoutStyle>,
}

impl OutputArgs {
  /// Applies the overrides given on the command line.
  pub fn apply(&self, mut config: Config) -> Config {
    if let Some(output) = &self.output {
      config = config.with_output_dir(output);
    }
    if let Some(layout) = self.layout {
      config = config.with_layout(layout);
    }
    config
  }
}

/// Arguments for [`Commands::Render`]
#[derive(Args, Clone)]
pub struct RenderArgs {
  /// Path to the form file (TOML, or JSON with a `.json` extension)
  pub form: PathBuf,

  /// Output overrides
  #[command(flatten)]
  pub output: OutputArgs,
}

/// Parses a layout style for clap.
fn parse_layout(s: &str) -> std::result::Result<LayoutStyle, String> {
  s.parse().map_err(|e: LogbookError| e.to_string())
}

/// Exports `form` and writes both files, asking before overwriting.
pub(crate) fn write_artifacts<I: UserInteraction>(
  interaction: &I,
  form: &ResearcherForm,
  config: &Config,
) -> Result<()> {
  let existing: Vec<PathBuf> = [&config.document_name, &config.table_name]
    .into_iter()
    .map(|name| config.output_dir.join(name))
    .filter(|path| path.exists())
    .collect();

  if !existing.is_empty() {
    let listed: Vec<String> = existing.iter().map(|p| p.display().to_string()).collect();
    if !interaction.confirm(&format!("Overwrite {}?", listed.join(" and ")))? {
      interaction.reply(ResponseContent::Info("Nothing was written"))?;
      return Ok(());
    }
  }

  let artifacts = logbook::export(form, config)?;
  let (document_path, table_path) = artifacts.write_to(&config.output_dir, config)?;

  interaction.reply(ResponseContent::Success(&format!(
    "Wrote {} ({} layout)",
    document_path.display(),
    config.layout
  )))?;
  interaction.reply(ResponseContent::Success(&format!("Wrote {}", table_path.display())))
}

#[cfg(test)]
pub(crate) mod test_support {
  use std::{cell::RefCell, collections::VecDeque};

  use super::*;

  /// Answers prompts from a script and records everything replied.
  pub struct Scripted {
    /// Remaining prompt answers
    answers:     RefCell<VecDeque<String>>,
    /// Answer to every confirmation
    pub confirm: bool,
    /// Replies, rendered as text
    pub replies: RefCell<Vec<String>>,
    /// Prompts asked so far
    pub prompts: RefCell<Vec<String>>,
  }

  impl Scripted {
    /// Creates a script that confirms everything.
    pub fn new(answers: &[&str]) -> Self {
      Self {
        answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
        confirm: true,
        replies: RefCell::default(),
        prompts: RefCell::default(),
      }
    }

    /// Whether any reply contains `needle`.
    pub fn replied(&self, needle: &str) -> bool {
      self.replies.borrow().iter().any(|r| r.contains(needle))
    }
  }

  impl UserInteraction for Scripted {
    fn confirm(&self, message: &str) -> Result<bool> {
      self.prompts.borrow_mut().push(message.to_string());
      Ok(self.confirm)
    }

    fn prompt(&self, message: &str) -> Result<String> {
      self.prompts.borrow_mut().push(message.to_string());
      Ok(self.answers.borrow_mut().pop_front().expect("script ran out of answers"))
    }

    fn reply(&self, content: ResponseContent) -> Result<()> {
      let text = match content {
        ResponseContent::Success(m) | ResponseContent::Info(m) | ResponseContent::Section(m) => {
          m.to_string()
        },
        ResponseContent::Error(e) => e.to_string(),
        ResponseContent::Document(c) => format!("{c:?}"),
      };
      self.replies.borrow_mut().push(text);
      Ok(())
    }
  }
}
