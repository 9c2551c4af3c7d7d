//! Line-oriented terminal front end for a [`TagEditor`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use tagforge_core::{DomainError, ProductId};
use tagforge_infra::{IdentifierSource, ImageSource, ProductStore};
use tagforge_preview::TextTagRenderer;

use crate::session::{EditorError, TagEditor};

pub const HELP: &str = "\
commands:
  set <field> <value>   edit name, price, identifier or image_ref
  generate              replace the identifier with a generated one
  image <path>          attach a local jpeg/png/webp image
  save                  store the current tag
  load <id>             open a stored tag
  list                  list stored tags
  new                   start a blank tag
  show                  print the preview
  json                  print the preview as JSON
  help                  print this help
  quit                  leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set { field: String, value: String },
    Generate,
    Image(PathBuf),
    Save,
    Load(ProductId),
    List,
    New,
    Show,
    Json,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(DomainError::validation("usage: set <field> <value>"));
                }
                ShellCommand::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "generate" | "gen" => ShellCommand::Generate,
            "image" => {
                if rest.is_empty() {
                    return Err(DomainError::validation("usage: image <path>"));
                }
                ShellCommand::Image(PathBuf::from(rest))
            }
            "save" => ShellCommand::Save,
            "load" => ShellCommand::Load(rest.parse()?),
            "list" | "ls" => ShellCommand::List,
            "new" => ShellCommand::New,
            "show" | "" => ShellCommand::Show,
            "json" => ShellCommand::Json,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(DomainError::validation(format!(
                    "unknown command '{other}' (try 'help')"
                )));
            }
        };

        Ok(command)
    }
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Terminal shell over an editor session.
pub struct Shell<S, G, I> {
    editor: TagEditor<S, G>,
    images: I,
    renderer: TextTagRenderer,
}

impl<S, G, I> Shell<S, G, I>
where
    S: ProductStore,
    G: IdentifierSource,
    I: ImageSource,
{
    pub fn new(editor: TagEditor<S, G>, images: I, renderer: TextTagRenderer) -> Self {
        Self {
            editor,
            images,
            renderer,
        }
    }

    pub fn editor(&self) -> &TagEditor<S, G> {
        &self.editor
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Outcome, EditorError> {
        let text = match command {
            ShellCommand::Set { field, value } => {
                self.editor.edit_named(&field, value)?;
                self.preview()
            }
            ShellCommand::Generate => {
                self.editor.generate_identifier()?;
                self.preview()
            }
            ShellCommand::Image(path) => {
                self.editor.attach_image(&self.images, &path)?;
                format!("image: {}", self.editor.product().image_ref())
            }
            ShellCommand::Save => {
                let stored = self.editor.save()?;
                format!("saved {}", stored.id)
            }
            ShellCommand::Load(id) => {
                self.editor.load(id)?;
                self.preview()
            }
            ShellCommand::List => {
                let records = self.editor.list()?;
                if records.is_empty() {
                    "no saved tags".to_string()
                } else {
                    records
                        .iter()
                        .map(|r| {
                            format!(
                                "{}  {}  {}  {}",
                                r.id,
                                r.product.name(),
                                r.product.price(),
                                r.product.identifier()
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            ShellCommand::New => {
                self.editor.new_tag();
                self.preview()
            }
            ShellCommand::Show => self.preview(),
            ShellCommand::Json => self.editor.view_json()?,
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Continue(text))
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Command errors are printed and the session continues; only I/O errors
    /// end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.preview())?;

        for line in input.lines() {
            let line = line?;

            let result = line
                .parse::<ShellCommand>()
                .map_err(EditorError::from)
                .and_then(|command| self.execute(command));

            match result {
                Ok(Outcome::Continue(text)) => writeln!(output, "{text}")?,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    tracing::debug!(error = %e, line = %line, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }

    fn preview(&self) -> String {
        self.renderer.render(self.editor.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_spaces_in_value() {
        let command: ShellCommand = "set name  Premium Phone ".parse().unwrap();
        assert_eq!(
            command,
            ShellCommand::Set {
                field: "name".to_string(),
                value: "Premium Phone".to_string()
            }
        );
    }

    #[test]
    fn set_without_value_clears() {
        let command: ShellCommand = "set identifier".parse().unwrap();
        assert_eq!(
            command,
            ShellCommand::Set {
                field: "identifier".to_string(),
                value: String::new()
            }
        );
    }

    #[test]
    fn parses_simple_verbs() {
        assert_eq!("generate".parse::<ShellCommand>().unwrap(), ShellCommand::Generate);
        assert_eq!("SAVE".parse::<ShellCommand>().unwrap(), ShellCommand::Save);
        assert_eq!("".parse::<ShellCommand>().unwrap(), ShellCommand::Show);
        assert_eq!("exit".parse::<ShellCommand>().unwrap(), ShellCommand::Quit);
        assert_eq!(
            "image /tmp/a b.png".parse::<ShellCommand>().unwrap(),
            ShellCommand::Image(PathBuf::from("/tmp/a b.png"))
        );
    }

    #[test]
    fn load_requires_a_valid_id() {
        let err = "load nope".parse::<ShellCommand>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));

        let id = ProductId::new();
        assert_eq!(
            format!("load {id}").parse::<ShellCommand>().unwrap(),
            ShellCommand::Load(id)
        );
    }

    #[test]
    fn json_command_prints_the_view_model() {
        use tagforge_infra::{InMemoryProductStore, LocalImageSource, RandomIdentifierSource};

        let editor = TagEditor::new(
            &crate::EditorConfig::default(),
            InMemoryProductStore::new(),
            RandomIdentifierSource::seeded(13, 2),
        );
        let mut shell = Shell::new(editor, LocalImageSource::new(), TextTagRenderer::default());

        let Outcome::Continue(text) = shell.execute(ShellCommand::Json).unwrap() else {
            panic!("json must not quit");
        };
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["displayPrice"], "899.99");
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        let err = "paint".parse::<ShellCommand>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
