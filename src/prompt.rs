//! Interactive prompts for person names and ambiguous-name choices
//!
//! Terminals get `dialoguer` prompts. When stdin is piped the same questions
//! are read line by line, so the binary stays scriptable.
//!
//! Both prompts report end of input, or a cancelled terminal read, as no
//! answer (`None`).

use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use crate::error::{DegreesError, Result};
use crate::names::{Candidate, Disambiguator};
use crate::schema::PersonId;

/// Question/answer channel with the user
pub trait Prompt {
    /// Ask for one line of input. `None` means end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>>;

    /// Show an informational line.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// dialoguer-backed prompt on the controlling terminal
pub struct TerminalPrompt {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        match Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text_on(&self.term)
        {
            Ok(answer) => Ok(Some(answer.trim().to_string())),
            Err(e) => unanswered(e),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.term.write_line(line)?;
        Ok(())
    }
}

/// End of input and interrupted reads mean no answer; anything else is a
/// prompt failure.
fn unanswered(err: dialoguer::Error) -> Result<Option<String>> {
    match err {
        dialoguer::Error::IO(e)
            if matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted) =>
        {
            Ok(None)
        }
        other => Err(DegreesError::Prompt {
            message: format!("input failed: {}", other),
        }),
    }
}

/// Line-oriented prompt over any reader/writer pair
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

/// Pick the prompt matching how the process was started.
pub fn open_prompt() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() && console::user_attended_stderr() {
        Box::new(TerminalPrompt::new())
    } else {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stderr()))
    }
}

/// Ask for a person's name. End of input yields an empty name.
pub fn ask_name(prompt: &mut dyn Prompt) -> Result<String> {
    Ok(prompt.ask("Name")?.unwrap_or_default())
}

/// Lists the candidates and asks for the intended person id
pub struct PromptDisambiguator<'p> {
    prompt: &'p mut dyn Prompt,
}

impl<'p> PromptDisambiguator<'p> {
    pub fn new(prompt: &'p mut dyn Prompt) -> Self {
        Self { prompt }
    }
}

impl Disambiguator for PromptDisambiguator<'_> {
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Result<Option<PersonId>> {
        self.prompt.say(&format!("Which '{}'?", name))?;
        for candidate in candidates {
            self.prompt.say(&format!(
                "ID: {}, Name: {}, Birth: {}",
                candidate.id,
                candidate.name,
                candidate.birth.unwrap_or("")
            ))?;
        }

        let answer = self.prompt.ask("Intended Person ID")?;
        Ok(answer.filter(|id| !id.is_empty()).map(PersonId))
    }
}
