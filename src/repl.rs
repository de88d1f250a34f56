use std::io::{BufRead, Write};

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::info;

use crate::{
    diagnostics::Result,
    frontend::{Response, Session, render},
};

/// Settings for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    pub prompt: String,
}

pub struct Repl {
    session: Session,
    config: ReplConfig,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            session: Session::new(),
            config,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        editor.add_history_entry(trimmed).ok();
                    }
                    let response = self.session.handle_line(trimmed);
                    if let Some(text) = render(&response) {
                        println!("{text}");
                    }
                    if response == Response::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", render(&Response::Quit).unwrap_or_default());
                    break;
                }
                Err(ReadlineError::Interrupted) => break,
                Err(err) => return Err(err.into()),
            }
        }
        info!(
            variables = self.session.calculator().environment().len(),
            "session finished"
        );
        Ok(())
    }
}

/// Feeds every line of `input` through a fresh session, writing rendered
/// responses to `output`. Stops after `/exit`; reaching the end of input
/// says goodbye as the interactive loop does on EOF.
///
/// Returns the number of lines that produced an error.
pub fn run_lines<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let mut session = Session::new();
    let mut failures = 0;
    for line in input.lines() {
        let response = session.handle_line(&line?);
        if response == Response::Quit {
            break;
        }
        if matches!(response, Response::Error(_)) {
            failures += 1;
        }
        if let Some(text) = render(&response) {
            writeln!(output, "{text}")?;
        }
    }
    if let Some(text) = render(&Response::Quit) {
        writeln!(output, "{text}")?;
    }
    Ok(failures)
}
