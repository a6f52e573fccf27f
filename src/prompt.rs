//! User input for the interactive menu
//!
//! The menu driver asks questions through the [`Prompter`] trait. The default
//! implementation reads lines from any `BufRead`, which is what scripted
//! sessions and tests use. Building with the `dialoguer` feature adds a
//! terminal prompt with line editing, picked automatically when stdin is a tty.

use crate::error::{AppError, Result};
use crate::output::{OutputFormatter, OutputFormatterFactory};
use std::io::{self, BufRead, Write};

/// Source of answers to menu questions
pub trait Prompter {
    /// Show `prompt` and read one answer; `None` means input is exhausted
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line-oriented prompter over arbitrary reader and writer
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W, enable_color: bool) -> Self {
        Self {
            reader,
            writer,
            formatter: OutputFormatterFactory::create_formatter(enable_color),
        }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio(enable_color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), enable_color)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", self.formatter.format_prompt(prompt))
            .and_then(|_| self.writer.flush())
            .map_err(|e| AppError::io(format!("Failed to write prompt: {}", e)))?;

        // Invalid UTF-8 is decoded lossily and handled as an ordinary answer
        let mut line = Vec::new();
        let read = self.reader.read_until(b'\n', &mut line)
            .map_err(|e| AppError::io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }

        let answer = String::from_utf8_lossy(&line);
        Ok(Some(answer.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Terminal prompter backed by dialoguer
#[cfg(feature = "dialoguer")]
pub struct DialoguerPrompter;

#[cfg(feature = "dialoguer")]
impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        use dialoguer::Input;

        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(AppError::io(format!("Input failed: {}", e))),
        }
    }
}

/// Pick the best prompter for the current process
pub fn create_prompter(enable_color: bool) -> Box<dyn Prompter> {
    #[cfg(feature = "dialoguer")]
    {
        use std::io::IsTerminal;
        if io::stdin().is_terminal() {
            return Box::new(DialoguerPrompter);
        }
    }

    Box::new(LinePrompter::stdio(enable_color))
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).ask(prompt)
    }
}
