//! The prompt reader session

use std::io::{BufRead, BufReader, Read, Write};

use tracing::{debug, trace};

use crate::config::InputOptions;
use crate::error::{ReaderError, ReaderResult};
use crate::format::{self, Diagnostic};
use crate::interaction::Prompter;

/// A prompt session over a buffered input and an output
///
/// The line buffer is created once and kept for the lifetime of the session,
/// so bytes read ahead of one answer are available to the next call.
pub struct InputReader<R, W> {
    reader: R,
    writer: W,
}

/// Where a selection loop currently stands
enum SelectState {
    AwaitingInput,
    Retrying(Diagnostic),
    Done(ReaderResult<usize>),
}

impl<R: Read, W: Write> InputReader<BufReader<R>, W> {
    /// Create a session, wrapping `reader` in a line buffer
    pub fn new(reader: R, writer: W) -> Self {
        Self::from_buffered(BufReader::new(reader), writer)
    }
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    /// Create a session over an input that is already buffered
    pub fn from_buffered(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// The output this session writes prompts to
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the session, returning the buffered input and the output
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Ask a free-text question
    ///
    /// Any complete line is accepted, including an empty one. The trailing
    /// line terminator is removed; everything else is returned as typed.
    pub fn ask(&mut self, prompt: &str) -> ReaderResult<String> {
        self.emit(&format::question(prompt));
        self.read_line()
    }

    /// Ask the user to pick one of `options` by number and return its label
    pub fn select<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
        opts: &InputOptions,
    ) -> ReaderResult<String> {
        let index = self.select_index(prompt, options, opts)?;
        Ok(options[index].as_ref().to_string())
    }

    /// Ask the user to pick one of `options` by number and return its position
    ///
    /// Re-prompts until a valid number is entered, or an empty line is
    /// entered and a default is configured. Only a failed read ends the loop
    /// without a choice. A default that is not among `options` is rejected
    /// before anything is written.
    pub fn select_index<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
        opts: &InputOptions,
    ) -> ReaderResult<usize> {
        let default_index = match opts.default_label() {
            Some(label) => Some(
                options
                    .iter()
                    .position(|o| o.as_ref() == label)
                    .ok_or_else(|| ReaderError::DefaultNotInOptions {
                        default: label.to_string(),
                    })?,
            ),
            None => None,
        };

        self.emit(&format::menu(prompt, options));

        let mut state = SelectState::AwaitingInput;
        let outcome = loop {
            state = match state {
                SelectState::AwaitingInput => {
                    self.emit(&format::entry_prompt(default_index));
                    match self.read_line() {
                        Ok(line) => match evaluate(&line, options.len(), default_index) {
                            Ok(index) => SelectState::Done(Ok(index)),
                            Err(diagnostic) => SelectState::Retrying(diagnostic),
                        },
                        Err(e) => SelectState::Done(Err(e)),
                    }
                }
                SelectState::Retrying(diagnostic) => {
                    debug!(reason = ?diagnostic, "rejected selection attempt");
                    self.emit(&format!("{diagnostic}\n\n"));
                    SelectState::AwaitingInput
                }
                SelectState::Done(outcome) => break outcome,
            };
        };

        // Keep spacing consistent before whatever is printed next
        self.emit("\n");

        if let Ok(index) = &outcome {
            debug!(index = *index, label = options[*index].as_ref(), "selection resolved");
        }
        outcome
    }

    /// Read one newline-terminated line, without its trailing CR/LF
    fn read_line(&mut self) -> ReaderResult<String> {
        let mut buf = Vec::new();
        self.reader.read_until(b'\n', &mut buf)?;
        if buf.last() != Some(&b'\n') {
            return Err(ReaderError::end_of_input());
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\r', '\n']).to_string();
        trace!(line = %line, "read line");
        Ok(line)
    }

    /// Write prompt text; failures are logged, never returned
    fn emit(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush());
        if let Err(e) = result {
            debug!(error = %e, "failed to write prompt output");
        }
    }
}

/// Decide what a single answer line means for a selection
fn evaluate(line: &str, len: usize, default_index: Option<usize>) -> Result<usize, Diagnostic> {
    if line.is_empty() {
        return default_index.ok_or(Diagnostic::Empty);
    }
    let n: i64 = line.parse().map_err(|_| Diagnostic::NotANumber {
        input: line.to_string(),
    })?;
    match usize::try_from(n) {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(Diagnostic::OutOfRange {
            input: line.to_string(),
            max: len,
        }),
    }
}

impl<R: BufRead, W: Write> Prompter for InputReader<R, W> {
    fn ask(&mut self, prompt: &str) -> ReaderResult<String> {
        InputReader::ask(self, prompt)
    }

    fn select_index(
        &mut self,
        prompt: &str,
        options: &[&str],
        opts: &InputOptions,
    ) -> ReaderResult<usize> {
        InputReader::select_index(self, prompt, options, opts)
    }
}
