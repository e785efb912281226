//! Interaction seam
//!
//! Callers that only need to ask questions depend on [`Prompter`] rather than
//! on a concrete [`InputReader`](crate::InputReader), so their logic can be
//! tested against scripted answers.

use crate::config::InputOptions;
use crate::error::ReaderResult;

/// Something that can ask questions and run numbered selections
pub trait Prompter {
    /// Ask a free-text question and return the answer line
    fn ask(&mut self, prompt: &str) -> ReaderResult<String>;

    /// Run a numbered selection and return the zero-based position chosen
    ///
    /// Implementations must return a position within `options`.
    fn select_index(
        &mut self,
        prompt: &str,
        options: &[&str],
        opts: &InputOptions,
    ) -> ReaderResult<usize>;

    /// Run a numbered selection and return the chosen label
    fn select(
        &mut self,
        prompt: &str,
        options: &[&str],
        opts: &InputOptions,
    ) -> ReaderResult<String> {
        let index = self.select_index(prompt, options, opts)?;
        Ok(options[index].to_string())
    }
}
