//! CLI command implementations

pub mod ask;
pub mod select;

pub use ask::run_ask;
pub use select::run_select;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::io;

    use inputreader_core::{InputOptions, Prompter, ReaderError, ReaderResult};

    /// Prompter that replays canned answers and records what it was asked
    #[derive(Default)]
    pub struct ScriptedPrompter {
        text_responses: VecDeque<String>,
        select_responses: VecDeque<usize>,
        pub asked: Vec<String>,
        pub seen_defaults: Vec<Option<String>>,
    }

    impl ScriptedPrompter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_text_responses(mut self, responses: &[&str]) -> Self {
            self.text_responses = responses.iter().map(|s| s.to_string()).collect();
            self
        }

        pub fn with_select_responses(mut self, responses: Vec<usize>) -> Self {
            self.select_responses = responses.into();
            self
        }

        fn exhausted() -> ReaderError {
            ReaderError::Read(io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str) -> ReaderResult<String> {
            self.asked.push(prompt.to_string());
            self.text_responses.pop_front().ok_or_else(Self::exhausted)
        }

        fn select_index(
            &mut self,
            prompt: &str,
            _options: &[&str],
            opts: &InputOptions,
        ) -> ReaderResult<usize> {
            self.asked.push(prompt.to_string());
            self.seen_defaults.push(opts.default.clone());
            self.select_responses.pop_front().ok_or_else(Self::exhausted)
        }
    }
}
