//! Prompt rendering, diagnostics and quoting
//!
//! Everything the reader writes is produced here so the exact text can be
//! tested without driving a session.

use std::fmt;

/// Quote raw user input for a diagnostic message
///
/// Surrounds the text with double quotes and escapes quotes, backslashes and
/// control characters.
pub fn quote(raw: &str) -> String {
    format!("{raw:?}")
}

/// The block written before reading a free-text answer
pub fn question(prompt: &str) -> String {
    format!("\n{prompt}\n")
}

/// The numbered option list written once per selection
pub fn menu<S: AsRef<str>>(prompt: &str, options: &[S]) -> String {
    let mut out = format!("{prompt}\n\n");
    for (i, option) in options.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, option.as_ref()));
    }
    out.push('\n');
    out
}

/// The input line shown before each selection attempt
///
/// `default_index` is zero-based; the rendered number is one-based.
pub fn entry_prompt(default_index: Option<usize>) -> String {
    match default_index {
        Some(i) => format!("Enter a number (Default is {}): ", i + 1),
        None => "Enter a number: ".to_string(),
    }
}

/// Why a selection attempt was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Empty line and no default to fall back on
    Empty,
    /// The line is not a base-10 integer
    NotANumber { input: String },
    /// The number is outside `1..=max`
    OutOfRange { input: String, max: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Empty => write!(f, "Input must not be empty. Answer by a number."),
            Diagnostic::NotANumber { input } => {
                write!(f, "{} is not a valid input. Answer by a number.", quote(input))
            }
            Diagnostic::OutOfRange { input, max } => write!(
                f,
                "{} is not a valid choice. Choose a number from 1 to {}.",
                quote(input),
                max
            ),
        }
    }
}
