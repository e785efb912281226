//! Implementation of the `inputreader ask` command

use std::io::Write;

use inputreader_core::Prompter;
use tracing::debug;

use crate::output::{AskData, JsonResponse};

/// Run the ask command
///
/// # Arguments
/// * `prompter` - Where the question is asked
/// * `out` - Where the answer is printed
/// * `prompt` - The question
/// * `json_output` - Output in JSON format
pub fn run_ask(
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    prompt: &str,
    json_output: bool,
) -> anyhow::Result<u8> {
    let answer = prompter.ask(prompt)?;
    debug!(len = answer.len(), "answer received");

    if json_output {
        let response = JsonResponse::ok("ask", AskData { answer });
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
    } else {
        writeln!(out, "{}", answer)?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ScriptedPrompter;
    use inputreader_core::ReaderError;

    #[test]
    fn test_ask_prints_answer() {
        let mut prompter = ScriptedPrompter::new().with_text_responses(&["  Ada  "]);
        let mut out = Vec::new();
        let code = run_ask(&mut prompter, &mut out, "Name?", false).unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "  Ada  \n");
        assert_eq!(prompter.asked, vec!["Name?"]);
    }

    #[test]
    fn test_ask_json() {
        let mut prompter = ScriptedPrompter::new().with_text_responses(&["yes"]);
        let mut out = Vec::new();
        run_ask(&mut prompter, &mut out, "Sure?", true).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["command"], "ask");
        assert_eq!(json["data"]["answer"], "yes");
    }

    #[test]
    fn test_ask_propagates_read_error() {
        let mut prompter = ScriptedPrompter::new();
        let mut out = Vec::new();
        let err = run_ask(&mut prompter, &mut out, "Name?", false).unwrap_err();
        assert!(matches!(err.downcast_ref::<ReaderError>(), Some(ReaderError::Read(_))));
        assert!(out.is_empty());
    }
}
