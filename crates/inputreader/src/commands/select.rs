//! Implementation of the `inputreader select` command

use std::io::Write;

use inputreader_core::Prompter;
use tracing::debug;

use crate::menu::Menu;
use crate::output::{JsonResponse, SelectData};

/// Run the select command
///
/// # Arguments
/// * `prompter` - Where the menu is shown
/// * `out` - Where the choice is printed
/// * `menu` - Prompt, options and default
/// * `print_index` - Print the 1-based number instead of the label
/// * `json_output` - Output in JSON format
pub fn run_select(
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    menu: &Menu,
    print_index: bool,
    json_output: bool,
) -> anyhow::Result<u8> {
    let options: Vec<&str> = menu.options.iter().map(String::as_str).collect();
    let index = prompter.select_index(&menu.prompt, &options, &menu.input_options())?;
    let answer = options
        .get(index)
        .map(|label| label.to_string())
        .ok_or_else(|| anyhow::anyhow!("selection {} is out of range", index + 1))?;
    debug!(index, answer = %answer, "option chosen");

    if json_output {
        let response = JsonResponse::ok(
            "select",
            SelectData {
                answer,
                index: index + 1,
            },
        );
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
    } else if print_index {
        writeln!(out, "{}", index + 1)?;
    } else {
        writeln!(out, "{}", answer)?;
    }
    Ok(0)
}
