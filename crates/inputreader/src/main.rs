//! inputreader CLI - ask questions and numbered selections from shell scripts

mod cli;
mod commands;
mod logging;
mod menu;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use cli::Commands;
use inputreader_core::InputReader;
use menu::Menu;
use owo_colors::OwoColorize;

fn main() -> ExitCode {
    let cli = cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("warning: {:#}", e);
    }

    // Prompts go to stderr so stdout carries only the answer
    let prompt_out: Box<dyn Write> = if cli.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    };
    let mut reader = InputReader::from_buffered(io::stdin().lock(), prompt_out);
    let mut stdout = io::stdout().lock();

    let (command, result) = match cli.command {
        Some(Commands::Ask { prompt }) => (
            "ask",
            commands::run_ask(&mut reader, &mut stdout, &prompt, cli.json),
        ),
        Some(Commands::Select {
            prompt,
            options,
            default,
            menu,
            index,
        }) => (
            "select",
            Menu::resolve(prompt, options, default, menu.as_deref())
                .map_err(anyhow::Error::from)
                .and_then(|menu| {
                    commands::run_select(&mut reader, &mut stdout, &menu, index, cli.json)
                }),
        ),
        None => {
            // No subcommand - print version info
            if !cli.quiet {
                let _ = writeln!(stdout, "inputreader v{}", env!("CARGO_PKG_VERSION"));
                let _ = writeln!(stdout, "Use --help for usage information");
            }
            return ExitCode::SUCCESS;
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let (_, exit_code) = output::classify(&e);
            if cli.json {
                let _ = writeln!(stdout, "{}", output::error_json(command, &e));
            } else {
                eprintln!("{} {:#}", "error:".red().bold(), e);
            }
            ExitCode::from(exit_code)
        }
    }
}
