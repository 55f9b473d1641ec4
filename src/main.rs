use anyhow::Result;

use penalty_tracker::cli::Command;
use penalty_tracker::{handle_import, handle_report, handle_reset, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Import { path } => handle_import(path),
        Command::Report { month, gender } => handle_report(month.as_deref(), gender.as_deref()),
        Command::Reset => handle_reset(),
    }
}
