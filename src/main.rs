use anyhow::Result;

use pickleball_ranking::cli::Command;
use pickleball_ranking::{handle_multipliers, handle_score, handle_serve, interpret};

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
        Command::Score { input, pretty } => handle_score(input, *pretty),
        Command::Multipliers => handle_multipliers(),
    }
}
