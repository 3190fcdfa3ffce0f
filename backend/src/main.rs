use anyhow::Result;

use chess_tournament_records::cli::Command;
use chess_tournament_records::{
    handle_bracket, handle_completions, handle_init, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
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
        Command::Init { reset } => handle_init(*reset),
        Command::Bracket {
            tournament_id,
            seed,
        } => handle_bracket(*tournament_id, *seed),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
