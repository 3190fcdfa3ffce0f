pub mod api;
pub mod bracket;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod services;
pub mod stats;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Generator};
use cli::Cli;
use colored::Colorize;
use uuid::Uuid;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::{setup, DbConn, PlayerStore};
use crate::services::{BracketService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_database(config: &AppConfig) -> Result<DbConn> {
    let pool = database::create_pool(&config.database.path, 1)?;
    database::get_connection(&pool)
}

pub fn handle_serve(port: u16) -> Result<()> {
    let config = AppConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init(reset: bool) -> Result<()> {
    let config = AppConfig::from_env()?;
    let conn = open_database(&config)?;

    if reset {
        setup::reset_database(&conn)?;
    } else {
        setup::init_database(&conn)?;
    }
    log::info!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_bracket(tournament_id: Uuid, seed: Option<u64>) -> Result<()> {
    let config = AppConfig::from_env()?;
    let conn = open_database(&config)?;
    setup::init_database(&conn)?;

    let service = match seed {
        Some(seed) => BracketService::with_seed(Some(seed)),
        None => BracketService::new(&config.bracket),
    };
    let bracket = service
        .generate(&*conn, tournament_id)
        .context("Bracket generation failed")?;

    println!(
        "{} {} games for tournament {}",
        "Created".green().bold(),
        bracket.games_created,
        tournament_id
    );
    for (board, game) in bracket.games.iter().enumerate() {
        let name = |id: Option<Uuid>| -> Result<String> {
            let player = match id {
                Some(id) => conn.get_player(id)?,
                None => None,
            };
            Ok(player.map(|p| p.full_name()).unwrap_or_else(|| "-".to_string()))
        };
        println!(
            "  Board {}: {} vs {}",
            board + 1,
            name(game.player_white_id)?.bold(),
            name(game.player_black_id)?
        );
    }
    for player in &bracket.excluded {
        println!("  {} {}", "Sits out:".yellow(), player.full_name());
    }

    Ok(())
}

pub fn handle_completions<G: Generator>(generator: G) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(generator, &mut command, name, &mut std::io::stdout());
    Ok(())
}
