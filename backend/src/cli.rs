use clap::{Parser, Subcommand};
use clap_complete::Shell;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(author, version, about = "chess tournament records backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Create the database schema
    Init {
        /// Drop every table first
        #[arg(long)]
        reset: bool,
    },
    /// Draw a first-round bracket for a tournament
    Bracket {
        tournament_id: Uuid,
        /// Shuffle seed (optional, overrides BRACKET_SEED)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
