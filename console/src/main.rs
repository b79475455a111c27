mod config;
mod game_loop;
mod input;
mod render;

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tictactoe_engine::logger;
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::FirstPlayer;

use config::{resolve_config, save_config};
use game_loop::run_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Ai,
}

impl From<FirstPlayerArg> for FirstPlayer {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayer::Human,
            FirstPlayerArg::Ai => FirstPlayer::Ai,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax AI")]
struct Args {
    /// Who moves first; skips the startup prompt.
    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,

    /// YAML config file. A missing file means defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config to --config and exit.
    #[arg(long, requires = "config")]
    write_config: bool,

    /// Print diagnostic log lines to stderr.
    #[arg(long)]
    log: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.log {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config = resolve_config(args.config.as_deref(), args.first.map(FirstPlayer::from))?;
    log!("Config: {:?}", config);

    if args.write_config {
        if let Some(path) = &args.config {
            save_config(path, &config)?;
            log!("Config written to {}", path.display());
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(stdin.lock(), stdout.lock(), &config)?;

    Ok(())
}
