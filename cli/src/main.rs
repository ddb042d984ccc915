mod app;
mod config;

use clap::{Parser, ValueEnum};
use common::{log, logger};

use config::{BotConfig, Config, FirstPlayerConfig};

#[derive(Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    Minimax,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Ai,
    Random,
}

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = "tictactoe_config.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides the configured bot.
    #[arg(long)]
    bot: Option<BotArg>,

    /// Overrides who makes the first move.
    #[arg(long)]
    first: Option<FirstArg>,
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(bot) = args.bot {
        config.bot = match bot {
            BotArg::Random => BotConfig::Random,
            BotArg::Minimax => BotConfig::Minimax,
        };
    }
    if let Some(first) = args.first {
        config.first_player = match first {
            FirstArg::Human => FirstPlayerConfig::Human,
            FirstArg::Ai => FirstPlayerConfig::Ai,
            FirstArg::Random => FirstPlayerConfig::Random,
        };
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = config::load_config(&args.config)?;
    apply_overrides(&mut config, &args);
    log!("Starting game with bot {:?}, first player {:?}", config.bot, config.first_player);

    let status = app::run_game(&config)?;
    log!("Game finished with status {:?}", status);

    Ok(())
}
