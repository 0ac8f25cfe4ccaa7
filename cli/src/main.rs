mod game_loop;

use clap::Parser;
use common::config::{Config, ConfigManager};
use common::games::SessionRng;
use common::{log, logger};

#[derive(Parser)]
#[command(name = "rps_cli")]
struct Args {
    /// Player name; skips the interactive name prompt
    #[arg(long)]
    name: Option<String>,

    /// Path to the yaml config file
    #[arg(long, default_value = "rps.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Cli".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config: Config = ConfigManager::from_yaml_file(&args.config).get_config()?;
    log!("Starting Rock Paper Scissors session");

    let mut rng = SessionRng::from_random();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let session = game_loop::run_game_loop(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rng,
        args.name,
        &config.player_name,
    )
    .map_err(|e| e.to_string())?;

    let scores = session.scores();
    log!(
        "Session finished: {} rounds, {} player wins, {} computer wins, {} ties",
        session.rounds_played(),
        scores.player,
        scores.opponent,
        scores.ties
    );

    Ok(())
}
