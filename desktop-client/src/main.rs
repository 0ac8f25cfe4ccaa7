mod app;
mod sprites;
mod theme;

use clap::Parser;
use common::config::{Config, ConfigManager};
use common::{log, logger};
use eframe::egui;

#[derive(Parser)]
#[command(name = "rps_desktop_client")]
struct Args {
    /// Path to the yaml config file
    #[arg(long, default_value = "rps.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config: Config = ConfigManager::from_yaml_file(&args.config).get_config()?;
    log!(
        "Starting Rock Paper Scissors ({} ms reveal delay)",
        config.thinking_delay_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 460.0])
            .with_title("Rock Paper Scissors"),
        ..Default::default()
    };

    eframe::run_native(
        "Rock Paper Scissors",
        options,
        Box::new(move |cc| {
            let app = app::RpsApp::new(cc, config)?;
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
