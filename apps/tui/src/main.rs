use clap::Parser;
use color_eyre::Result;
use forecast_tui::cli::CliArgs;
use forecast_tui::config::{debug_enabled, init_app_config};
use forecast_tui::{event, terminal, App};
use log::{info, LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    init_logging();
    info!("Weatherbit settings: {config:?}");

    // Headless when asked to, or when stdout is not a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(config, args.city, args.json).await;
    }

    let mut app = App::new(config);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

/// Logs go to stderr and only when debugging was requested, so they do not
/// fight with the terminal UI.
fn init_logging() {
    if !debug_enabled() {
        return;
    }

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
