mod app;
mod command;
mod config;
mod effects;
mod logging;
mod render;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    let config = config::load(&config_path)?;
    logging::initialize(config.log);
    app::run_app(&config)
}
